//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Herald using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Herald - Scheduled report pipeline
#[derive(Parser, Debug)]
#[command(name = "herald")]
#[command(version, about, long_about = None)]
#[command(author = "Herald Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "herald.toml", env = "HERALD_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "HERALD_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate and deliver the report for a single date
    Run(commands::run::RunArgs),

    /// Replay the pipeline across a date range
    Replay(commands::replay::ReplayArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
