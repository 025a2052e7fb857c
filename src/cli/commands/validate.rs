//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the Herald configuration file.

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // load_config validates on load, so reaching Ok means both parse
        // and validation passed
        let config = match load_config(config_path) {
            Ok(c) => {
                println!("✅ Configuration file loaded successfully");
                c
            }
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Dry Run: {}", config.application.dry_run);
        println!(
            "  Database: {}@{}:{}/{}",
            config.database.user, config.database.host, config.database.port, config.database.dbname
        );
        println!("  Output Directory: {}", config.report.output_dir);
        println!("  File Prefix: {}", config.report.file_prefix);
        println!("  Sheet Name: {}", config.report.sheet_name);
        println!(
            "  Number Format: {:?} with {} decimals",
            config.report.format.locale, config.report.format.decimals
        );

        if config.email.enabled {
            println!(
                "  Email: enabled via {}:{} ({} recipients)",
                config.email.smtp_host,
                config.email.smtp_port,
                config.email.recipients.len()
            );
        } else {
            println!("  Email: disabled");
        }

        if config.ftp.enabled {
            println!(
                "  FTP: enabled via {}:{} -> {}",
                config.ftp.host, config.ftp.port, config.ftp.remote_dir
            );
        } else {
            println!("  FTP: disabled");
        }

        println!();
        Ok(0)
    }
}
