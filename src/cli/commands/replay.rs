//! Replay command implementation
//!
//! This module implements the `replay` command: day-by-day re-runs of the
//! pipeline across an inclusive date range.

use crate::cli::commands::run::build_processor;
use crate::config::load_config;
use crate::core::pipeline::RunOptions;
use crate::core::replay::ReplayEngine;
use crate::domain::date::ReportDate;
use crate::domain::errors::HeraldError;
use clap::Args;
use std::path::{Path, PathBuf};
use tokio::sync::watch;

/// Arguments for the replay command
#[derive(Args, Debug)]
pub struct ReplayArgs {
    /// First date of the range (YYYY-MM-DD, inclusive)
    #[arg(long)]
    pub from: ReportDate,

    /// Last date of the range (YYYY-MM-DD, inclusive)
    #[arg(long)]
    pub to: ReportDate,

    /// Report working directory; defaults to the configuration file's
    /// directory
    #[arg(long)]
    pub report_dir: Option<PathBuf>,

    /// Dry run mode - walk the range without processing any date
    #[arg(long)]
    pub dry_run: bool,

    /// Skip email notifications for every date
    #[arg(long)]
    pub no_email: bool,

    /// Skip FTP distribution for every date
    #[arg(long)]
    pub no_ftp: bool,

    /// Skip confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

impl ReplayArgs {
    /// Execute the replay command
    pub async fn execute(
        &self,
        config_path: &str,
        shutdown_signal: watch::Receiver<bool>,
    ) -> anyhow::Result<i32> {
        tracing::info!(from = %self.from, to = %self.to, "Starting replay command");

        let config = load_config(config_path)?;

        let report_dir = self.report_dir.clone().unwrap_or_else(|| {
            let parent = Path::new(config_path).parent();
            match parent {
                Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
                _ => PathBuf::from("."),
            }
        });
        let engine = ReplayEngine::new(report_dir);

        if self.dry_run {
            println!("🔍 DRY RUN MODE - No date will be processed");
            println!();
        }

        // Confirmation prompt (unless --yes or dry-run)
        if !self.yes && !self.dry_run {
            let days = self.from.days_until(&self.to) + 1;
            println!("Replay Configuration:");
            println!("  Range: {} .. {} ({days} dates)", self.from, self.to);
            println!("  Output directory: {}", config.report.output_dir);
            println!();
            print!("Proceed with replay? [y/N]: ");
            use std::io::{self, Write};
            io::stdout().flush()?;

            let mut input = String::new();
            io::stdin().read_line(&mut input)?;

            if !input.trim().eq_ignore_ascii_case("y") {
                println!("Replay cancelled.");
                return Ok(0);
            }
        }

        let processor = match build_processor(&config).await {
            Ok(p) => p,
            Err(e) => {
                tracing::error!(error = %e, "Failed to initialize pipeline");
                eprintln!("Failed to initialize pipeline: {e}");
                return Ok(4); // Connection error exit code
            }
        };

        let options = RunOptions {
            transfer: !self.no_ftp,
            notify: !self.no_email,
        };

        let report_config = &config.report;
        let summary = engine
            .reprocess(
                self.from,
                self.to,
                self.dry_run,
                Some(shutdown_signal),
                |date| {
                    let processor = &processor;
                    let options = &options;
                    let output_path = report_config.output_path_for(date);
                    async move {
                        let result = processor.process(date, &output_path, options).await;
                        if result.success {
                            Ok(())
                        } else {
                            Err(HeraldError::Pipeline(
                                result.error.unwrap_or_else(|| "unknown error".to_string()),
                            ))
                        }
                    }
                },
            )
            .await?;

        println!();
        println!("📊 Replay Summary:");
        println!("  Total dates: {}", summary.total);
        println!("  Successful: {}", summary.successful);
        println!("  Failed: {}", summary.failed);
        println!("  Skipped: {}", summary.skipped);
        println!("  Duration: {:.2}s", summary.duration.as_secs_f64());
        println!("  Success Rate: {:.2}%", summary.success_rate());
        println!();

        let exit_code = if summary.interrupted {
            println!("⚠️  Replay interrupted. Re-run the same command to cover the remaining dates.");
            130 // SIGINT exit code (standard Unix convention)
        } else if summary.failed > 0 {
            println!("⚠️  Replay completed with failed dates");
            1
        } else {
            println!("✅ Replay completed!");
            0
        };

        Ok(exit_code)
    }
}
