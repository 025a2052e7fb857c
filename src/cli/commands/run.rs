//! Run command implementation
//!
//! This module implements the `run` command: one pipeline run for one
//! report date.

use crate::adapters::database::ReportDataSource;
use crate::adapters::email::EmailNotifier;
use crate::adapters::excel::XlsxRenderer;
use crate::adapters::ftp::FtpTransfer;
use crate::adapters::traits::{DataSource, TransferClient};
use crate::config::schema::HeraldConfig;
use crate::config::load_config;
use crate::core::pipeline::{ProcessorSettings, ReportProcessor, RunOptions};
use crate::domain::date::ReportDate;
use crate::domain::result::Result;
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the run command
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Report date (YYYY-MM-DD); defaults to yesterday
    #[arg(long)]
    pub date: Option<ReportDate>,

    /// Artifact output path; defaults to the configured output directory
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Skip email notifications for this run
    #[arg(long)]
    pub no_email: bool,

    /// Skip FTP distribution for this run
    #[arg(long)]
    pub no_ftp: bool,

    /// Dry run mode - check data existence only, produce no artifacts
    #[arg(long)]
    pub dry_run: bool,
}

impl RunArgs {
    /// Execute the run command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Starting run command");

        let mut config = load_config(config_path)?;

        if self.dry_run {
            tracing::info!("Enabling dry-run mode from CLI");
            config.application.dry_run = true;
        }

        let date = match self.date {
            Some(date) => date,
            None => yesterday()?,
        };
        let output_path = self
            .output
            .clone()
            .unwrap_or_else(|| config.report.output_path_for(date));

        if config.application.dry_run {
            println!("🔍 DRY RUN MODE - No artifact will be produced");
            println!();
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

        let result = processor.process(date, &output_path, &options).await;

        println!();
        println!("📊 Run Summary:");
        println!("  Date: {date}");
        println!("  Records: {}", result.records_processed);
        if let Some(artifact) = &result.file_generated {
            println!("  Artifact: {}", artifact.display());
        }
        println!();

        if result.success {
            println!("✅ Report run completed!");
            Ok(0)
        } else {
            let reason = result.error.as_deref().unwrap_or("unknown error");
            println!("⚠️  Report run did not complete: {reason}");
            Ok(1)
        }
    }
}

/// Yesterday in local time, the default date for a scheduled daily run
pub(crate) fn yesterday() -> anyhow::Result<ReportDate> {
    chrono::Local::now()
        .date_naive()
        .pred_opt()
        .map(ReportDate::from)
        .ok_or_else(|| anyhow::anyhow!("Cannot determine previous day"))
}

/// Build the processor over the configured adapters
pub(crate) async fn build_processor(config: &HeraldConfig) -> Result<ReportProcessor> {
    let source = ReportDataSource::new(&config.database, &config.report)?;
    source.test_connection().await?;
    let source: Arc<dyn DataSource> = Arc::new(source);

    let renderer = Arc::new(XlsxRenderer::new(&config.report.format));

    let transfer: Option<Arc<dyn TransferClient>> = if config.ftp.enabled {
        Some(Arc::new(FtpTransfer::new(config.ftp.clone())))
    } else {
        None
    };

    let notifier = Arc::new(EmailNotifier::new(config.email.clone())?);

    Ok(ReportProcessor::new(
        source,
        renderer,
        transfer,
        notifier,
        ProcessorSettings::from_config(config),
    ))
}
