//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "herald.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing Herald configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        match fs::write(&self.output, Self::sample_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Set HERALD_DATABASE_PASSWORD in the environment or a .env file");
                println!("  3. Validate configuration: herald validate-config");
                println!("  4. Rehearse a run: herald run --dry-run");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(5) // Fatal error exit code
            }
        }
    }

    /// Sample configuration
    fn sample_config() -> &'static str {
        r#"# Herald Configuration File
# Scheduled report pipeline

[application]
log_level = "info"
dry_run = false

[database]
host = "localhost"
port = 5432
dbname = "sales"
user = "herald"
password = "${HERALD_DATABASE_PASSWORD}"
max_connections = 4
connection_timeout_seconds = 30

[report]
output_dir = "reports"
file_prefix = "daily_report"
sheet_name = "Report"
headers = ["Id", "Product", "Amount", "Quantity", "Date"]
count_query = "SELECT COUNT(*) FROM transactions WHERE transaction_date::date = $1"
data_query = "SELECT id, product, amount::float8, quantity, transaction_date::date FROM transactions WHERE transaction_date::date = $1 ORDER BY id"
# Zero-based column summed for the amount quoted in success notifications
summary_column = 2

[report.format]
locale = "european"  # european | anglo
decimals = 2

[email]
enabled = false
smtp_host = "smtp.example.com"
smtp_port = 587
use_ssl = false
sender = "reports@example.com"
# password = "${HERALD_EMAIL_PASSWORD}"
recipients = ["ops@example.com"]
error_recipients = []
max_attachment_mb = 10

[ftp]
enabled = false
host = "ftp.example.com"
port = 21
username = "uploader"
# password = "${HERALD_FTP_PASSWORD}"
remote_dir = "/reports"
passive = true
# max_upload_mb = 50

[logging]
local_enabled = false
local_path = "logs"
local_rotation = "daily"
"#
    }
}
