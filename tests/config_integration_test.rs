//! Integration tests for configuration loading

use herald::config::{load_config, NumberLocale};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

const MINIMAL: &str = r#"
[application]
log_level = "info"

[database]
host = "db.internal"
dbname = "sales"
user = "herald"
password = "secret"

[report]
count_query = "SELECT COUNT(*) FROM transactions WHERE transaction_date::date = $1"
data_query = "SELECT id, amount FROM transactions WHERE transaction_date::date = $1"
"#;

#[test]
fn minimal_config_fills_defaults() {
    let file = write_config(MINIMAL);
    let config = load_config(file.path()).unwrap();

    assert_eq!(config.application.log_level, "info");
    assert!(!config.application.dry_run);
    assert_eq!(config.database.port, 5432);
    assert_eq!(config.database.max_connections, 4);
    assert_eq!(config.report.output_dir, "reports");
    assert_eq!(config.report.sheet_name, "Report");
    assert_eq!(config.report.format.locale, NumberLocale::European);
    assert_eq!(config.report.format.decimals, 2);
    assert!(!config.email.enabled);
    assert!(!config.ftp.enabled);
    assert_eq!(config.email.max_attachment_mb, 10);
    assert_eq!(config.ftp.remote_dir, "/");
    assert!(config.ftp.passive);
}

#[test]
fn full_config_loads_every_section() {
    let file = write_config(
        r#"
[application]
log_level = "debug"
dry_run = true

[database]
host = "db.internal"
port = 6432
dbname = "sales"
user = "herald"
password = "secret"
max_connections = 8

[report]
output_dir = "out"
sheet_name = "Daily Sales"
headers = ["Id", "Product", "Amount"]
count_query = "SELECT COUNT(*) FROM sales WHERE sale_date = $1"
data_query = "SELECT id, product, amount::float8 FROM sales WHERE sale_date = $1"
summary_column = 2

[report.format]
locale = "anglo"
decimals = 3

[email]
enabled = true
smtp_host = "smtp.internal"
smtp_port = 465
use_ssl = true
sender = "reports@example.com"
password = "mail-secret"
recipients = ["ops@example.com", "sales@example.com"]
error_recipients = ["oncall@example.com"]
max_attachment_mb = 25

[ftp]
enabled = true
host = "ftp.internal"
port = 2121
username = "uploader"
password = "ftp-secret"
remote_dir = "/inbox/reports"
passive = false
max_upload_mb = 100

[logging]
local_enabled = true
local_path = "var/log/herald"
local_rotation = "hourly"
"#,
    );

    let config = load_config(file.path()).unwrap();

    assert!(config.application.dry_run);
    assert_eq!(config.database.port, 6432);
    assert_eq!(config.report.headers.len(), 3);
    assert_eq!(config.report.summary_column, Some(2));
    assert_eq!(config.report.format.locale, NumberLocale::Anglo);
    assert_eq!(config.report.format.decimals, 3);
    assert!(config.email.enabled);
    assert!(config.email.use_ssl);
    assert_eq!(config.email.recipients.len(), 2);
    assert_eq!(
        config.email.error_recipients_or_default(),
        &["oncall@example.com".to_string()]
    );
    assert!(config.ftp.enabled);
    assert!(!config.ftp.passive);
    assert_eq!(config.ftp.max_upload_mb, Some(100));
    assert!(config.logging.local_enabled);
    assert_eq!(config.logging.local_rotation, "hourly");
}

#[test]
fn missing_file_is_a_configuration_error() {
    let err = load_config("does-not-exist.toml").unwrap_err();
    assert!(err.to_string().contains("Configuration file not found"));
}

#[test]
fn missing_required_key_fails_to_parse() {
    // database.host is required and has no default
    let file = write_config(
        r#"
[application]
log_level = "info"

[database]
dbname = "sales"
user = "herald"
password = "secret"

[report]
count_query = "SELECT COUNT(*) FROM t WHERE d = $1"
data_query = "SELECT * FROM t WHERE d = $1"
"#,
    );

    let err = load_config(file.path()).unwrap_err();
    assert!(err.to_string().contains("Failed to parse TOML"));
}

#[test]
fn enabled_email_without_recipients_fails_validation() {
    let file = write_config(&format!(
        "{MINIMAL}\n[email]\nenabled = true\nsmtp_host = \"smtp.internal\"\nsender = \"reports@example.com\"\n"
    ));

    let err = load_config(file.path()).unwrap_err();
    assert!(err.to_string().contains("email.recipients"));
}

#[test]
fn query_without_date_binding_fails_validation() {
    let file = write_config(
        r#"
[application]
log_level = "info"

[database]
host = "db.internal"
dbname = "sales"
user = "herald"
password = "secret"

[report]
count_query = "SELECT COUNT(*) FROM transactions"
data_query = "SELECT id FROM transactions WHERE transaction_date::date = $1"
"#,
    );

    let err = load_config(file.path()).unwrap_err();
    assert!(err.to_string().contains("count_query"));
}

#[test]
fn env_substitution_resolves_placeholders() {
    std::env::set_var("HERALD_IT_SUBST_PASSWORD", "from-env");
    let file = write_config(
        r#"
[application]
log_level = "info"

[database]
host = "db.internal"
dbname = "sales"
user = "herald"
password = "${HERALD_IT_SUBST_PASSWORD}"

[report]
count_query = "SELECT COUNT(*) FROM t WHERE d = $1"
data_query = "SELECT * FROM t WHERE d = $1"
"#,
    );

    let config = load_config(file.path()).unwrap();
    use secrecy::ExposeSecret;
    assert_eq!(config.database.password.expose_secret().as_ref(), "from-env");
    std::env::remove_var("HERALD_IT_SUBST_PASSWORD");
}

#[test]
fn env_override_takes_precedence() {
    std::env::set_var("HERALD_REPORT_FILE_PREFIX", "overridden_report");
    let file = write_config(MINIMAL);

    let config = load_config(file.path()).unwrap();
    assert_eq!(config.report.file_prefix, "overridden_report");
    std::env::remove_var("HERALD_REPORT_FILE_PREFIX");
}
