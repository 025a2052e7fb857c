//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::HeraldConfig;
use crate::config::secret_string;
use crate::domain::errors::HeraldError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (`${VAR}` syntax)
/// 3. Parses the TOML into [`HeraldConfig`]
/// 4. Applies environment variable overrides (`HERALD_*` prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - Environment variable substitution fails
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use herald::config::loader::load_config;
///
/// let config = load_config("herald.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<HeraldConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(HeraldError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        HeraldError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: HeraldConfig = toml::from_str(&contents)
        .map_err(|e| HeraldError::Configuration(format!("Failed to parse TOML: {e}")))?;

    apply_env_overrides(&mut config);

    config
        .validate()
        .map_err(|e| HeraldError::Configuration(format!("Configuration validation failed: {e}")))?;

    Ok(config)
}

/// Substitutes environment variables in the format `${VAR_NAME}`
///
/// Comment lines are left untouched so documented placeholders don't
/// require the variable to be set.
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| HeraldError::Configuration(format!("Invalid substitution pattern: {e}")))?;
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    for line in input.lines() {
        let trimmed = line.trim_start();

        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{var_name}}}");
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(HeraldError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using the `HERALD_*` prefix
///
/// Environment variables follow the pattern `HERALD_<SECTION>_<KEY>`,
/// for example `HERALD_DATABASE_HOST` or `HERALD_EMAIL_ENABLED`.
fn apply_env_overrides(config: &mut HeraldConfig) {
    // Application overrides
    if let Ok(val) = std::env::var("HERALD_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }
    if let Ok(val) = std::env::var("HERALD_APPLICATION_DRY_RUN") {
        config.application.dry_run = val.parse().unwrap_or(false);
    }

    // Database overrides
    if let Ok(val) = std::env::var("HERALD_DATABASE_HOST") {
        config.database.host = val;
    }
    if let Ok(val) = std::env::var("HERALD_DATABASE_PORT") {
        if let Ok(port) = val.parse() {
            config.database.port = port;
        }
    }
    if let Ok(val) = std::env::var("HERALD_DATABASE_DBNAME") {
        config.database.dbname = val;
    }
    if let Ok(val) = std::env::var("HERALD_DATABASE_USER") {
        config.database.user = val;
    }
    if let Ok(val) = std::env::var("HERALD_DATABASE_PASSWORD") {
        config.database.password = secret_string(val);
    }

    // Report overrides
    if let Ok(val) = std::env::var("HERALD_REPORT_OUTPUT_DIR") {
        config.report.output_dir = val;
    }
    if let Ok(val) = std::env::var("HERALD_REPORT_FILE_PREFIX") {
        config.report.file_prefix = val;
    }

    // Email overrides
    if let Ok(val) = std::env::var("HERALD_EMAIL_ENABLED") {
        config.email.enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("HERALD_EMAIL_SMTP_HOST") {
        config.email.smtp_host = val;
    }
    if let Ok(val) = std::env::var("HERALD_EMAIL_PASSWORD") {
        config.email.password = Some(secret_string(val));
    }

    // FTP overrides
    if let Ok(val) = std::env::var("HERALD_FTP_ENABLED") {
        config.ftp.enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("HERALD_FTP_HOST") {
        config.ftp.host = val;
    }
    if let Ok(val) = std::env::var("HERALD_FTP_PASSWORD") {
        config.ftp.password = Some(secret_string(val));
    }

    // Logging overrides
    if let Ok(val) = std::env::var("HERALD_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("HERALD_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
}
