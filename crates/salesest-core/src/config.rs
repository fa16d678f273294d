use std::path::PathBuf;

use crate::app_config::{AppConfig, Environment, ReportFormat};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so tests can use a `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let env = parse_environment(&or_default("SALESEST_ENV", "development")).map_err(|reason| {
        ConfigError::InvalidEnvVar {
            var: "SALESEST_ENV".to_string(),
            reason,
        }
    })?;

    let log_level = or_default("SALESEST_LOG_LEVEL", "info");
    let output_dir = PathBuf::from(or_default("SALESEST_OUTPUT_DIR", "./reports"));

    let report_format = or_default("SALESEST_REPORT_FORMAT", "markdown")
        .parse::<ReportFormat>()
        .map_err(|reason| ConfigError::InvalidEnvVar {
            var: "SALESEST_REPORT_FORMAT".to_string(),
            reason,
        })?;

    Ok(AppConfig {
        env,
        log_level,
        output_dir,
        report_format,
    })
}

fn parse_environment(s: &str) -> Result<Environment, String> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(format!(
            "unknown environment '{other}'; expected development, test, or production"
        )),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
