use crate::app_config::{
    AppConfig, Environment, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_SOURCE_BASE_URL,
    DEFAULT_USER_AGENT,
};
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
/// Every variable has a default, so only malformed values fail. `PORT` (as set
/// by most PaaS hosts) replaces the port of `ESQUI_BIND_ADDR` when present.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| invalid(var, e.to_string()))
    };

    let env = parse_environment(&or_default("ESQUI_ENV", "development"))?;

    let mut bind_addr = or_default("ESQUI_BIND_ADDR", "0.0.0.0:8000")
        .parse::<SocketAddr>()
        .map_err(|e| invalid("ESQUI_BIND_ADDR", e.to_string()))?;

    if let Ok(raw_port) = lookup("PORT") {
        let port = raw_port
            .trim()
            .parse::<u16>()
            .map_err(|e| invalid("PORT", e.to_string()))?;
        bind_addr.set_port(port);
    }

    let log_level = or_default("ESQUI_LOG_LEVEL", "info");
    let resorts_path = PathBuf::from(or_default("ESQUI_RESORTS_PATH", "./config/resorts.yaml"));

    let source_base_url = or_default("ESQUI_SOURCE_BASE_URL", DEFAULT_SOURCE_BASE_URL);
    if !(source_base_url.starts_with("http://") || source_base_url.starts_with("https://")) {
        return Err(invalid(
            "ESQUI_SOURCE_BASE_URL",
            format!("\"{source_base_url}\" must start with http:// or https://"),
        ));
    }

    let scraper_request_timeout_secs = parse_u64(
        "ESQUI_SCRAPER_REQUEST_TIMEOUT_SECS",
        &DEFAULT_REQUEST_TIMEOUT_SECS.to_string(),
    )?;
    if scraper_request_timeout_secs == 0 {
        return Err(invalid(
            "ESQUI_SCRAPER_REQUEST_TIMEOUT_SECS",
            "timeout must be at least 1 second".to_string(),
        ));
    }

    let scraper_user_agent = or_default("ESQUI_SCRAPER_USER_AGENT", DEFAULT_USER_AGENT);

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        resorts_path,
        source_base_url,
        scraper_request_timeout_secs,
        scraper_user_agent,
    })
}

fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "ESQUI_ENV".to_string(),
            reason: format!("unknown environment \"{other}\""),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
