use crate::app_config::AppConfig;
use crate::ConfigError;

pub const DEFAULT_API_URL: &str = "https://irecycle-digital-research.vercel.app/api/search";
pub const DEFAULT_USER_AGENT: &str = "recyclefind/0.1 (recycling-search)";

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
/// Does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build configuration from an env-var lookup function, so tests can feed a
/// plain `HashMap` instead of mutating the process environment.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let api_url = or_default("RECYCLEFIND_API_URL", DEFAULT_API_URL)
        .trim()
        .to_string();
    if api_url.is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            var: "RECYCLEFIND_API_URL".to_string(),
            reason: "must not be empty".to_string(),
        });
    }

    let log_level = or_default("RECYCLEFIND_LOG_LEVEL", "info");
    let request_timeout_secs = parse_u64("RECYCLEFIND_REQUEST_TIMEOUT_SECS", "30")?;
    let connect_timeout_secs = parse_u64("RECYCLEFIND_CONNECT_TIMEOUT_SECS", "10")?;
    let user_agent = or_default("RECYCLEFIND_USER_AGENT", DEFAULT_USER_AGENT);

    Ok(AppConfig {
        api_url,
        log_level,
        request_timeout_secs,
        connect_timeout_secs,
        user_agent,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
