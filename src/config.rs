//! Environment-driven configuration, loaded once at startup.

use std::env;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),
    #[error("invalid value for {0}: {1}")]
    InvalidVar(&'static str, String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub discord_token: String,
    pub listings_api_url: String,
    pub database_url: String,
    pub command_prefix: String,
    pub health_check_enabled: bool,
    pub health_check_port: u16,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let discord_token =
            env::var("DISCORD_TOKEN").map_err(|_| ConfigError::MissingVar("DISCORD_TOKEN"))?;
        let database_url =
            env::var("DATABASE_URL").map_err(|_| ConfigError::MissingVar("DATABASE_URL"))?;

        let health_check_port = match env::var("HEALTH_CHECK_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidVar("HEALTH_CHECK_PORT", raw))?,
            Err(_) => 8080,
        };

        Ok(Self {
            discord_token,
            database_url,
            listings_api_url: get_env("LISTINGS_API_URL", "http://localhost:5000"),
            command_prefix: get_env("COMMAND_PREFIX", "!"),
            health_check_enabled: get_bool_env("HEALTH_CHECK_ENABLED", true),
            health_check_port,
            log_level: get_env("LOG_LEVEL", "info"),
        })
    }
}

fn get_env(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn get_bool_env(key: &str, default: bool) -> bool {
    env::var(key)
        .ok()
        .and_then(|v| v.parse::<bool>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_env_falls_back_on_garbage() {
        std::env::set_var("HOMESCOUT_TEST_FLAG", "not-a-bool");
        assert!(get_bool_env("HOMESCOUT_TEST_FLAG", true));
        assert!(!get_bool_env("HOMESCOUT_TEST_FLAG", false));
        std::env::remove_var("HOMESCOUT_TEST_FLAG");
    }
}
