//! Application configuration loaded from environment variables.

use std::env;

use blog_infra::DatabaseConfig;
use thiserror::Error;

/// Configuration errors - abort startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {name}: {value:?} is not a port number")]
    InvalidPort { name: &'static str, value: String },
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: DatabaseConfig,
    /// Apply pending migrations before serving.
    pub auto_migrate: bool,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());
        let get_or = |key: &str, default: &str| get(key).unwrap_or_else(|| default.to_string());

        let database = DatabaseConfig {
            host: get_or("DB_HOST", "localhost"),
            port: parse_port("DB_PORT", get("DB_PORT"), 5432)?,
            user: get_or("DB_USER", "postgres"),
            password: get_or("DB_PASSWORD", ""),
            name: get_or("DB_NAME", "postgres"),
            ssl_mode: get_or("DB_SSLMODE", "disable"),
            max_connections: get("DB_MAX_CONNECTIONS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(100),
            min_connections: get("DB_MIN_CONNECTIONS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
        };

        Ok(Self {
            host: get_or("SERVER_HOST", "0.0.0.0"),
            port: parse_port("SERVER_PORT", get("SERVER_PORT"), 8080)?,
            database,
            auto_migrate: get("DB_AUTO_MIGRATE")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(true),
        })
    }
}

fn parse_port(
    name: &'static str,
    value: Option<String>,
    default: u16,
) -> Result<u16, ConfigError> {
    match value {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidPort { name, value }),
    }
}
