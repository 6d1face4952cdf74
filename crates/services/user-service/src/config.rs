//! User service configuration.

use common::{DatabaseConfig, LogConfig};

/// Prefix for service-specific environment variables.
pub const ENV_PREFIX: &str = "USER_SERVICE";

/// User service configuration.
#[derive(Debug, Clone, Default)]
pub struct UserServiceConfig {
    /// Relational store settings
    pub database: DatabaseConfig,
    /// Log filter settings
    pub log: LogConfig,
}

impl UserServiceConfig {
    /// Load configuration from environment variables (and `.env`).
    pub fn from_env() -> Self {
        common::load_dotenv();
        Self {
            database: DatabaseConfig::from_env(ENV_PREFIX),
            log: LogConfig::from_env(ENV_PREFIX),
        }
    }
}
