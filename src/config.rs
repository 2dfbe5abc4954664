//! Configuration Module
//!
//! Handles loading server configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::error::ConfigError;

/// Server configuration parameters.
///
/// Everything except the store URI has a default.
#[derive(Debug, Clone)]
pub struct Config {
    /// MongoDB connection string
    pub mongodb_uri: String,
    /// Database holding the quiz collection
    pub database: String,
    /// Collection holding quiz documents
    pub collection: String,
    /// HTTP server port
    pub server_port: u16,
    /// Deadline applied to each store operation, in seconds
    pub store_timeout: u64,
}

impl Config {
    pub const DEFAULT_DATABASE: &'static str = "instant_quizzer";
    pub const DEFAULT_COLLECTION: &'static str = "Quizzes";
    pub const DEFAULT_PORT: u16 = 8000;
    pub const DEFAULT_STORE_TIMEOUT: u64 = 10;

    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `MONGODB_URI` - Store connection URI (required)
    /// - `PORT` - HTTP server port (default: 8000)
    /// - `MONGODB_DATABASE` - Database name (default: instant_quizzer)
    /// - `MONGODB_COLLECTION` - Collection name (default: Quizzes)
    /// - `STORE_TIMEOUT_SECS` - Per-operation store deadline (default: 10)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a Config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mongodb_uri = lookup("MONGODB_URI")
            .filter(|uri| !uri.is_empty())
            .ok_or(ConfigError::MissingVar("MONGODB_URI"))?;

        Ok(Self {
            mongodb_uri,
            database: lookup("MONGODB_DATABASE")
                .unwrap_or_else(|| Self::DEFAULT_DATABASE.to_string()),
            collection: lookup("MONGODB_COLLECTION")
                .unwrap_or_else(|| Self::DEFAULT_COLLECTION.to_string()),
            server_port: parse_or(&lookup, "PORT", Self::DEFAULT_PORT)?,
            store_timeout: parse_or(&lookup, "STORE_TIMEOUT_SECS", Self::DEFAULT_STORE_TIMEOUT)?,
        })
    }

    /// Store deadline as a Duration.
    pub fn store_timeout(&self) -> Duration {
        Duration::from_secs(self.store_timeout)
    }
}

fn parse_or<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidVar { name, value }),
    }
}
