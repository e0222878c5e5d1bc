//! # Configuration
//!
//! Runtime settings for the storefront: mailbox capacities for the two actors and the
//! logging setup. Every setting has a default; environment variables override them.
//!
//! | Variable | Setting | Default |
//! |----------|---------|---------|
//! | `STOREFRONT_CATALOG_MAILBOX` | catalog mailbox capacity | `32` |
//! | `STOREFRONT_CART_MAILBOX` | cart mailbox capacity | `32` |
//! | `STOREFRONT_LOG_LEVEL` | default log filter when `RUST_LOG` is unset | `info` |
//! | `STOREFRONT_LOG_FORMAT` | `compact` or `json` | `compact` |
//!
//! Blank values are ignored.

use std::env;

use thiserror::Error;

pub const CATALOG_MAILBOX_ENV: &str = "STOREFRONT_CATALOG_MAILBOX";
pub const CART_MAILBOX_ENV: &str = "STOREFRONT_CART_MAILBOX";
pub const LOG_LEVEL_ENV: &str = "STOREFRONT_LOG_LEVEL";
pub const LOG_FORMAT_ENV: &str = "STOREFRONT_LOG_FORMAT";

const DEFAULT_MAILBOX_CAPACITY: usize = 32;

#[derive(Clone, Debug, PartialEq)]
pub struct StorefrontConfig {
    pub catalog: MailboxConfig,
    pub cart: MailboxConfig,
    pub logging: LoggingConfig,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MailboxConfig {
    pub capacity: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid environment override for `{key}`: `{value}`")]
    InvalidEnvOverride { key: String, value: String },
    #[error("configuration validation failed: {0}")]
    Validation(String),
}

impl Default for MailboxConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_MAILBOX_CAPACITY,
        }
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            catalog: MailboxConfig::default(),
            cart: MailboxConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
                format: LogFormat::Compact,
            },
        }
    }
}

impl std::str::FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(Self::Compact),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::Validation(format!(
                "unsupported log format `{other}` (expected compact|json)"
            ))),
        }
    }
}

impl StorefrontConfig {
    /// Defaults overridden by the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable name.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut config = Self::default();

        if let Some(value) = read(CATALOG_MAILBOX_ENV) {
            config.catalog.capacity = parse_usize(CATALOG_MAILBOX_ENV, &value)?;
        }
        if let Some(value) = read(CART_MAILBOX_ENV) {
            config.cart.capacity = parse_usize(CART_MAILBOX_ENV, &value)?;
        }
        if let Some(value) = read(LOG_LEVEL_ENV) {
            config.logging.level = value.trim().to_string();
        }
        if let Some(value) = read(LOG_FORMAT_ENV) {
            config.logging.format = value.parse()?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        // tokio rejects zero-capacity channels
        if self.catalog.capacity == 0 {
            return Err(ConfigError::Validation(
                "catalog mailbox capacity must be at least 1".to_string(),
            ));
        }
        if self.cart.capacity == 0 {
            return Err(ConfigError::Validation(
                "cart mailbox capacity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

fn parse_usize(key: &str, value: &str) -> Result<usize, ConfigError> {
    value
        .trim()
        .parse::<usize>()
        .map_err(|_| ConfigError::InvalidEnvOverride {
            key: key.to_string(),
            value: value.to_string(),
        })
}
