//! Configuration management for the record manager
//!
//! Layers built-in defaults, an optional `config.toml` in the working
//! directory and `SRMS_` prefixed environment variables, in that order.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

use crate::auth::credentials::{MAX_COST, MIN_COST};

/// Default config file name, without extension.
pub const CONFIG_FILE: &str = "config";
/// Prefix for environment overrides (`SRMS_RECORDS_FILE`, ...).
pub const ENV_PREFIX: &str = "SRMS";

/// Complete application configuration
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// File backing the `users` collection
    /// Environment: SRMS_USERS_FILE
    pub users_file: String,

    /// File backing the `records` collection
    /// Environment: SRMS_RECORDS_FILE
    pub records_file: String,

    /// bcrypt work factor for new password hashes
    /// Environment: SRMS_BCRYPT_COST
    pub bcrypt_cost: u32,
}

impl AppConfig {
    /// Load configuration from config.toml with environment overrides
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(CONFIG_FILE)
    }

    /// Load configuration from the given file (optional) with environment overrides
    pub fn load_from(config_path: &str) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .set_default("users_file", "users.json")?
            .set_default("records_file", "records.json")?
            .set_default("bcrypt_cost", i64::from(bcrypt::DEFAULT_COST))?
            .add_source(File::with_name(config_path).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?;

        let config: AppConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    fn validate(&self) -> Result<(), ConfigError> {
        if self.users_file.trim().is_empty() {
            return Err(ConfigError::Message("users_file cannot be empty".into()));
        }

        if self.records_file.trim().is_empty() {
            return Err(ConfigError::Message("records_file cannot be empty".into()));
        }

        if self.users_file == self.records_file {
            return Err(ConfigError::Message(
                "users_file and records_file must be different files".into(),
            ));
        }

        if !(MIN_COST..=MAX_COST).contains(&self.bcrypt_cost) {
            return Err(ConfigError::Message(format!(
                "bcrypt_cost must be between {} and {}",
                MIN_COST, MAX_COST
            )));
        }

        Ok(())
    }

    /// Get the users file as PathBuf
    pub fn users_path(&self) -> PathBuf {
        PathBuf::from(&self.users_file)
    }

    /// Get the records file as PathBuf
    pub fn records_path(&self) -> PathBuf {
        PathBuf::from(&self.records_file)
    }
}
