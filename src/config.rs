//! Configuration management
//!
//! Loads settings from config.toml with environment overrides, following
//! an AUTHGATE_* prefix convention.

use config::{Config, Environment, File};
use serde::Deserialize;
use std::collections::HashMap;

/// Application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Maximum accepted username length
    pub max_username_length: usize,

    /// Username → password records for the in-memory credential store
    #[serde(default)]
    pub users: HashMap<String, String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            max_username_length: 64,
            users: HashMap::new(),
        }
    }
}

impl AppConfig {
    /// Load configuration from config.toml with environment overrides
    pub fn load() -> Result<Self, config::ConfigError> {
        let settings = Config::builder()
            .set_default("max_username_length", 64_i64)?
            .add_source(File::with_name("config").required(false))
            .add_source(Environment::with_prefix("AUTHGATE"))
            .build()?;

        let config: AppConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    fn validate(&self) -> Result<(), config::ConfigError> {
        if self.max_username_length == 0 {
            return Err(config::ConfigError::Message(
                "max_username_length must be greater than 0".into(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_username_length, 64);
        assert!(config.users.is_empty());
    }

    #[test]
    fn test_zero_username_length_rejected() {
        let config = AppConfig {
            max_username_length: 0,
            users: HashMap::new(),
        };
        assert!(config.validate().is_err());
    }
}
