//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `OPPORTUNITY_COST` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use opportunity_cost::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {:?}", config.server.socket_addr());
//! ```

mod cache;
mod error;
mod server;

pub use cache::{CacheConfig, MAX_CACHE_ENTRIES};
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so the service starts without any
/// environment variables set. Load using [`AppConfig::load()`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, logging)
    #[serde(default)]
    pub server: ServerConfig,

    /// Pairwise result cache
    #[serde(default)]
    pub cache: CacheConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `OPPORTUNITY_COST` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `OPPORTUNITY_COST__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `OPPORTUNITY_COST__CACHE__MAX_ENTRIES=500` -> `cache.max_entries = 500`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("OPPORTUNITY_COST")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.cache.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    /// Helper to clear environment variables after testing
    fn clear_env() {
        env::remove_var("OPPORTUNITY_COST__SERVER__PORT");
        env::remove_var("OPPORTUNITY_COST__SERVER__ENVIRONMENT");
        env::remove_var("OPPORTUNITY_COST__CACHE__ENABLED");
        env::remove_var("OPPORTUNITY_COST__CACHE__MAX_ENTRIES");
    }

    #[test]
    fn test_load_without_environment_uses_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.environment, Environment::Development);
        assert!(config.cache.enabled);
        assert_eq!(config.cache.max_entries, 100);
    }

    #[test]
    fn test_validate_default_config() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("OPPORTUNITY_COST__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.is_production());
    }

    #[test]
    fn test_custom_server_port() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("OPPORTUNITY_COST__SERVER__PORT", "3000");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_cache_settings_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("OPPORTUNITY_COST__CACHE__ENABLED", "false");
        env::set_var("OPPORTUNITY_COST__CACHE__MAX_ENTRIES", "250");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(!config.cache.enabled);
        assert_eq!(config.cache.max_entries, 250);
    }

    #[test]
    fn test_validate_rejects_bad_cache_size() {
        let config = AppConfig {
            cache: CacheConfig {
                enabled: true,
                max_entries: 0,
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
