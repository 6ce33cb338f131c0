//! # Application Configuration
//!
//! Configuration is read from environment variables once at startup and passed
//! explicitly to the composition root; it is never mutated afterwards.

use std::env;

use crate::error::{AppError, Result};

/// Port the HTTP listener binds when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 5000;

/// Application configuration loaded from environment variables.
#[derive(Clone, Debug)]
pub struct Config {
    /// MongoDB connection string.
    ///
    /// Not validated here: an absent value is handed to the driver as-is,
    /// which reports its own connection error.
    pub mongo_uri: Option<String>,

    /// TCP port for the HTTP listener.
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let mongo_uri = env::var("MONGO_URI").ok();

        let port = env::var("PORT")
            .unwrap_or_else(|_| DEFAULT_PORT.to_string())
            .parse()
            .map_err(|e| AppError::Config(format!("PORT must be a valid port number: {e}")))?;

        Ok(Self { mongo_uri, port })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, MutexGuard};

    // Environment variables are process-global; serialize the tests that touch them.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn env_guard() -> MutexGuard<'static, ()> {
        ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    #[test]
    fn port_defaults_to_5000_when_unset() {
        let _guard = env_guard();
        env::remove_var("PORT");
        env::remove_var("MONGO_URI");

        let config = Config::from_env().unwrap();

        assert_eq!(config.port, 5000);
        assert_eq!(config.mongo_uri, None);
    }

    #[test]
    fn port_is_overridden_from_environment() {
        let _guard = env_guard();
        env::set_var("PORT", "8080");

        let config = Config::from_env().unwrap();
        env::remove_var("PORT");

        assert_eq!(config.port, 8080);
    }

    #[test]
    fn mongo_uri_is_passed_through_unvalidated() {
        let _guard = env_guard();
        env::set_var("MONGO_URI", "not even close to a uri");

        let config = Config::from_env().unwrap();
        env::remove_var("MONGO_URI");

        assert_eq!(config.mongo_uri.as_deref(), Some("not even close to a uri"));
    }

    #[test]
    fn non_numeric_port_is_a_config_error() {
        let _guard = env_guard();
        env::set_var("PORT", "eighty-eighty");

        let result = Config::from_env();
        env::remove_var("PORT");

        assert!(matches!(result, Err(AppError::Config(_))));
    }
}
