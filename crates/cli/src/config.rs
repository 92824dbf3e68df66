//! CLI configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `HIK_CAFE_CART_DIR` - Directory holding the persisted cart blob
//!   (default: `.hik-cafe`)

use std::env;
use std::path::PathBuf;

use thiserror::Error;

/// Default cart directory when `HIK_CAFE_CART_DIR` is unset.
const DEFAULT_CART_DIR: &str = ".hik-cafe";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// CLI configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Directory the persisted cart blob lives in.
    pub cart_dir: PathBuf,
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEnvVar`] if `HIK_CAFE_CART_DIR` is set
    /// but empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        let cart_dir = match env::var("HIK_CAFE_CART_DIR") {
            Ok(dir) if dir.trim().is_empty() => {
                return Err(ConfigError::InvalidEnvVar(
                    "HIK_CAFE_CART_DIR".to_owned(),
                    "must not be empty".to_owned(),
                ));
            }
            Ok(dir) => PathBuf::from(dir),
            Err(_) => PathBuf::from(DEFAULT_CART_DIR),
        };

        Ok(Self { cart_dir })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cart_dir() {
        // Runs without the variable set in CI; the default applies
        if env::var("HIK_CAFE_CART_DIR").is_err() {
            let config = CliConfig::from_env().expect("config loads");
            assert_eq!(config.cart_dir, PathBuf::from(DEFAULT_CART_DIR));
        }
    }
}
