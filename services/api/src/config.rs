//! Service configuration loaded from environment variables

use anyhow::Result;
use ::config::{Config, Environment};
use serde::Deserialize;
use tracing::warn;

/// Signing secret used when `JWT_SECRET` is not set. Development only.
pub const DEV_JWT_SECRET: &str = "store-ratings-dev-secret";

/// API service configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Interface to bind
    pub api_host: String,
    /// Port to listen on
    pub api_port: u16,
    /// Load the demo users, stores and ratings at startup
    pub seed_demo_data: bool,
    /// HMAC secret for access tokens
    pub jwt_secret: String,
    /// Access token lifetime in seconds
    pub jwt_access_token_expiry: u64,
}

impl ApiConfig {
    /// Create a new ApiConfig from environment variables
    ///
    /// # Environment Variables
    /// - `API_HOST`: Interface to bind (default: "0.0.0.0")
    /// - `API_PORT`: Port to listen on (default: 3001)
    /// - `SEED_DEMO_DATA`: Load demo data at startup (default: true)
    /// - `JWT_SECRET`: Secret for signing access tokens (default: development secret)
    /// - `JWT_ACCESS_TOKEN_EXPIRY`: Access token expiry in seconds (default: 3600)
    pub fn from_env() -> Result<Self> {
        let config: ApiConfig = Config::builder()
            .set_default("api_host", "0.0.0.0")?
            .set_default("api_port", 3001_i64)?
            .set_default("seed_demo_data", true)?
            .set_default("jwt_secret", DEV_JWT_SECRET)?
            .set_default("jwt_access_token_expiry", 3600_i64)?
            .add_source(Environment::default().try_parsing(true))
            .build()?
            .try_deserialize()?;

        if config.jwt_secret == DEV_JWT_SECRET {
            warn!("JWT_SECRET not set, using the development secret");
        }

        Ok(config)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.api_host, self.api_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const KEYS: [&str; 5] = [
        "API_HOST",
        "API_PORT",
        "SEED_DEMO_DATA",
        "JWT_SECRET",
        "JWT_ACCESS_TOKEN_EXPIRY",
    ];

    fn clear_env() {
        for key in KEYS {
            // SAFETY: tests touching the environment run serially
            unsafe { std::env::remove_var(key) };
        }
    }

    #[test]
    #[serial]
    fn defaults_apply_without_env() {
        clear_env();

        let config = ApiConfig::from_env().expect("Failed to load config");
        assert_eq!(config.bind_address(), "0.0.0.0:3001");
        assert!(config.seed_demo_data);
        assert_eq!(config.jwt_secret, DEV_JWT_SECRET);
        assert_eq!(config.jwt_access_token_expiry, 3600);
    }

    #[test]
    #[serial]
    fn env_overrides_defaults() {
        clear_env();
        // SAFETY: tests touching the environment run serially
        unsafe {
            std::env::set_var("API_PORT", "8080");
            std::env::set_var("SEED_DEMO_DATA", "false");
            std::env::set_var("JWT_SECRET", "s3cret-value");
        }

        let config = ApiConfig::from_env().expect("Failed to load config");
        clear_env();

        assert_eq!(config.api_port, 8080);
        assert!(!config.seed_demo_data);
        assert_eq!(config.jwt_secret, "s3cret-value");
    }
}
