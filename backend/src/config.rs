//! Configuration management for the IrriSmart API
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (config/development.toml, config/production.toml)
//! 3. Environment variable overrides with IRRISMART_ prefix

use config::{Environment, File};
use serde::Deserialize;
use validator::Validate;

use crate::error::AppError;

/// Main application configuration
#[derive(Debug, Deserialize, Clone, Validate)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    #[validate]
    pub server: ServerConfig,

    /// Analytics pipeline configuration
    #[validate]
    pub analytics: AnalyticsConfig,
}

#[derive(Debug, Deserialize, Clone, Validate)]
pub struct ServerConfig {
    /// Server port
    #[validate(range(min = 1))]
    pub port: u16,

    /// Server host
    #[validate(length(min = 1))]
    pub host: String,
}

#[derive(Debug, Deserialize, Clone, Validate)]
pub struct AnalyticsConfig {
    /// Days of sensor history synthesized per plot
    #[validate(range(min = 14, max = 60))]
    pub history_window_days: u32,

    /// Days projected by the forecast
    #[validate(range(min = 1, max = 10))]
    pub forecast_days: u32,
}

impl Config {
    /// Load configuration from files and environment variables, then
    /// validate it
    pub fn load() -> Result<Self, AppError> {
        let environment =
            std::env::var("IRRISMART_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config: Config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 4000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("analytics.history_window_days", 21)?
            .set_default("analytics.forecast_days", 5)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (IRRISMART_ prefix)
            .add_source(
                Environment::with_prefix("IRRISMART")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Socket address string the server binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 4000,
            host: "0.0.0.0".to_string(),
        }
    }
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            history_window_days: 21,
            forecast_days: 5,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            server: ServerConfig::default(),
            analytics: AnalyticsConfig::default(),
        }
    }
}
