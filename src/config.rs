//! Configuration module for forex-calendar
//!
//! Settings come from environment variables (optionally via a `.env` file)
//! and are grouped per concern.

use envconfig::Envconfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{Error, Result};

/// Main configuration structure
#[derive(Debug, Clone, Deserialize, Serialize, Envconfig)]
pub struct Config {
    /// Process-level settings
    #[serde(flatten)]
    #[envconfig(nested = true)]
    pub app: AppConfig,

    /// Feed source settings
    #[serde(flatten)]
    #[envconfig(nested = true)]
    pub feed: FeedConfig,
}

/// Process-level settings
#[derive(Debug, Clone, Deserialize, Serialize, Envconfig)]
pub struct AppConfig {
    /// Log level
    #[envconfig(from = "LOG_LEVEL", default = "info")]
    pub log_level: String,

    /// Environment (development, staging, production)
    #[envconfig(from = "ENVIRONMENT", default = "development")]
    pub environment: String,

    /// Country code shown when none is requested
    #[envconfig(from = "DEFAULT_COUNTRY", default = "USD")]
    pub default_country: String,
}

impl AppConfig {
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

/// Feed source settings
#[derive(Debug, Clone, Deserialize, Serialize, Envconfig)]
pub struct FeedConfig {
    /// URL of the weekly calendar document
    #[envconfig(
        from = "FEED_URL",
        default = "https://nfs.faireconomy.media/ff_calendar_thisweek.json"
    )]
    pub url: String,

    /// Whole-request timeout in seconds
    #[envconfig(from = "FEED_TIMEOUT_SECS", default = "30")]
    pub timeout_secs: u64,

    /// User-Agent header sent with the request
    #[envconfig(from = "FEED_USER_AGENT", default = "forex-calendar")]
    pub user_agent: String,
}

impl FeedConfig {
    /// Get request timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists (for local development)
        dotenv::dotenv().ok();

        Config::init_from_env().map_err(Error::from)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let url = self.feed.url.trim();
        if url.is_empty() {
            return Err(Error::config("Feed URL cannot be empty"));
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(Error::config(format!(
                "Feed URL must be http(s), got: {}",
                url
            )));
        }

        if self.feed.timeout_secs == 0 {
            return Err(Error::config("Feed timeout must be at least 1 second"));
        }

        if self.app.default_country.trim().is_empty() {
            return Err(Error::config("Default country cannot be empty"));
        }

        Ok(())
    }

    /// Log the effective configuration
    pub fn log_config(&self) {
        tracing::info!(
            environment = %self.app.environment,
            log_level = %self.app.log_level,
            default_country = %self.app.default_country,
            "Application configuration"
        );

        tracing::info!(
            url = %self.feed.url,
            timeout_secs = %self.feed.timeout_secs,
            user_agent = %self.feed.user_agent,
            "Feed configuration"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            app: AppConfig {
                log_level: "debug".to_string(),
                environment: "test".to_string(),
                default_country: "USD".to_string(),
            },
            feed: FeedConfig {
                url: "https://example.com/calendar.json".to_string(),
                timeout_secs: 10,
                user_agent: "forex-calendar-test".to_string(),
            },
        }
    }

    #[test]
    fn test_valid_config() {
        let config = test_config();
        assert!(config.validate().is_ok());
        assert_eq!(config.feed.timeout(), Duration::from_secs(10));
        assert!(!config.app.is_production());
    }

    #[test]
    fn test_rejects_bad_url() {
        for url in ["", "   ", "ftp://example.com/feed.json", "example.com/feed.json"] {
            let mut config = test_config();
            config.feed.url = url.to_string();
            assert!(config.validate().is_err(), "url {:?} should be rejected", url);
        }
    }

    #[test]
    fn test_from_env_fills_nested_sections() {
        std::env::set_var("FEED_TIMEOUT_SECS", "45");
        let config = Config::from_env().unwrap();
        std::env::remove_var("FEED_TIMEOUT_SECS");

        assert_eq!(config.feed.timeout_secs, 45);
        assert_eq!(config.feed.timeout(), Duration::from_secs(45));
        assert!(config.feed.url.starts_with("https://"));
        assert!(!config.app.log_level.is_empty());
        assert!(!config.app.default_country.is_empty());
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let mut config = test_config();
        config.feed.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_blank_country() {
        let mut config = test_config();
        config.app.default_country = " ".to_string();
        assert!(config.validate().is_err());
    }
}
