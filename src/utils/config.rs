use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

use crate::constants::{
    DEFAULT_FROM_TOKEN, DEFAULT_LOG_LEVEL, DEFAULT_TO_TOKEN, PRICE_FEED_TIMEOUT_SECS,
    PRICE_FEED_URL, SWAP_EXECUTION_DELAY,
};
use crate::errors::{Result, SwapError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    // Price feed
    pub price_feed_url: String,
    pub price_feed_timeout_secs: u64,

    // Swap form
    pub default_from_token: String,
    pub default_to_token: String,
    pub swap_delay_ms: u64,

    // Logging
    pub log_level: String,
    pub log_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            price_feed_url: PRICE_FEED_URL.to_string(),
            price_feed_timeout_secs: PRICE_FEED_TIMEOUT_SECS,
            default_from_token: DEFAULT_FROM_TOKEN.to_string(),
            default_to_token: DEFAULT_TO_TOKEN.to_string(),
            swap_delay_ms: SWAP_EXECUTION_DELAY.as_millis() as u64,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_json: false,
        }
    }
}

impl Config {
    /// Load settings from the environment (and `.env` when present); every key is optional
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();
        let defaults = Self::default();

        let config = Self {
            price_feed_url: env::var("PRICE_FEED_URL").unwrap_or(defaults.price_feed_url),
            price_feed_timeout_secs: env::var("PRICE_FEED_TIMEOUT_SECS")
                .unwrap_or_else(|_| PRICE_FEED_TIMEOUT_SECS.to_string())
                .parse()
                .map_err(|_| SwapError::config("PRICE_FEED_TIMEOUT_SECS must be a whole number of seconds"))?,
            default_from_token: env::var("DEFAULT_FROM_TOKEN")
                .map(|s| s.to_uppercase())
                .unwrap_or(defaults.default_from_token),
            default_to_token: env::var("DEFAULT_TO_TOKEN")
                .map(|s| s.to_uppercase())
                .unwrap_or(defaults.default_to_token),
            swap_delay_ms: env::var("SWAP_DELAY_MS")
                .unwrap_or_else(|_| defaults.swap_delay_ms.to_string())
                .parse()
                .map_err(|_| SwapError::config("SWAP_DELAY_MS must be a whole number of milliseconds"))?,
            log_level: env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
            log_json: env::var("LOG_FORMAT")
                .map(|format| format.eq_ignore_ascii_case("json"))
                .unwrap_or(defaults.log_json),
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.price_feed_url.is_empty() {
            return Err(SwapError::config("Price feed URL is required"));
        }

        if !self.price_feed_url.starts_with("http://") && !self.price_feed_url.starts_with("https://") {
            return Err(SwapError::config(format!(
                "Price feed URL must be http(s): {}",
                self.price_feed_url
            )));
        }

        if self.price_feed_timeout_secs == 0 {
            return Err(SwapError::config("Price feed timeout must be greater than zero"));
        }

        if self.default_from_token == self.default_to_token {
            return Err(SwapError::config("Default swap tokens must differ"));
        }

        Ok(())
    }

    pub fn price_feed_timeout(&self) -> Duration {
        Duration::from_secs(self.price_feed_timeout_secs)
    }

    pub fn swap_delay(&self) -> Duration {
        Duration::from_millis(self.swap_delay_ms)
    }
}
