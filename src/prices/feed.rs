use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};

use super::types::PriceRecord;
use crate::errors::{Result, SwapError};
use crate::utils::{with_timeout, Config};

/// Source of the price list
#[async_trait]
pub trait PriceFeed: Send + Sync {
    async fn fetch_prices(&self) -> Result<Vec<PriceRecord>>;
}

/// Reads the price list with a single GET
#[derive(Clone)]
pub struct HttpPriceFeed {
    client: Client,
    url: String,
    timeout: Duration,
}

impl HttpPriceFeed {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
            timeout,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.price_feed_url.clone(), config.price_feed_timeout())
    }

    async fn request(&self) -> Result<Vec<PriceRecord>> {
        debug!("📈 Requesting price list from {}", self.url);

        let response = self.client.get(&self.url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(SwapError::api(status.as_u16(), error_text));
        }

        let body = response.text().await?;
        let records: Vec<PriceRecord> = serde_json::from_str(&body)?;

        info!("📈 Retrieved {} price records", records.len());
        Ok(records)
    }
}

#[async_trait]
impl PriceFeed for HttpPriceFeed {
    async fn fetch_prices(&self) -> Result<Vec<PriceRecord>> {
        with_timeout(self.request(), self.timeout, "price feed request").await
    }
}

/// Fixed in-memory price list
#[derive(Debug, Clone, Default)]
pub struct StaticPriceFeed {
    records: Vec<PriceRecord>,
}

impl StaticPriceFeed {
    pub fn new(records: Vec<PriceRecord>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl PriceFeed for StaticPriceFeed {
    async fn fetch_prices(&self) -> Result<Vec<PriceRecord>> {
        Ok(self.records.clone())
    }
}
