use std::sync::Arc;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{error, info};

use super::feed::PriceFeed;
use super::types::PriceBook;

/// Outcome of the price list load
#[derive(Debug, Clone, PartialEq)]
pub enum PriceLoadState {
    Pending,
    Loaded(PriceBook),
    Failed(String),
}

/// Loads the price list once per `load` call and exposes the result.
///
/// Until a load succeeds, consumers see an empty book, so no quote or
/// valuation can be produced. Failures are logged and not retried.
#[derive(Clone)]
pub struct PriceLoader {
    feed: Arc<dyn PriceFeed>,
    state: Arc<RwLock<PriceLoadState>>,
}

impl PriceLoader {
    pub fn new(feed: Arc<dyn PriceFeed>) -> Self {
        Self {
            feed,
            state: Arc::new(RwLock::new(PriceLoadState::Pending)),
        }
    }

    pub async fn load(&self) {
        *self.state.write().await = PriceLoadState::Pending;

        let next = match self.feed.fetch_prices().await {
            Ok(records) => {
                let book = PriceBook::from_records(records);
                info!("Loaded prices for {} tokens", book.len());
                PriceLoadState::Loaded(book)
            }
            Err(e) => {
                error!("Error fetching prices: {}", e);
                PriceLoadState::Failed(e.to_string())
            }
        };

        *self.state.write().await = next;
    }

    /// Run `load` on a background task
    pub fn spawn(&self) -> JoinHandle<()> {
        let loader = self.clone();
        tokio::spawn(async move { loader.load().await })
    }

    pub async fn state(&self) -> PriceLoadState {
        self.state.read().await.clone()
    }

    pub async fn is_loading(&self) -> bool {
        matches!(*self.state.read().await, PriceLoadState::Pending)
    }

    /// Loaded prices, or an empty book while pending or after a failure
    pub async fn book(&self) -> PriceBook {
        match &*self.state.read().await {
            PriceLoadState::Loaded(book) => book.clone(),
            _ => PriceBook::new(),
        }
    }
}
