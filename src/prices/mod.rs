pub mod types;
pub mod feed;
pub mod loader;

pub use types::*;
pub use feed::{HttpPriceFeed, PriceFeed, StaticPriceFeed};
pub use loader::{PriceLoadState, PriceLoader};
