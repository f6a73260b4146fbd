//! Token swap core
//!
//! Price-feed backed currency conversion for a swap form, plus the wallet
//! balance ranking used to display holdings by chain priority.

pub mod constants;
pub mod errors;
pub mod portfolio;
pub mod prices;
pub mod swap;
pub mod utils;

pub use errors::{Result, SwapError};
pub use portfolio::{rank, BalanceRanker, Blockchain, FormattedBalance, WalletBalance};
pub use prices::{HttpPriceFeed, PriceBook, PriceFeed, PriceLoadState, PriceLoader, PriceRecord};
pub use swap::{convert, PriceConverter, SwapForm, SwapReceipt, TokenSelector};
pub use utils::Config;
