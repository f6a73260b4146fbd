use std::time::Duration;

/// Public price list used for both exchange rates and USD valuation
pub const PRICE_FEED_URL: &str = "https://interview.switcheo.com/prices.json";
pub const PRICE_FEED_TIMEOUT_SECS: u64 = 15;

pub const TOKEN_ICON_BASE: &str = "https://raw.githubusercontent.com/Switcheo/token-icons/main/tokens/";
pub const FALLBACK_ICON_SYMBOL: &str = "SWTH";

pub const DEFAULT_FROM_TOKEN: &str = "ATOM";
pub const DEFAULT_TO_TOKEN: &str = "USDC";

/// Simulated settlement time for a swap
pub const SWAP_EXECUTION_DELAY: Duration = Duration::from_millis(1000);

/// Rank assigned to chains outside the priority table; such balances are never displayed
pub const UNRANKED_PRIORITY: i32 = -99;

pub const DEFAULT_LOG_LEVEL: &str = "info";
