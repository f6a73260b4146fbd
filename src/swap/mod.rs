pub mod converter;
pub mod form;
pub mod selector;

pub use converter::{convert, convert_value, PriceConverter};
pub use form::{PendingSwap, SwapForm, SwapReceipt};
pub use selector::{fallback_icon_url, icon_url, TokenOption, TokenSelector};
