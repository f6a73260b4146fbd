mod config;
pub mod formatting;
pub mod timeout;

pub use config::Config;
pub use formatting::{
    format_number, format_price_label, format_whole, parse_number, sanitize_amount_input,
};
pub use timeout::with_timeout;
