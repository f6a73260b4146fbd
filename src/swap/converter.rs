use tracing::debug;

use crate::prices::PriceBook;
use crate::utils::{format_number, parse_number};

/// Quote `amount` (free text) of `from` in `to`.
///
/// Returns `None` when either price is unknown or zero, or when the amount is
/// empty or does not parse to a positive number.
pub fn convert(amount: &str, from: &str, to: &str, prices: &PriceBook) -> Option<String> {
    if amount.is_empty() {
        return None;
    }
    convert_value(parse_number(amount), from, to, prices)
}

pub fn convert_value(amount: f64, from: &str, to: &str, prices: &PriceBook) -> Option<String> {
    let from_price = prices.price(from);
    let to_price = prices.price(to);

    if from_price == 0.0 || to_price == 0.0 || !amount.is_finite() || amount <= 0.0 {
        debug!("No quote for {} {} -> {}", amount, from, to);
        return None;
    }

    let result = amount * from_price / to_price;
    debug!("Quoted {} {} = {} {}", amount, from, result, to);
    Some(format_number(result))
}

/// Quotes against a fixed price book
#[derive(Debug, Clone, Default)]
pub struct PriceConverter {
    prices: PriceBook,
}

impl PriceConverter {
    pub fn new(prices: PriceBook) -> Self {
        Self { prices }
    }

    pub fn prices(&self) -> &PriceBook {
        &self.prices
    }

    pub fn quote(&self, amount: &str, from: &str, to: &str) -> Option<String> {
        convert(amount, from, to, &self.prices)
    }

    pub fn quote_value(&self, amount: f64, from: &str, to: &str) -> Option<String> {
        convert_value(amount, from, to, &self.prices)
    }

    /// Units of `to` bought by one unit of `from`
    pub fn rate(&self, from: &str, to: &str) -> Option<f64> {
        let from_price = self.prices.price(from);
        let to_price = self.prices.price(to);
        if from_price == 0.0 || to_price == 0.0 {
            None
        } else {
            Some(from_price / to_price)
        }
    }
}
