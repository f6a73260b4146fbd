use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// One entry of the public price list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    pub currency: String,
    /// Quote time; a missing or unreadable value does not reject the row
    #[serde(default, deserialize_with = "lenient_date")]
    pub date: Option<DateTime<Utc>>,
    pub price: f64,
}

fn lenient_date<'de, D>(deserializer: D) -> std::result::Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw
        .as_ref()
        .and_then(serde_json::Value::as_str)
        .and_then(|s| s.parse().ok()))
}

/// Currency -> unit price lookup built from the feed.
///
/// Duplicate currencies resolve to the last record seen while keeping the
/// position where the currency first appeared.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceBook {
    prices: IndexMap<String, f64>,
}

impl PriceBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = PriceRecord>,
    {
        records
            .into_iter()
            .map(|record| (record.currency, record.price))
            .collect()
    }

    pub fn insert(&mut self, currency: impl Into<String>, price: f64) {
        self.prices.insert(currency.into(), price);
    }

    /// Unit price, zero when the currency is unknown
    pub fn price(&self, currency: &str) -> f64 {
        self.prices.get(currency).copied().unwrap_or(0.0)
    }

    /// Unique currencies in first-seen order
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.prices.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Plain map view, the shape the balance ranker consumes
    pub fn to_usd_map(&self) -> HashMap<String, f64> {
        self.prices.iter().map(|(k, v)| (k.clone(), *v)).collect()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for PriceBook {
    fn from_iter<T: IntoIterator<Item = (S, f64)>>(iter: T) -> Self {
        let mut book = PriceBook::new();
        for (currency, price) in iter {
            book.insert(currency, price);
        }
        book
    }
}
