use serde::Serialize;

use crate::constants::{FALLBACK_ICON_SYMBOL, TOKEN_ICON_BASE};
use crate::prices::PriceBook;
use crate::utils::format_price_label;

/// One row of the token dropdown
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenOption {
    pub symbol: String,
    pub price_label: String,
    pub icon_url: String,
    pub disabled: bool,
}

pub fn icon_url(symbol: &str) -> String {
    format!("{}{}.svg", TOKEN_ICON_BASE, symbol)
}

/// Icon to show when a token's own icon fails to load
pub fn fallback_icon_url() -> String {
    icon_url(FALLBACK_ICON_SYMBOL)
}

/// Dropdown state for picking one token
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSelector {
    pub selected: String,
    pub open: bool,
    disabled: Vec<String>,
}

impl TokenSelector {
    pub fn new(selected: impl Into<String>) -> Self {
        Self {
            selected: selected.into(),
            open: false,
            disabled: Vec::new(),
        }
    }

    /// Tokens that cannot be picked, typically the other side of the swap
    pub fn set_disabled<I, S>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.disabled = tokens.into_iter().map(Into::into).collect();
    }

    pub fn is_disabled(&self, token: &str) -> bool {
        self.disabled.iter().any(|t| t == token)
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Pick `token` and close the list. Disabled tokens are ignored.
    pub fn select(&mut self, token: &str) -> bool {
        if self.is_disabled(token) {
            return false;
        }
        self.selected = token.to_string();
        self.open = false;
        true
    }

    pub fn selected_price_label(&self, prices: &PriceBook) -> String {
        format_price_label(prices.price(&self.selected))
    }

    pub fn options(&self, prices: &PriceBook) -> Vec<TokenOption> {
        prices
            .tokens()
            .map(|symbol| TokenOption {
                symbol: symbol.to_string(),
                price_label: format_price_label(prices.price(symbol)),
                icon_url: icon_url(symbol),
                disabled: self.is_disabled(symbol),
            })
            .collect()
    }
}
