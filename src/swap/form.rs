use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{info, warn};

use super::converter::convert;
use crate::constants::{DEFAULT_FROM_TOKEN, DEFAULT_TO_TOKEN};
use crate::errors::{Result, SwapError};
use crate::prices::PriceBook;
use crate::utils::{format_number, parse_number, sanitize_amount_input, Config};

/// State behind the currency swap form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapForm {
    pub from_token: String,
    pub to_token: String,
    pub from_amount: String,
    pub to_amount: String,
    pub swapping: bool,
}

/// Amounts captured when a swap starts
#[derive(Debug, Clone, PartialEq)]
pub struct PendingSwap {
    pub from_token: String,
    pub to_token: String,
    pub from_amount: f64,
    pub to_amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SwapReceipt {
    pub from_token: String,
    pub to_token: String,
    pub from_amount: f64,
    pub to_amount: f64,
    pub message: String,
}

impl Default for SwapForm {
    fn default() -> Self {
        Self::new(DEFAULT_FROM_TOKEN, DEFAULT_TO_TOKEN)
    }
}

impl SwapForm {
    pub fn new(from_token: impl Into<String>, to_token: impl Into<String>) -> Self {
        Self {
            from_token: from_token.into(),
            to_token: to_token.into(),
            from_amount: String::new(),
            to_amount: String::new(),
            swapping: false,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.default_from_token.clone(), config.default_to_token.clone())
    }

    /// User typed into the "from" input; the "to" side follows
    pub fn set_from_amount(&mut self, input: &str, prices: &PriceBook) {
        let sanitized = sanitize_amount_input(input);
        self.to_amount = convert(&sanitized, &self.from_token, &self.to_token, prices)
            .unwrap_or_default();
        self.from_amount = sanitized;
    }

    /// User typed into the "to" input; the "from" side follows
    pub fn set_to_amount(&mut self, input: &str, prices: &PriceBook) {
        let sanitized = sanitize_amount_input(input);
        self.from_amount = convert(&sanitized, &self.to_token, &self.from_token, prices)
            .unwrap_or_default();
        self.to_amount = sanitized;
    }

    pub fn set_from_token(&mut self, token: impl Into<String>) {
        self.from_token = token.into();
    }

    pub fn set_to_token(&mut self, token: impl Into<String>) {
        self.to_token = token.into();
    }

    /// Exchange both sides. Amounts were already consistent, so nothing is recomputed.
    pub fn swap_tokens(&mut self) {
        std::mem::swap(&mut self.from_token, &mut self.to_token);
        std::mem::swap(&mut self.from_amount, &mut self.to_amount);
    }

    pub fn can_execute(&self) -> bool {
        !self.swapping && parse_number(&self.from_amount) > 0.0 && parse_number(&self.to_amount) > 0.0
    }

    pub fn begin_swap(&mut self) -> Result<PendingSwap> {
        if self.swapping {
            return Err(SwapError::SwapInFlight);
        }

        let from_amount = parse_number(&self.from_amount);
        let to_amount = parse_number(&self.to_amount);
        if from_amount <= 0.0 || to_amount <= 0.0 {
            return Err(SwapError::validation("Both swap amounts must be positive"));
        }

        self.swapping = true;
        Ok(PendingSwap {
            from_token: self.from_token.clone(),
            to_token: self.to_token.clone(),
            from_amount,
            to_amount,
        })
    }

    pub fn complete_swap(&mut self, pending: PendingSwap) -> SwapReceipt {
        self.swapping = false;
        self.from_amount.clear();
        self.to_amount.clear();

        let message = format!(
            "Swap successful: {} {} → {} {}",
            format_number(pending.from_amount),
            pending.from_token,
            format_number(pending.to_amount),
            pending.to_token
        );
        info!("{}", message);

        SwapReceipt {
            from_token: pending.from_token,
            to_token: pending.to_token,
            from_amount: pending.from_amount,
            to_amount: pending.to_amount,
            message,
        }
    }

    /// Simulated execution: hold the form in the swapping state for `delay`, then reset it
    pub async fn execute_swap(&mut self, delay: Duration) -> Result<SwapReceipt> {
        let pending = self.begin_swap().map_err(|e| {
            warn!("Swap rejected: {}", e);
            e
        })?;

        tokio::time::sleep(delay).await;
        Ok(self.complete_swap(pending))
    }
}
