use std::collections::HashMap;
use tracing::debug;

use super::types::{chain_priority, FormattedBalance, WalletBalance};
use crate::constants::UNRANKED_PRIORITY;
use crate::utils::format_whole;

/// Filter, value and order balances for display.
///
/// Balances on chains without a priority and non-positive amounts are dropped.
/// Rows are ordered by descending chain priority; equal priorities keep their
/// input order.
pub fn rank(balances: &[WalletBalance], prices: &HashMap<String, f64>) -> Vec<FormattedBalance> {
    let mut rows: Vec<FormattedBalance> = balances
        .iter()
        .filter_map(|balance| {
            let priority = chain_priority(&balance.blockchain);
            // NaN amounts fail the comparison and are dropped too
            if priority <= UNRANKED_PRIORITY || !(balance.amount > 0.0) {
                return None;
            }

            let price = prices.get(&balance.currency).copied().unwrap_or(0.0);
            Some(FormattedBalance {
                currency: balance.currency.clone(),
                blockchain: balance.blockchain.clone(),
                amount: balance.amount,
                formatted_amount: format_whole(balance.amount),
                usd_value: balance.amount * price,
                priority,
            })
        })
        .collect();

    // sort_by is stable
    rows.sort_by(|a, b| b.priority.cmp(&a.priority));

    debug!("Ranked {} of {} balances", rows.len(), balances.len());
    rows
}

/// Holds the current wallet inputs and the rows derived from them
#[derive(Debug, Clone, Default)]
pub struct BalanceRanker {
    balances: Vec<WalletBalance>,
    prices: HashMap<String, f64>,
    rows: Vec<FormattedBalance>,
}

impl BalanceRanker {
    pub fn new(balances: Vec<WalletBalance>, prices: HashMap<String, f64>) -> Self {
        let rows = rank(&balances, &prices);
        Self {
            balances,
            prices,
            rows,
        }
    }

    pub fn set_balances(&mut self, balances: Vec<WalletBalance>) {
        self.balances = balances;
        self.recompute();
    }

    pub fn set_prices(&mut self, prices: HashMap<String, f64>) {
        self.prices = prices;
        self.recompute();
    }

    pub fn rows(&self) -> &[FormattedBalance] {
        &self.rows
    }

    pub fn total_usd_value(&self) -> f64 {
        self.rows.iter().map(|row| row.usd_value).sum()
    }

    fn recompute(&mut self) {
        self.rows = rank(&self.balances, &self.prices);
    }
}
