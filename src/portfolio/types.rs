use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::UNRANKED_PRIORITY;

/// Raw balance as supplied by the wallet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletBalance {
    pub currency: String,
    pub blockchain: String,
    pub amount: f64,
}

impl WalletBalance {
    pub fn new(currency: impl Into<String>, blockchain: impl Into<String>, amount: f64) -> Self {
        Self {
            currency: currency.into(),
            blockchain: blockchain.into(),
            amount,
        }
    }
}

/// Display-ready projection of a balance, rebuilt on every ranking
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedBalance {
    pub currency: String,
    pub blockchain: String,
    pub amount: f64,
    pub formatted_amount: String,
    pub usd_value: f64,
    pub priority: i32,
}

impl FormattedBalance {
    /// Row key for list rendering
    pub fn key(&self) -> &str {
        &self.currency
    }
}

/// Chains with a display priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Blockchain {
    Osmosis,
    Ethereum,
    Arbitrum,
    Zilliqa,
    Neo,
}

impl Blockchain {
    pub const ALL: [Blockchain; 5] = [
        Blockchain::Osmosis,
        Blockchain::Ethereum,
        Blockchain::Arbitrum,
        Blockchain::Zilliqa,
        Blockchain::Neo,
    ];

    pub fn priority(self) -> i32 {
        match self {
            Blockchain::Osmosis => 100,
            Blockchain::Ethereum => 50,
            Blockchain::Arbitrum => 30,
            Blockchain::Zilliqa | Blockchain::Neo => 20,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Blockchain::Osmosis => "Osmosis",
            Blockchain::Ethereum => "Ethereum",
            Blockchain::Arbitrum => "Arbitrum",
            Blockchain::Zilliqa => "Zilliqa",
            Blockchain::Neo => "Neo",
        }
    }
}

impl fmt::Display for Blockchain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Blockchain {
    type Err = String;

    // Chain names are matched exactly, as the wallet reports them
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Blockchain::ALL
            .into_iter()
            .find(|chain| chain.name() == s)
            .ok_or_else(|| format!("Unknown blockchain: {}", s))
    }
}

/// Priority of a chain by name; chains outside the table get `UNRANKED_PRIORITY`
pub fn chain_priority(blockchain: &str) -> i32 {
    blockchain
        .parse::<Blockchain>()
        .map(Blockchain::priority)
        .unwrap_or(UNRANKED_PRIORITY)
}
