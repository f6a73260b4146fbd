use std::collections::HashMap;
use token_swap::portfolio::{chain_priority, rank, BalanceRanker, Blockchain, WalletBalance};

fn prices(entries: &[(&str, f64)]) -> HashMap<String, f64> {
    entries.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

fn sample_wallet() -> Vec<WalletBalance> {
    vec![
        WalletBalance::new("X", "Osmosis", 5.0),
        WalletBalance::new("Y", "Ethereum", 3.0),
        WalletBalance::new("Z", "Unknown", 10.0),
    ]
}

#[test]
fn test_rank_sample_wallet() {
    let rows = rank(&sample_wallet(), &prices(&[("X", 2.0), ("Y", 1.0)]));

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].currency, "X");
    assert_eq!(rows[0].priority, 100);
    assert_eq!(rows[0].usd_value, 10.0);
    assert_eq!(rows[0].formatted_amount, "5");
    assert_eq!(rows[1].currency, "Y");
    assert_eq!(rows[1].priority, 50);
    assert_eq!(rows[1].usd_value, 3.0);
}

#[test]
fn test_rank_drops_non_positive_amounts() {
    let balances = vec![
        WalletBalance::new("A", "Osmosis", 0.0),
        WalletBalance::new("B", "Ethereum", -4.0),
        WalletBalance::new("C", "Neo", f64::NAN),
        WalletBalance::new("D", "Arbitrum", 0.5),
    ];
    let rows = rank(&balances, &HashMap::new());

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].currency, "D");
    assert_eq!(rows[0].usd_value, 0.0);
    assert_eq!(rows[0].formatted_amount, "1");
}

#[test]
fn test_rank_ties_keep_input_order() {
    let balances = vec![
        WalletBalance::new("NEO", "Neo", 1.0),
        WalletBalance::new("ETH", "Ethereum", 1.0),
        WalletBalance::new("ZIL", "Zilliqa", 1.0),
    ];
    let keys: Vec<_> = rank(&balances, &HashMap::new())
        .iter()
        .map(|row| row.key().to_string())
        .collect();

    assert_eq!(keys, vec!["ETH", "NEO", "ZIL"]);
}

#[test]
fn test_rank_output_is_subset_and_idempotent() {
    let balances = sample_wallet();
    let lookup = prices(&[("X", 2.0), ("Y", 1.0), ("Z", 3.0)]);

    let first = rank(&balances, &lookup);
    let second = rank(&balances, &lookup);
    assert_eq!(first, second);

    assert!(first.len() <= balances.len());
    for row in &first {
        assert!(balances.iter().any(|b| b.currency == row.currency));
    }
}

#[test]
fn test_chain_priority_table() {
    assert_eq!(chain_priority("Osmosis"), 100);
    assert_eq!(chain_priority("Ethereum"), 50);
    assert_eq!(chain_priority("Arbitrum"), 30);
    assert_eq!(chain_priority("Zilliqa"), 20);
    assert_eq!(chain_priority("Neo"), 20);
    assert_eq!(chain_priority("Solana"), -99);
    assert_eq!(chain_priority("osmosis"), -99);
    assert_eq!("Neo".parse::<Blockchain>(), Ok(Blockchain::Neo));
}

#[test]
fn test_balance_ranker_recomputes_on_change() {
    let mut ranker = BalanceRanker::new(sample_wallet(), HashMap::new());
    assert_eq!(ranker.rows().len(), 2);
    assert_eq!(ranker.total_usd_value(), 0.0);

    ranker.set_prices(prices(&[("X", 2.0), ("Y", 1.0)]));
    assert_eq!(ranker.total_usd_value(), 13.0);

    ranker.set_balances(vec![WalletBalance::new("Y", "Ethereum", 10.0)]);
    assert_eq!(ranker.rows().len(), 1);
    assert_eq!(ranker.total_usd_value(), 10.0);
}
