pub mod types;
pub mod ranker;

pub use types::*;
pub use ranker::{rank, BalanceRanker};
