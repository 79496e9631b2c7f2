use serde::{Deserialize, Serialize};

/// A saved holding: how much of a coin the user owns.
///
/// Written by the portfolio store; the aggregator only reads snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioEntity {
    /// Id of the coin this holding refers to (matches `Coin::id`)
    pub coin_id: String,

    /// Amount held
    pub amount: f64,
}

impl PortfolioEntity {
    pub fn new(coin_id: impl Into<String>, amount: f64) -> Self {
        Self {
            coin_id: coin_id.into(),
            amount,
        }
    }
}
