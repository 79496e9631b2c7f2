use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::coin::Coin;
use crate::models::market::MarketSnapshot;
use crate::models::portfolio::PortfolioEntity;

/// Supplies the full coin list. Every successful fetch replaces the
/// previous list wholesale.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait CoinDataSource: Send + Sync {
    /// Human-readable name of this source (for logs/errors).
    fn name(&self) -> &str;

    async fn fetch_coins(&self) -> Result<Vec<Coin>, CoreError>;
}

/// Supplies global market figures.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait MarketDataSource: Send + Sync {
    fn name(&self) -> &str;

    /// `Ok(None)` when the source answered but had no data yet.
    async fn fetch_market_data(&self) -> Result<Option<MarketSnapshot>, CoreError>;
}

/// Persisted holdings. The aggregator reads snapshots and forwards holding
/// updates verbatim; validation, if any, belongs to the implementation.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait PortfolioStore: Send + Sync {
    /// Current snapshot of all saved holdings.
    async fn saved_entities(&self) -> Result<Vec<PortfolioEntity>, CoreError>;

    /// Record `amount` of `coin_id`.
    async fn update_holding(&self, coin_id: &str, amount: f64) -> Result<(), CoreError>;
}
