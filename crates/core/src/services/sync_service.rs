use std::sync::Arc;

use tracing::{info, warn};

use crate::errors::CoreError;
use crate::providers::traits::{CoinDataSource, MarketDataSource, PortfolioStore};
use crate::PortfolioAggregator;

/// Connects the aggregator to its external collaborators.
///
/// The collaborators own all I/O; this service only fetches their current
/// data and pushes it into the aggregator as full replacements.
pub struct SyncService {
    coin_source: Arc<dyn CoinDataSource>,
    market_source: Arc<dyn MarketDataSource>,
    store: Arc<dyn PortfolioStore>,
}

impl SyncService {
    pub fn new(
        coin_source: Arc<dyn CoinDataSource>,
        market_source: Arc<dyn MarketDataSource>,
        store: Arc<dyn PortfolioStore>,
    ) -> Self {
        Self {
            coin_source,
            market_source,
            store,
        }
    }

    /// Refetch coins, market data and saved holdings.
    ///
    /// The three requests run concurrently; results are applied one after
    /// another. A failed request is logged and leaves the previous value of
    /// that input untouched. `is_loading` is set for the duration of the call.
    pub async fn reload(&self, aggregator: &mut PortfolioAggregator) {
        aggregator.begin_loading();
        info!(
            coins = self.coin_source.name(),
            market = self.market_source.name(),
            "Reloading portfolio data"
        );

        let (coins, market, entities) = tokio::join!(
            self.coin_source.fetch_coins(),
            self.market_source.fetch_market_data(),
            self.store.saved_entities(),
        );

        match coins {
            Ok(coins) => aggregator.set_raw_coins(coins),
            Err(e) => warn!(data_source = self.coin_source.name(), error = %e, "Coin fetch failed"),
        }

        match entities {
            Ok(entities) => aggregator.set_saved_entities(entities),
            Err(e) => warn!(error = %e, "Reading saved holdings failed"),
        }

        match market {
            Ok(snapshot) => aggregator.set_market_snapshot(snapshot),
            Err(e) => warn!(data_source = self.market_source.name(), error = %e, "Market data fetch failed"),
        }

        aggregator.finish_loading();
    }

    /// Forward a holding change to the store, then refresh the aggregator's
    /// holdings from it. The amount is passed through as given.
    pub async fn update_holding(
        &self,
        aggregator: &mut PortfolioAggregator,
        coin_id: &str,
        amount: f64,
    ) -> Result<(), CoreError> {
        self.store.update_holding(coin_id, amount).await?;
        info!(coin_id, amount, "Holding updated");
        self.refresh_holdings(aggregator).await
    }

    /// Re-read saved holdings into the aggregator.
    pub async fn refresh_holdings(&self, aggregator: &mut PortfolioAggregator) -> Result<(), CoreError> {
        let entities = self.store.saved_entities().await?;
        aggregator.set_saved_entities(entities);
        Ok(())
    }
}
