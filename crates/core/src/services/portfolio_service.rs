use crate::models::coin::Coin;
use crate::models::portfolio::PortfolioEntity;

/// Joins the coin list with saved holdings.
pub struct PortfolioService;

impl PortfolioService {
    pub fn new() -> Self {
        Self
    }

    /// Coins from `all_coins` that have a saved entity, annotated with its amount.
    ///
    /// Order follows `all_coins`. When several entities share a coin id, the
    /// first one wins. Coins without an entity are dropped.
    pub fn join_portfolio(&self, all_coins: &[Coin], entities: &[PortfolioEntity]) -> Vec<Coin> {
        all_coins
            .iter()
            .filter_map(|coin| {
                entities
                    .iter()
                    .find(|e| e.coin_id == coin.id)
                    .map(|e| coin.with_holdings(e.amount))
            })
            .collect()
    }

    /// Total value of the given portfolio coins at current prices.
    pub fn total_value(&self, portfolio_coins: &[Coin]) -> f64 {
        portfolio_coins.iter().map(Coin::current_holdings_value).sum()
    }

    /// Total value of the given portfolio coins 24 hours ago, reconstructed
    /// from each coin's 24h price change (missing change counts as 0%).
    pub fn previous_total_value(&self, portfolio_coins: &[Coin]) -> f64 {
        portfolio_coins
            .iter()
            .map(|coin| {
                let pct = coin.price_change_percentage_24h.unwrap_or(0.0) / 100.0;
                coin.current_holdings_value() / (1.0 + pct)
            })
            .sum()
    }
}

impl Default for PortfolioService {
    fn default() -> Self {
        Self::new()
    }
}
