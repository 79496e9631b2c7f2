use crate::format::currency_with_2_decimals;
use crate::models::coin::Coin;
use crate::models::market::MarketSnapshot;
use crate::models::settings::{Settings, ZeroBaselineChange};
use crate::models::statistic::Statistic;
use crate::services::portfolio_service::PortfolioService;

pub const MARKET_CAP_TITLE: &str = "Market Cap";
pub const VOLUME_TITLE: &str = "24h Volume";
pub const BTC_DOMINANCE_TITLE: &str = "BTC Dominance";
pub const PORTFOLIO_TITLE: &str = "Portfolio";

/// Builds the statistics summary from market data and the portfolio.
pub struct StatisticsService {
    portfolio_service: PortfolioService,
    currency_symbol: String,
    zero_baseline: ZeroBaselineChange,
}

impl StatisticsService {
    pub fn new(currency_symbol: impl Into<String>, zero_baseline: ZeroBaselineChange) -> Self {
        Self {
            portfolio_service: PortfolioService::new(),
            currency_symbol: currency_symbol.into(),
            zero_baseline,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.currency_symbol.clone(), settings.zero_baseline_change)
    }

    /// Market Cap, 24h Volume, BTC Dominance and Portfolio, in that order.
    ///
    /// Without a market snapshot there is nothing to show and the result is
    /// empty, whatever the portfolio holds.
    pub fn compute_statistics(
        &self,
        snapshot: Option<&MarketSnapshot>,
        portfolio_coins: &[Coin],
    ) -> Vec<Statistic> {
        let Some(data) = snapshot else {
            return Vec::new();
        };

        let market_cap = Statistic::with_change(
            MARKET_CAP_TITLE,
            data.total_market_cap.clone(),
            Some(data.market_cap_change_percentage_24h),
        );
        let volume = Statistic::new(VOLUME_TITLE, data.total_volume_24h.clone());
        let btc_dominance = Statistic::new(BTC_DOMINANCE_TITLE, data.btc_dominance_percentage.clone());
        let portfolio = self.portfolio_statistic(portfolio_coins);

        vec![market_cap, volume, btc_dominance, portfolio]
    }

    /// The "Portfolio" entry: current total value and its change over 24h.
    pub fn portfolio_statistic(&self, portfolio_coins: &[Coin]) -> Statistic {
        let current = self.portfolio_service.total_value(portfolio_coins);
        let previous = self.portfolio_service.previous_total_value(portfolio_coins);

        Statistic::with_change(
            PORTFOLIO_TITLE,
            currency_with_2_decimals(current, &self.currency_symbol),
            self.percentage_change(current, previous),
        )
    }

    /// `((current - previous) / previous) * 100`, with the zero-baseline
    /// policy applied when `previous` is zero or the result is not finite.
    pub fn percentage_change(&self, current: f64, previous: f64) -> Option<f64> {
        let change = ((current - previous) / previous) * 100.0;
        if previous == 0.0 || !change.is_finite() {
            return match self.zero_baseline {
                ZeroBaselineChange::Zero => Some(0.0),
                ZeroBaselineChange::Absent => None,
            };
        }
        Some(change)
    }
}

impl Default for StatisticsService {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}
