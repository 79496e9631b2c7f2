pub mod errors;
pub mod format;
pub mod models;
pub mod providers;
pub mod services;

use models::{
    coin::Coin,
    input::AggregatorInput,
    market::{GlobalMarketData, MarketSnapshot},
    portfolio::PortfolioEntity,
    settings::Settings,
    sort::{SortColumn, SortOption},
    statistic::Statistic,
    view::HomeViewState,
};
use services::{
    coin_service::CoinService, portfolio_service::PortfolioService,
    statistics_service::StatisticsService,
};
use tracing::debug;

use errors::CoreError;

/// Main entry point for the coin-portfolio core library.
///
/// Holds the five inputs of the home screen (search text, raw coin list,
/// sort option, market snapshot, saved holdings) and the three outputs
/// derived from them. Every setter recomputes the outputs that depend on
/// the changed input, in dependency order:
///
/// ```text
/// all_coins       <- search_text, raw_coins, sort_option
/// portfolio_coins <- all_coins, saved_entities
/// statistics      <- market_snapshot, portfolio_coins
/// ```
#[must_use]
pub struct PortfolioAggregator {
    settings: Settings,
    coin_service: CoinService,
    portfolio_service: PortfolioService,
    statistics_service: StatisticsService,

    // inputs
    search_text: String,
    raw_coins: Vec<Coin>,
    sort_option: SortOption,
    market_snapshot: Option<MarketSnapshot>,
    saved_entities: Vec<PortfolioEntity>,

    // outputs
    all_coins: Vec<Coin>,
    portfolio_coins: Vec<Coin>,
    statistics: Vec<Statistic>,
    is_loading: bool,
}

impl std::fmt::Debug for PortfolioAggregator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PortfolioAggregator")
            .field("search_text", &self.search_text)
            .field("sort_option", &self.sort_option)
            .field("raw_coins", &self.raw_coins.len())
            .field("all_coins", &self.all_coins.len())
            .field("portfolio_coins", &self.portfolio_coins.len())
            .field("statistics", &self.statistics.len())
            .field("is_loading", &self.is_loading)
            .finish()
    }
}

impl Default for PortfolioAggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl PortfolioAggregator {
    /// Create an empty aggregator with default settings.
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    /// Create an empty aggregator with the given settings.
    pub fn with_settings(settings: Settings) -> Self {
        let statistics_service = StatisticsService::from_settings(&settings);
        Self {
            sort_option: settings.default_sort,
            settings,
            coin_service: CoinService::new(),
            portfolio_service: PortfolioService::new(),
            statistics_service,
            search_text: String::new(),
            raw_coins: Vec::new(),
            market_snapshot: None,
            saved_entities: Vec::new(),
            all_coins: Vec::new(),
            portfolio_coins: Vec::new(),
            statistics: Vec::new(),
            is_loading: false,
        }
    }

    // ── Inputs ──────────────────────────────────────────────────────

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
        self.recompute_all_coins();
    }

    /// Replace the coin list with a fresh delivery from the coin feed.
    pub fn set_raw_coins(&mut self, coins: Vec<Coin>) {
        self.raw_coins = coins;
        self.recompute_all_coins();
    }

    pub fn set_sort_option(&mut self, sort: SortOption) {
        self.sort_option = sort;
        self.recompute_all_coins();
    }

    /// Tap on a sort column: switch to it, or flip direction if it is active.
    pub fn toggle_sort(&mut self, column: SortColumn) {
        self.set_sort_option(self.sort_option.toggled(column));
    }

    /// Replace the market snapshot. Publishing statistics ends a pending reload.
    pub fn set_market_snapshot(&mut self, snapshot: Option<MarketSnapshot>) {
        self.market_snapshot = snapshot;
        self.recompute_statistics();
        self.is_loading = false;
    }

    /// Build the market snapshot from raw global market data, using the
    /// configured quote currency and currency symbol.
    pub fn set_global_market_data(&mut self, data: &GlobalMarketData) {
        let snapshot = MarketSnapshot::from_global(
            data,
            &self.settings.quote_currency,
            &self.settings.currency_symbol,
        );
        self.set_market_snapshot(Some(snapshot));
    }

    /// Replace the saved holdings snapshot.
    pub fn set_saved_entities(&mut self, entities: Vec<PortfolioEntity>) {
        self.saved_entities = entities;
        self.recompute_portfolio();
    }

    /// Apply a single input update.
    pub fn apply(&mut self, input: AggregatorInput) {
        debug!(input = input.kind(), "Applying aggregator input");
        match input {
            AggregatorInput::SearchText(text) => self.set_search_text(text),
            AggregatorInput::RawCoins(coins) => self.set_raw_coins(coins),
            AggregatorInput::SortOption(sort) => self.set_sort_option(sort),
            AggregatorInput::MarketSnapshot(snapshot) => self.set_market_snapshot(snapshot),
            AggregatorInput::SavedEntities(entities) => self.set_saved_entities(entities),
        }
    }

    /// Mark a reload as in flight.
    pub fn begin_loading(&mut self) {
        self.is_loading = true;
    }

    pub fn finish_loading(&mut self) {
        self.is_loading = false;
    }

    // ── Outputs ─────────────────────────────────────────────────────

    /// Filtered and sorted coin list.
    #[must_use]
    pub fn all_coins(&self) -> &[Coin] {
        &self.all_coins
    }

    /// Coins the user holds, annotated with amounts, in display order.
    #[must_use]
    pub fn portfolio_coins(&self) -> &[Coin] {
        &self.portfolio_coins
    }

    #[must_use]
    pub fn statistics(&self) -> &[Statistic] {
        &self.statistics
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    #[must_use]
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    #[must_use]
    pub fn sort_option(&self) -> SortOption {
        self.sort_option
    }

    #[must_use]
    pub fn market_snapshot(&self) -> Option<&MarketSnapshot> {
        self.market_snapshot.as_ref()
    }

    #[must_use]
    pub fn saved_entities(&self) -> &[PortfolioEntity] {
        &self.saved_entities
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Saved amount for a coin, if the user holds it.
    #[must_use]
    pub fn holding_for(&self, coin_id: &str) -> Option<f64> {
        self.saved_entities
            .iter()
            .find(|e| e.coin_id == coin_id)
            .map(|e| e.amount)
    }

    /// Total value of the portfolio at current prices.
    #[must_use]
    pub fn portfolio_value(&self) -> f64 {
        self.portfolio_service.total_value(&self.portfolio_coins)
    }

    /// Owned snapshot of everything the presentation layer displays.
    pub fn view_state(&self) -> HomeViewState {
        HomeViewState {
            search_text: self.search_text.clone(),
            sort_option: self.sort_option,
            is_loading: self.is_loading,
            all_coins: self.all_coins.clone(),
            portfolio_coins: self.portfolio_coins.clone(),
            statistics: self.statistics.clone(),
        }
    }

    /// Export the current view state as pretty JSON.
    pub fn to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(&self.view_state())
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize view state: {e}")))
    }

    // ── Internal ────────────────────────────────────────────────────

    fn recompute_all_coins(&mut self) {
        self.all_coins = self.coin_service.compute_all_coins(
            &self.search_text,
            &self.raw_coins,
            self.sort_option,
        );
        debug!(
            raw = self.raw_coins.len(),
            shown = self.all_coins.len(),
            sort = %self.sort_option,
            "Recomputed coin list"
        );
        self.recompute_portfolio();
    }

    fn recompute_portfolio(&mut self) {
        let joined = self
            .portfolio_service
            .join_portfolio(&self.all_coins, &self.saved_entities);
        self.portfolio_coins = self.coin_service.apply_holdings_sort(self.sort_option, joined);
        self.recompute_statistics();
    }

    fn recompute_statistics(&mut self) {
        self.statistics = self
            .statistics_service
            .compute_statistics(self.market_snapshot.as_ref(), &self.portfolio_coins);
    }
}
