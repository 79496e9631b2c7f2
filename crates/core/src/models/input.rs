use super::coin::Coin;
use super::market::MarketSnapshot;
use super::portfolio::PortfolioEntity;
use super::sort::SortOption;

/// One update to one of the aggregator's five inputs.
///
/// Used to funnel updates from several producers through a single writer.
#[derive(Debug, Clone, PartialEq)]
pub enum AggregatorInput {
    SearchText(String),
    RawCoins(Vec<Coin>),
    SortOption(SortOption),
    MarketSnapshot(Option<MarketSnapshot>),
    SavedEntities(Vec<PortfolioEntity>),
}

impl AggregatorInput {
    /// Short label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            AggregatorInput::SearchText(_) => "search_text",
            AggregatorInput::RawCoins(_) => "raw_coins",
            AggregatorInput::SortOption(_) => "sort_option",
            AggregatorInput::MarketSnapshot(_) => "market_snapshot",
            AggregatorInput::SavedEntities(_) => "saved_entities",
        }
    }
}
