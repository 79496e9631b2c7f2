use serde::{Deserialize, Serialize};

use super::coin::Coin;
use super::sort::SortOption;
use super::statistic::Statistic;

/// Everything the home screen renders, captured at one point in time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HomeViewState {
    pub search_text: String,
    pub sort_option: SortOption,
    pub is_loading: bool,

    /// Filtered and sorted coin list
    pub all_coins: Vec<Coin>,

    /// Coins the user holds, annotated with their amounts
    pub portfolio_coins: Vec<Coin>,

    /// Market Cap, 24h Volume, BTC Dominance, Portfolio (or empty)
    pub statistics: Vec<Statistic>,
}
