use std::cmp::Ordering;

use crate::models::coin::Coin;
use crate::models::sort::SortOption;

/// Filters and orders the coin list.
///
/// Pure business logic — no I/O, no hidden state. Every call builds a new
/// list from its inputs.
pub struct CoinService;

impl CoinService {
    pub fn new() -> Self {
        Self
    }

    /// Filter by search text, then sort by `sort`.
    ///
    /// Holdings-based options order by rank here; the holdings reorder is
    /// applied by [`CoinService::apply_holdings_sort`] once amounts are joined.
    pub fn compute_all_coins(&self, search_text: &str, coins: &[Coin], sort: SortOption) -> Vec<Coin> {
        let mut filtered = self.filter_coins(search_text, coins);
        self.sort_coins(sort, &mut filtered);
        filtered
    }

    /// Keep coins whose name, symbol, or id contains `text` (case-insensitive).
    /// An empty `text` keeps every coin.
    pub fn filter_coins(&self, text: &str, coins: &[Coin]) -> Vec<Coin> {
        if text.is_empty() {
            return coins.to_vec();
        }

        let needle = text.to_lowercase();
        coins
            .iter()
            .filter(|c| c.matches_lowercase(&needle))
            .cloned()
            .collect()
    }

    /// Stable in-place sort for the base list.
    pub fn sort_coins(&self, sort: SortOption, coins: &mut [Coin]) {
        match sort {
            SortOption::Rank | SortOption::Holdings => coins.sort_by(|a, b| a.rank.cmp(&b.rank)),
            SortOption::RankReversed | SortOption::HoldingsReversed => {
                coins.sort_by(|a, b| b.rank.cmp(&a.rank))
            }
            SortOption::Price => {
                coins.sort_by(|a, b| cmp_nan_last(a.current_price, b.current_price, true))
            }
            SortOption::PriceReversed => {
                coins.sort_by(|a, b| cmp_nan_last(a.current_price, b.current_price, false))
            }
        }
    }

    /// Reorder by holdings value: largest first for `Holdings`, smallest first
    /// for `HoldingsReversed`. Any other option returns the list unchanged.
    pub fn apply_holdings_sort(&self, sort: SortOption, mut coins: Vec<Coin>) -> Vec<Coin> {
        let descending = match sort {
            SortOption::Holdings => true,
            SortOption::HoldingsReversed => false,
            _ => return coins,
        };
        coins.sort_by(|a, b| {
            cmp_nan_last(a.current_holdings_value(), b.current_holdings_value(), descending)
        });
        coins
    }
}

impl Default for CoinService {
    fn default() -> Self {
        Self::new()
    }
}

/// Total order over prices and values. NaN sorts after every number in
/// both directions, so a bad amount or price sinks to the bottom.
fn cmp_nan_last(a: f64, b: f64, descending: bool) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) if descending => b.total_cmp(&a),
        (false, false) => a.total_cmp(&b),
    }
}
