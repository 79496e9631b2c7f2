use serde::{Deserialize, Serialize};

/// Ordering applied to the coin list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortOption {
    /// Ascending rank (most prominent first)
    Rank,
    /// Descending rank
    RankReversed,
    /// Largest holdings value first; rank-ordered until holdings are known
    #[default]
    Holdings,
    /// Smallest holdings value first; reverse-rank-ordered until holdings are known
    HoldingsReversed,
    /// Most expensive first
    Price,
    /// Cheapest first
    PriceReversed,
}

/// Column headers the presentation layer lets the user tap to sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortColumn {
    Rank,
    Holdings,
    Price,
}

impl SortOption {
    /// `true` for the two options that reorder by holdings value.
    pub fn is_holdings(self) -> bool {
        matches!(self, SortOption::Holdings | SortOption::HoldingsReversed)
    }

    /// The column this option sorts by.
    pub fn column(self) -> SortColumn {
        match self {
            SortOption::Rank | SortOption::RankReversed => SortColumn::Rank,
            SortOption::Holdings | SortOption::HoldingsReversed => SortColumn::Holdings,
            SortOption::Price | SortOption::PriceReversed => SortColumn::Price,
        }
    }

    /// Option after the user taps `column`: the active column flips direction,
    /// any other column becomes active in its normal direction.
    pub fn toggled(self, column: SortColumn) -> Self {
        match (self, column) {
            (SortOption::Rank, SortColumn::Rank) => SortOption::RankReversed,
            (SortOption::Holdings, SortColumn::Holdings) => SortOption::HoldingsReversed,
            (SortOption::Price, SortColumn::Price) => SortOption::PriceReversed,
            (_, SortColumn::Rank) => SortOption::Rank,
            (_, SortColumn::Holdings) => SortOption::Holdings,
            (_, SortColumn::Price) => SortOption::Price,
        }
    }
}

impl std::fmt::Display for SortOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortOption::Rank => write!(f, "Rank"),
            SortOption::RankReversed => write!(f, "Rank (reversed)"),
            SortOption::Holdings => write!(f, "Holdings"),
            SortOption::HoldingsReversed => write!(f, "Holdings (reversed)"),
            SortOption::Price => write!(f, "Price"),
            SortOption::PriceReversed => write!(f, "Price (reversed)"),
        }
    }
}
