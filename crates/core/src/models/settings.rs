use serde::{Deserialize, Serialize};

use super::sort::SortOption;
use crate::errors::CoreError;

/// How the portfolio change is reported when yesterday's value is zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZeroBaselineChange {
    /// Report a 0% change
    #[default]
    Zero,
    /// Leave the change out of the statistic
    Absent,
}

/// Aggregator configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Sort option the aggregator starts with.
    pub default_sort: SortOption,

    /// Symbol prepended to monetary values (e.g. "$").
    pub currency_symbol: String,

    /// Quote currency key used when reading raw global market data (e.g. "usd").
    pub quote_currency: String,

    /// Policy for a zero previous portfolio value.
    pub zero_baseline_change: ZeroBaselineChange,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_sort: SortOption::default(),
            currency_symbol: "$".to_string(),
            quote_currency: "usd".to_string(),
            zero_baseline_change: ZeroBaselineChange::default(),
        }
    }
}

impl Settings {
    /// Parse settings from JSON. Missing fields fall back to their defaults.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize settings to pretty JSON.
    pub fn to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize settings: {e}")))
    }
}
