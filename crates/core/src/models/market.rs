use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::format::{percent_string, with_abbreviations};

/// Global market figures, already formatted for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketSnapshot {
    /// e.g. "$1.23Tr"
    pub total_market_cap: String,

    /// Market cap change over 24h, in percent
    pub market_cap_change_percentage_24h: f64,

    /// e.g. "$50.00Bn"
    pub total_volume_24h: String,

    /// e.g. "40.12%"
    pub btc_dominance_percentage: String,
}

/// Envelope of the `/global` market endpoint: `{ "data": { ... } }`.
#[derive(Debug, Clone, Deserialize)]
pub struct GlobalDataResponse {
    pub data: GlobalMarketData,
}

/// Raw global market data as published by the market feed.
///
/// Monetary maps are keyed by quote currency ("usd", "eur", ...);
/// `market_cap_percentage` is keyed by coin symbol ("btc", "eth", ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalMarketData {
    #[serde(default)]
    pub total_market_cap: HashMap<String, f64>,

    #[serde(default)]
    pub total_volume: HashMap<String, f64>,

    #[serde(default)]
    pub market_cap_percentage: HashMap<String, f64>,

    #[serde(default)]
    pub market_cap_change_percentage_24h_usd: f64,
}

impl MarketSnapshot {
    pub fn new(
        total_market_cap: impl Into<String>,
        market_cap_change_percentage_24h: f64,
        total_volume_24h: impl Into<String>,
        btc_dominance_percentage: impl Into<String>,
    ) -> Self {
        Self {
            total_market_cap: total_market_cap.into(),
            market_cap_change_percentage_24h,
            total_volume_24h: total_volume_24h.into(),
            btc_dominance_percentage: btc_dominance_percentage.into(),
        }
    }

    /// Build a display snapshot from raw global data.
    ///
    /// `quote_currency` selects the entry of the monetary maps (case-insensitive);
    /// missing entries become empty strings.
    pub fn from_global(data: &GlobalMarketData, quote_currency: &str, currency_symbol: &str) -> Self {
        let key = quote_currency.to_lowercase();
        let money = |map: &HashMap<String, f64>| {
            map.get(&key)
                .map(|v| format!("{currency_symbol}{}", with_abbreviations(*v)))
                .unwrap_or_default()
        };

        Self {
            total_market_cap: money(&data.total_market_cap),
            market_cap_change_percentage_24h: data.market_cap_change_percentage_24h_usd,
            total_volume_24h: money(&data.total_volume),
            btc_dominance_percentage: data
                .market_cap_percentage
                .get("btc")
                .map(|v| percent_string(*v))
                .unwrap_or_default(),
        }
    }
}
