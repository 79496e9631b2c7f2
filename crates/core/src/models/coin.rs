use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Rank given to coins the feed leaves unranked, so they sort last.
pub const UNRANKED: u32 = u32::MAX;

/// A tradable coin as delivered by the coin data feed.
///
/// Coins coming from the feed carry no holdings. A portfolio view of a coin
/// is produced with [`Coin::with_holdings`], which returns a new value rather
/// than mutating the feed's copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coin {
    /// Feed identifier, e.g. "bitcoin"
    pub id: String,

    /// Ticker symbol, e.g. "btc"
    pub symbol: String,

    /// Display name, e.g. "Bitcoin"
    pub name: String,

    /// Market-cap rank (lower = more prominent). Missing or null in the
    /// feed becomes [`UNRANKED`].
    #[serde(
        alias = "market_cap_rank",
        default = "unranked",
        deserialize_with = "deserialize_rank"
    )]
    pub rank: u32,

    /// Current price in the feed's quote currency
    pub current_price: f64,

    /// Price change over the last 24 hours, in percent
    #[serde(default)]
    pub price_change_percentage_24h: Option<f64>,

    /// Amount held by the user; absent until joined with a saved entity
    #[serde(default)]
    pub holding_amount: Option<f64>,

    /// When the feed last refreshed this coin
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
}

impl Coin {
    pub fn new(
        id: impl Into<String>,
        symbol: impl Into<String>,
        name: impl Into<String>,
        rank: u32,
        current_price: f64,
    ) -> Self {
        Self {
            id: id.into(),
            symbol: symbol.into(),
            name: name.into(),
            rank,
            current_price,
            price_change_percentage_24h: None,
            holding_amount: None,
            last_updated: None,
        }
    }

    /// Builder-style setter for the 24h price change.
    pub fn with_price_change(mut self, percentage: f64) -> Self {
        self.price_change_percentage_24h = Some(percentage);
        self
    }

    /// Return a copy of this coin annotated with the held amount.
    #[must_use]
    pub fn with_holdings(&self, amount: f64) -> Self {
        Self {
            holding_amount: Some(amount),
            ..self.clone()
        }
    }

    /// Value of the user's holding at the current price (0 when nothing is held).
    pub fn current_holdings_value(&self) -> f64 {
        self.holding_amount
            .map(|amount| amount * self.current_price)
            .unwrap_or(0.0)
    }

    /// Case-insensitive substring match on name, symbol, or id.
    /// `needle` must already be lowercase.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.symbol.to_lowercase().contains(needle)
            || self.id.to_lowercase().contains(needle)
    }
}

fn unranked() -> u32 {
    UNRANKED
}

fn deserialize_rank<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u32>::deserialize(deserializer)?.unwrap_or(UNRANKED))
}
