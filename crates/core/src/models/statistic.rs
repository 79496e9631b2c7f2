use serde::{Deserialize, Serialize};

/// A single entry of the statistics summary shown above the coin list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistic {
    pub title: String,

    /// Already formatted for display (e.g. "$1.23Tr", "40.12%", "$200.00")
    pub value: String,

    /// Percentage change to show next to the value, if any
    pub percentage_change: Option<f64>,
}

impl Statistic {
    pub fn new(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            percentage_change: None,
        }
    }

    pub fn with_change(
        title: impl Into<String>,
        value: impl Into<String>,
        percentage_change: Option<f64>,
    ) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            percentage_change,
        }
    }
}
