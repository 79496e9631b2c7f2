use thiserror::Error;

/// Unified error type for the coin-portfolio-core library.
///
/// The aggregation itself never fails; these variants describe failures of
/// the external collaborators (coin feed, market feed, holdings storage)
/// and of the update dispatcher.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Data sources ────────────────────────────────────────────────
    #[error("Data source error ({source_name}): {message}")]
    DataSource {
        source_name: String,
        message: String,
    },

    // ── Holdings storage ────────────────────────────────────────────
    #[error("Portfolio storage error: {0}")]
    Storage(String),

    // ── Serialization ───────────────────────────────────────────────
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    // ── Dispatcher ──────────────────────────────────────────────────
    #[error("Update dispatcher is closed")]
    DispatcherClosed,
}

impl CoreError {
    /// Shorthand for a data-source failure tagged with the source's name.
    pub fn data_source(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        CoreError::DataSource {
            source_name: source_name.into(),
            message: message.into(),
        }
    }
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}
