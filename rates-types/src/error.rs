//! Error types for rate fetching and stats recording.
//!
//! Neither type escapes the rate provider: fetch errors are retried and then
//! absorbed, stats errors are logged and dropped.

/// A single failed attempt to fetch the rate table.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("HTTP status {status}")]
    Status { status: u16 },

    #[error("Malformed response body: {0}")]
    Malformed(String),

    #[error("Response has no rates field")]
    MissingRates,
}

/// Failure to append a record to the stats log.
#[derive(Debug, thiserror::Error)]
pub enum StatsError {
    #[error("Stats log IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Stats log unavailable: {0}")]
    Unavailable(String),
}
