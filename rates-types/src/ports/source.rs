//! Rate source port.

use crate::domain::RateTable;
use crate::error::FetchError;

/// Somewhere a USD-based rate table can be fetched from.
///
/// Each call is exactly one attempt; retrying is the caller's business.
#[async_trait::async_trait]
pub trait RateSource: Send + Sync {
    async fn fetch_rates(&self) -> Result<RateTable, FetchError>;
}
