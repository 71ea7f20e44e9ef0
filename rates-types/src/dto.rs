//! Wire shape of the remote rate API.

use serde::{Deserialize, Serialize};

use crate::domain::{CurrencyCode, RateTable};
use crate::error::FetchError;

/// Body of `GET /v4/latest/USD`.
///
/// Only `rates` matters. The other fields are kept for diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LatestRatesResponse {
    #[serde(default)]
    pub rates: Option<RateTable>,
    #[serde(default)]
    pub base: Option<CurrencyCode>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub time_last_updated: Option<i64>,
}

impl LatestRatesResponse {
    /// Extracts the rate table, treating a missing or null `rates` field as a
    /// failed fetch.
    pub fn into_table(self) -> Result<RateTable, FetchError> {
        self.rates.ok_or(FetchError::MissingRates)
    }
}
