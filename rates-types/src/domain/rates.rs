//! USD-based rate table.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::CurrencyCode;

/// Units of each currency per 1 USD.
///
/// A missing code is an expected state meaning "no rate available".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RateTable {
    rates: HashMap<CurrencyCode, f64>,
}

impl RateTable {
    /// An empty table; what a provider settles on after every fetch failed.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(rates: HashMap<CurrencyCode, f64>) -> Self {
        Self { rates }
    }

    /// Returns the rate for `code`, if the table has one.
    pub fn get(&self, code: &str) -> Option<f64> {
        self.rates.get(code).copied()
    }

    pub fn contains(&self, code: &str) -> bool {
        self.rates.contains_key(code)
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CurrencyCode, f64)> {
        self.rates.iter().map(|(code, rate)| (code, *rate))
    }

    /// Entries ordered by currency code.
    pub fn sorted(&self) -> Vec<(&CurrencyCode, f64)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

impl<C: Into<CurrencyCode>> FromIterator<(C, f64)> for RateTable {
    fn from_iter<I: IntoIterator<Item = (C, f64)>>(iter: I) -> Self {
        Self {
            rates: iter
                .into_iter()
                .map(|(code, rate)| (code.into(), rate))
                .collect(),
        }
    }
}
