//! Cached, retrying USD rate provider.
//!
//! The provider fetches the rate table at most once per instance. If every
//! attempt fails it settles on an empty table for good, and callers only
//! ever see a numeric result: failures become `0.0` plus diagnostics and a
//! `FAIL` stats line.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Local;
use rates_client::HttpRateSource;
use rates_types::{
    ConversionRecord, ConversionStatus, CurrencyCode, DiagnosticLog, RateSource, RateTable,
    StatsSink,
};
use tokio::sync::OnceCell;

use crate::log::TracingLog;
use crate::policy::RetryPolicy;
use crate::stats::FileStatsLog;

/// Anything that can turn a USD amount into another currency.
///
/// This is the capability a [`Converter`](crate::Converter) binds to.
#[async_trait]
pub trait UsdConversion: Send + Sync {
    async fn convert_from_usd(&self, amount: f64, currency: &str) -> f64;
}

#[async_trait]
impl<P: UsdConversion + ?Sized> UsdConversion for Arc<P> {
    async fn convert_from_usd(&self, amount: f64, currency: &str) -> f64 {
        (**self).convert_from_usd(amount, currency).await
    }
}

/// Rate provider.
///
/// Generic over `S: RateSource` so tests can script the remote side. The
/// stats sink and diagnostic log are injected with `with_stats`/`with_log`.
pub struct RateProvider<S: RateSource = HttpRateSource> {
    source: S,
    policy: RetryPolicy,
    /// Empty cell means not loaded yet; an empty table means loading failed.
    rates: OnceCell<RateTable>,
    stats: Arc<dyn StatsSink>,
    log: Arc<dyn DiagnosticLog>,
}

impl RateProvider<HttpRateSource> {
    /// A provider backed by the public rate API.
    pub fn http(policy: RetryPolicy) -> Self {
        Self::new(HttpRateSource::new(), policy)
    }
}

impl<S: RateSource> RateProvider<S> {
    /// Creates a provider that logs through `tracing` and writes stats to
    /// `stats.txt` in the working directory.
    pub fn new(source: S, policy: RetryPolicy) -> Self {
        Self {
            source,
            policy,
            rates: OnceCell::new(),
            stats: Arc::new(FileStatsLog::default()),
            log: Arc::new(TracingLog::default()),
        }
    }

    /// Sets where conversion records go.
    pub fn with_stats(mut self, stats: impl StatsSink + 'static) -> Self {
        self.stats = Arc::new(stats);
        self
    }

    /// Sets where diagnostics go.
    pub fn with_log(mut self, log: impl DiagnosticLog + 'static) -> Self {
        self.log = Arc::new(log);
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// True once a fetch has completed, successfully or not.
    pub fn is_loaded(&self) -> bool {
        self.rates.initialized()
    }

    /// Loads the rate table on first use and returns it.
    ///
    /// Later calls return the cached table without touching the source,
    /// including when the first load ended with an empty table.
    pub async fn ensure_rates_loaded(&self) -> &RateTable {
        self.rates.get_or_init(|| self.fetch_with_retry()).await
    }

    /// The loaded rate table. Same as [`ensure_rates_loaded`](Self::ensure_rates_loaded).
    pub async fn rates(&self) -> &RateTable {
        self.ensure_rates_loaded().await
    }

    async fn fetch_with_retry(&self) -> RateTable {
        let attempts = self.policy.attempts();

        for attempt in 1..=attempts {
            match self.source.fetch_rates().await {
                Ok(table) => {
                    self.log.info("Rates fetched successfully.");
                    return table;
                }
                Err(e) => {
                    self.log
                        .error(&format!("Error fetching rates (attempt {}): {}", attempt, e));
                    if attempt < attempts {
                        tokio::time::sleep(self.policy.retry_delay).await;
                    }
                }
            }
        }

        self.log.error("Failed to fetch rates after all retries.");
        RateTable::empty()
    }

    /// Converts `amount` USD into `currency`.
    ///
    /// Returns `0.0` when rates could not be loaded or the currency is not
    /// in the table. Every call appends one stats record.
    pub async fn convert_from_usd(&self, amount: f64, currency: &str) -> f64 {
        let rates = self.ensure_rates_loaded().await;

        match rates.get(currency) {
            Some(rate) => {
                let result = amount * rate;
                self.record_stats(amount, currency, result, true);
                result
            }
            None => {
                self.log
                    .warn(&format!("No rate for {}, returning 0.", currency));
                self.record_stats(amount, currency, 0.0, false);
                0.0
            }
        }
    }

    /// Appends one conversion record to the stats sink.
    ///
    /// A failing sink is reported through the diagnostic log and otherwise
    /// ignored.
    pub fn record_stats(&self, amount: f64, currency: &str, result: f64, success: bool) {
        let record = ConversionRecord::from_usd(
            Local::now().naive_local(),
            amount,
            CurrencyCode::new(currency),
            result,
            ConversionStatus::from_success(success),
        );

        if let Err(e) = self.stats.record(&record) {
            self.log.error(&format!("Failed to record stats: {}", e));
        }
    }
}

#[async_trait]
impl<S: RateSource> UsdConversion for RateProvider<S> {
    async fn convert_from_usd(&self, amount: f64, currency: &str) -> f64 {
        RateProvider::convert_from_usd(self, amount, currency).await
    }
}
