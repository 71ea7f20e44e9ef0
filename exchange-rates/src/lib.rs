//! # Exchange Rates
//!
//! Converts USD amounts into other currencies using rates fetched once from
//! a remote API and cached for the lifetime of the provider.
//!
//! - [`RateProvider`] owns the cache, the retrying fetch and the stats log.
//! - [`Converter`] binds a provider to one target currency.
//!
//! Failures never surface as errors. A conversion that cannot be served
//! returns `0.0`, logs a warning and records a `FAIL` line.
//!
//! # Example
//! ```no_run
//! use exchange_rates::Converter;
//!
//! # async fn run() {
//! let eur = Converter::new("EUR");
//! let value = eur.convert(100.0).await;
//! println!("100 USD in EUR = {}", value);
//! # }
//! ```

mod converter;
mod log;
mod policy;
mod provider;
mod stats;

pub use converter::Converter;
pub use log::TracingLog;
pub use policy::{DEFAULT_MAX_RETRIES, DEFAULT_RETRY_DELAY, RetryPolicy};
pub use provider::{RateProvider, UsdConversion};
pub use stats::{DEFAULT_STATS_PATH, FileStatsLog, MemoryStatsLog};

pub use rates_client::HttpRateSource;
pub use rates_types::{
    ConversionRecord, ConversionStatus, CurrencyCode, DiagnosticLog, FetchError, RateSource,
    RateTable, StatsError, StatsSink,
};
