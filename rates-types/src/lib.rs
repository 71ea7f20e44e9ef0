//! # Rates Types
//!
//! Domain types and port traits for the USD exchange rate converter.
//! This crate has no IO dependencies - only data structures and the
//! trait definitions the adapters implement.
//!
//! ## Architecture
//!
//! - `domain/` - Currency codes, rate tables and conversion records
//! - `ports/` - Traits for rate sources, stats sinks and diagnostic logs
//! - `dto/` - Wire shape of the remote rate API
//! - `error/` - Fetch and stats error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

pub use domain::{
    ConversionRecord, ConversionStatus, CurrencyCode, ParseCurrencyError, RateTable,
    TIMESTAMP_FORMAT,
};
pub use dto::LatestRatesResponse;
pub use error::{FetchError, StatsError};
pub use ports::{DiagnosticLog, RateSource, StatsSink};
