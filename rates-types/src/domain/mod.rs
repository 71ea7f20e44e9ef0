//! Domain types.

mod currency;
mod rates;
mod record;

pub use currency::{CurrencyCode, ParseCurrencyError};
pub use rates::RateTable;
pub use record::{ConversionRecord, ConversionStatus, TIMESTAMP_FORMAT};
