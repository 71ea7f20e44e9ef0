//! Stats log port.

use crate::domain::ConversionRecord;
use crate::error::StatsError;

/// Append-only destination for conversion records.
///
/// Implementations write one record as one line in a single append.
pub trait StatsSink: Send + Sync {
    fn record(&self, record: &ConversionRecord) -> Result<(), StatsError>;
}
