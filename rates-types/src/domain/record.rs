//! Conversion records written to the stats log.

use chrono::NaiveDateTime;
use std::fmt;

use super::CurrencyCode;

/// Second-resolution timestamp format used in the stats log.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Outcome of a single conversion attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionStatus {
    Ok,
    Fail,
}

impl ConversionStatus {
    pub fn from_success(success: bool) -> Self {
        if success { Self::Ok } else { Self::Fail }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok)
    }
}

impl fmt::Display for ConversionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionStatus::Ok => f.write_str("OK"),
            ConversionStatus::Fail => f.write_str("FAIL"),
        }
    }
}

/// One conversion attempt. Never kept in memory by the provider; it is
/// rendered to a single stats line and handed to the sink.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRecord {
    pub timestamp: NaiveDateTime,
    pub amount: f64,
    pub source: CurrencyCode,
    pub target: CurrencyCode,
    pub result: f64,
    pub status: ConversionStatus,
}

impl ConversionRecord {
    /// A USD-sourced record.
    pub fn from_usd(
        timestamp: NaiveDateTime,
        amount: f64,
        target: CurrencyCode,
        result: f64,
        status: ConversionStatus,
    ) -> Self {
        Self {
            timestamp,
            amount,
            source: CurrencyCode::usd(),
            target,
            result,
            status,
        }
    }
}

/// `<YYYY-MM-DD HH:MM:SS> - Convert <amount> <source> to <target> => <result> (<OK|FAIL>)`
///
/// Amounts use `Debug` formatting so whole numbers keep their `.0`.
impl fmt::Display for ConversionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - Convert {:?} {} to {} => {:?} ({})",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.amount,
            self.source,
            self.target,
            self.result,
            self.status
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(14, 5, 7)
            .unwrap()
    }

    #[test]
    fn test_ok_line() {
        let record =
            ConversionRecord::from_usd(at(), 100.0, "EUR".into(), 90.0, ConversionStatus::Ok);
        assert_eq!(
            record.to_string(),
            "2024-03-09 14:05:07 - Convert 100.0 USD to EUR => 90.0 (OK)"
        );
    }

    #[test]
    fn test_fail_line() {
        let record =
            ConversionRecord::from_usd(at(), 12.5, "RUB".into(), 0.0, ConversionStatus::Fail);
        assert_eq!(
            record.to_string(),
            "2024-03-09 14:05:07 - Convert 12.5 USD to RUB => 0.0 (FAIL)"
        );
    }

    #[test]
    fn test_status_from_success() {
        assert!(ConversionStatus::from_success(true).is_ok());
        assert_eq!(ConversionStatus::from_success(false), ConversionStatus::Fail);
    }
}
