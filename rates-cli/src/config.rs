//! Configuration loading from environment.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use exchange_rates::{DEFAULT_MAX_RETRIES, DEFAULT_STATS_PATH, RetryPolicy};

/// CLI configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub stats_path: PathBuf,
    pub max_retries: u32,
    pub retry_delay: Duration,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let stats_path: PathBuf = lookup("RATES_STATS_PATH")
            .unwrap_or_else(|| DEFAULT_STATS_PATH.to_string())
            .into();

        let max_retries = match lookup("RATES_MAX_RETRIES") {
            Some(raw) => raw.trim().parse().map_err(|_| {
                anyhow::anyhow!("RATES_MAX_RETRIES must be a whole number, got {:?}", raw)
            })?,
            None => DEFAULT_MAX_RETRIES,
        };

        let retry_delay = match lookup("RATES_RETRY_DELAY_SECS") {
            Some(raw) => parse_delay(&raw)
                .map_err(|e| anyhow::anyhow!("RATES_RETRY_DELAY_SECS: {}", e))?,
            None => exchange_rates::DEFAULT_RETRY_DELAY,
        };

        Ok(Self {
            stats_path,
            max_retries,
            retry_delay,
        })
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(self.max_retries, self.retry_delay)
    }
}

/// Parses a non-negative number of seconds, fractions allowed.
pub fn parse_delay(raw: &str) -> anyhow::Result<Duration> {
    let secs: f64 = raw
        .trim()
        .parse()
        .map_err(|_| anyhow::anyhow!("expected seconds, got {:?}", raw))?;
    Duration::try_from_secs_f64(secs)
        .map_err(|e| anyhow::anyhow!("invalid delay {:?}: {}", raw, e))
}
