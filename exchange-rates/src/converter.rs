//! Single-currency converter.

use std::time::Duration;

use rates_types::CurrencyCode;

use crate::policy::{DEFAULT_MAX_RETRIES, DEFAULT_RETRY_DELAY, RetryPolicy};
use crate::provider::{RateProvider, UsdConversion};

/// Converts USD amounts into one fixed target currency.
///
/// Holds no state of its own beyond the target code; all caching and
/// logging happens in the provider it is bound to.
pub struct Converter<P: UsdConversion = RateProvider> {
    provider: P,
    target: CurrencyCode,
}

impl Converter<RateProvider> {
    /// Converter backed by the public rate API with the default retry policy.
    pub fn new(target: impl Into<CurrencyCode>) -> Self {
        Self::with_retry(target, DEFAULT_MAX_RETRIES, DEFAULT_RETRY_DELAY)
    }

    /// Converter backed by the public rate API with a custom retry policy.
    pub fn with_retry(
        target: impl Into<CurrencyCode>,
        max_retries: u32,
        retry_delay: Duration,
    ) -> Self {
        Self::with_provider(
            RateProvider::http(RetryPolicy::new(max_retries, retry_delay)),
            target,
        )
    }
}

impl<P: UsdConversion> Converter<P> {
    /// Binds an existing provider to `target`.
    pub fn with_provider(provider: P, target: impl Into<CurrencyCode>) -> Self {
        Self {
            provider,
            target: target.into(),
        }
    }

    /// Converts `amount` USD into the target currency.
    pub async fn convert(&self, amount: f64) -> f64 {
        self.provider
            .convert_from_usd(amount, self.target.as_str())
            .await
    }

    pub fn target(&self) -> &CurrencyCode {
        &self.target
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }
}
