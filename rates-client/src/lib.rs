//! # Rates Client
//!
//! HTTP implementation of the `RateSource` port against the public
//! exchangerate-api.com `latest/USD` endpoint.

use std::time::Duration;

use async_trait::async_trait;
use rates_types::{FetchError, LatestRatesResponse, RateSource, RateTable};
use reqwest::Client;

/// Endpoint serving USD-based rates.
pub const DEFAULT_API_URL: &str = "https://api.exchangerate-api.com/v4/latest/USD";

/// Per-request timeout for a single fetch attempt.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Fetches the rate table over HTTP. One `fetch_rates` call is one GET.
#[derive(Debug, Clone)]
pub struct HttpRateSource {
    url: String,
    timeout: Duration,
    http: Client,
}

impl HttpRateSource {
    /// Creates a source pointed at the public rate API.
    pub fn new() -> Self {
        Self::with_url(DEFAULT_API_URL)
    }

    /// Creates a source pointed at another server speaking the same format.
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: REQUEST_TIMEOUT,
            http: Client::new(),
        }
    }

    #[cfg(test)]
    fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn get_latest(&self) -> Result<LatestRatesResponse, FetchError> {
        let resp = self
            .http
            .get(&self.url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(classify)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = resp.text().await.map_err(classify)?;
        serde_json::from_str(&body).map_err(|e| FetchError::Malformed(e.to_string()))
    }
}

impl Default for HttpRateSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RateSource for HttpRateSource {
    async fn fetch_rates(&self) -> Result<RateTable, FetchError> {
        let latest = self.get_latest().await?;
        tracing::debug!(
            url = %self.url,
            base = ?latest.base,
            date = ?latest.date,
            "Received rate response"
        );
        latest.into_table()
    }
}

fn classify(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        FetchError::Timeout(err.to_string())
    } else {
        FetchError::Transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::{Router, http::StatusCode, routing::get};

    /// Serves `app` on an ephemeral local port and returns its `/latest` URL.
    async fn serve(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}/latest", addr)
    }

    #[test]
    fn test_default_url() {
        let source = HttpRateSource::new();
        assert_eq!(source.url(), DEFAULT_API_URL);
        assert_eq!(source.timeout, REQUEST_TIMEOUT);
    }

    #[tokio::test]
    async fn test_fetch_parses_rates() {
        let app = Router::new().route(
            "/latest",
            get(|| async { r#"{"base":"USD","date":"2024-03-09","rates":{"EUR":0.9,"RUB":91.5}}"# }),
        );
        let source = HttpRateSource::with_url(serve(app).await);

        let table = source.fetch_rates().await.unwrap();
        assert_eq!(table.get("EUR"), Some(0.9));
        assert_eq!(table.get("RUB"), Some(91.5));
    }

    #[tokio::test]
    async fn test_error_status_is_a_failure() {
        let app = Router::new().route(
            "/latest",
            get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "down") }),
        );
        let source = HttpRateSource::with_url(serve(app).await);

        let err = source.fetch_rates().await.unwrap_err();
        assert!(matches!(err, FetchError::Status { status: 503 }));
    }

    #[tokio::test]
    async fn test_invalid_json_is_malformed() {
        let app = Router::new().route("/latest", get(|| async { "<html>oops</html>" }));
        let source = HttpRateSource::with_url(serve(app).await);

        let err = source.fetch_rates().await.unwrap_err();
        assert!(matches!(err, FetchError::Malformed(_)));
    }

    #[tokio::test]
    async fn test_missing_rates_field() {
        let app = Router::new().route("/latest", get(|| async { r#"{"base":"USD"}"# }));
        let source = HttpRateSource::with_url(serve(app).await);

        let err = source.fetch_rates().await.unwrap_err();
        assert!(matches!(err, FetchError::MissingRates));
    }

    #[tokio::test]
    async fn test_slow_server_times_out() {
        let app = Router::new().route(
            "/latest",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(2)).await;
                r#"{"rates":{}}"#
            }),
        );
        let source =
            HttpRateSource::with_url(serve(app).await).with_timeout(Duration::from_millis(50));

        let err = source.fetch_rates().await.unwrap_err();
        assert!(matches!(err, FetchError::Timeout(_)));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transport_error() {
        // Bind then drop to get a port nobody listens on.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let source = HttpRateSource::with_url(format!("http://{}/latest", addr));
        let err = source.fetch_rates().await.unwrap_err();
        assert!(matches!(err, FetchError::Transport(_)));
    }
}
