//! Quote sources.
//!
//! [`QuoteProvider`] is the seam between the display controller and the
//! network. [`TwelveDataClient`] implements it with one HTTP request per
//! fetch against the Twelve Data `/quote` endpoint.

use std::future::Future;
use std::time::Duration;

use tracing::debug;

use crate::Result;
use crate::config::QuoteConfig;
use crate::models::quote::parse_quote_response;
use crate::models::{PriceSnapshot, Symbol};

/// User agent sent with every outbound request.
pub const USER_AGENT: &str = concat!("tickertape/", env!("CARGO_PKG_VERSION"));

/// Returns the latest price for each requested symbol.
pub trait QuoteProvider {
    /// Fetches one snapshot covering `symbols`.
    ///
    /// Symbols the source has no usable price for are absent from the
    /// snapshot; only whole-request failures are errors.
    fn fetch_quotes(&self, symbols: &[Symbol]) -> impl Future<Output = Result<PriceSnapshot>>;
}

/// Builds the shared HTTP client with a bounded request timeout.
///
/// # Errors
///
/// Returns [`TickertapeError::Http`](crate::TickertapeError::Http) if the
/// TLS backend cannot be initialized.
pub fn build_http_client(timeout: Duration) -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()?;
    Ok(client)
}

/// Twelve Data REST quote client.
#[derive(Clone)]
pub struct TwelveDataClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl TwelveDataClient {
    pub fn new(http: reqwest::Client, config: &QuoteConfig) -> Self {
        Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        }
    }

    fn quote_url(&self) -> String {
        format!("{}/quote", self.base_url)
    }
}

impl QuoteProvider for TwelveDataClient {
    async fn fetch_quotes(&self, symbols: &[Symbol]) -> Result<PriceSnapshot> {
        let joined = symbols
            .iter()
            .map(Symbol::as_str)
            .collect::<Vec<_>>()
            .join(",");

        let response = self
            .http
            .get(self.quote_url())
            .query(&[("symbol", joined.as_str()), ("apikey", self.api_key.as_str())])
            .send()
            .await?;

        let response = response.error_for_status()?;
        let body: serde_json::Value = response.json().await?;

        let snapshot = parse_quote_response(&body, symbols)?;
        debug!(
            requested = symbols.len(),
            priced = snapshot.len(),
            "Fetched quotes"
        );
        Ok(snapshot)
    }
}

impl std::fmt::Debug for TwelveDataClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TwelveDataClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}
