//! HTTP client for the historical-quotes CSV download.

use std::time::Duration;

use url::Url;

use crate::{
    decode::parse_history, query::HistoryQuery, types::DailyQuote, user_agent::get_user_agent,
    Error,
};

/// Production endpoint of the provider.
pub const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";

/// Request timeout applied unless the caller picks another one.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the provider's CSV download endpoint.
///
/// Cloning is cheap; clones share one connection pool.
#[derive(Clone, Debug)]
pub struct Client {
    http: reqwest::Client,
    /// Base URL for the provider. Defaults to [`DEFAULT_BASE_URL`].
    base_api_url: String,
}

impl Client {
    /// Creates a client pointing at the production provider.
    pub fn new() -> Result<Self, Error> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        Self::with_timeout(base_url, Some(REQUEST_TIMEOUT))
    }

    /// Creates a client with a custom base URL and request timeout.
    /// `None` leaves requests without a timeout.
    pub fn with_timeout(base_url: &str, timeout: Option<Duration>) -> Result<Self, Error> {
        let mut builder = reqwest::Client::builder().user_agent(get_user_agent());
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(|e| {
            tracing::error!("Failed to build HTTP client: {}", e);
            Error::RequestFailed
        })?;
        Ok(Self {
            http,
            base_api_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_api_url
    }

    fn get_url(&self, query: &HistoryQuery) -> Result<Url, Error> {
        let url = Url::parse(format!("{}{}", &self.base_api_url, query.path()).as_str())
            .map_err(|e| {
                tracing::error!("Invalid URL constructed: {}", e);
                Error::InvalidUrl(e.to_string())
            })?;
        Ok(query.add_to_url(&url))
    }

    /// Downloads the CSV history described by `query` and decodes it into
    /// one [`DailyQuote`] per data line, in upstream order.
    pub async fn get_history(&self, query: &HistoryQuery) -> Result<Vec<DailyQuote>, Error> {
        let url = self.get_url(query)?;
        tracing::debug!(symbol = %query.symbol, %url, "fetching history");

        let resp = self
            .http
            .get(url)
            .header("accept", "text/csv, text/plain, */*")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get history: {}", e);
                Error::RequestFailed
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        let quotes = parse_history(&body);
        let short_rows = quotes.iter().filter(|q| !q.is_complete()).count();
        tracing::debug!(symbol = %query.symbol, rows = quotes.len(), short_rows, "decoded history");
        Ok(quotes)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}
