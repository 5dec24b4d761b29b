//! Caller-facing error for the proxy route.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Body sent for every failed fetch.
pub const FETCH_ERROR_MESSAGE: &str = "Error fetching stock data";

/// Any failure while serving quotes.
///
/// The cause is logged but never sent to the caller: every variant renders
/// as the same 500 with [`FETCH_ERROR_MESSAGE`].
#[derive(thiserror::Error, Debug)]
pub enum ProxyError {
    #[error("upstream fetch failed: {0}")]
    Upstream(#[from] stockdata_api::Error),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        match &self {
            ProxyError::Upstream(stockdata_api::Error::HttpStatus { status, body }) => {
                tracing::error!(upstream_status = *status, body = %body, "{}", self);
            }
            ProxyError::Upstream(_) => tracing::error!("{}", self),
        }
        (StatusCode::INTERNAL_SERVER_ERROR, FETCH_ERROR_MESSAGE).into_response()
    }
}
