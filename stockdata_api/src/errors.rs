//! Error types for the upstream client.

/// Errors that can occur when fetching historical quotes.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The request could not be completed (network error, timeout, or unreadable body).
    #[error("Request failed")]
    RequestFailed,
    /// The provider returned a non-success status with a body snippet.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The base URL and query did not form a valid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}
