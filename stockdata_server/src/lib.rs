//! HTTP proxy that serves a provider's historical quotes as JSON.
//!
//! One route, `GET /nvidia-stock`, downloads the configured instrument's CSV
//! history on every call and answers with the decoded rows. All wiring lives
//! in [`routes::app`]; the binary only parses configuration and serves.

pub mod config;
pub mod error;
pub mod logging;
pub mod routes;

pub use config::Config;
pub use error::ProxyError;
pub use logging::{env_filter, DEFAULT_LOG_FILTER};
pub use routes::{app, AppState, STOCK_ROUTE};
