mod client;
pub mod decode;
mod errors;
mod query;
pub mod types;
mod user_agent;
pub use self::client::{Client, DEFAULT_BASE_URL, REQUEST_TIMEOUT};
pub use self::decode::parse_history;
pub use self::errors::Error;
pub use self::query::{Events, HistoryQuery, Interval, DEFAULT_SYMBOL, MAX_PERIOD2};
