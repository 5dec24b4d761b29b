//! Query builder for the historical-quotes CSV download.

use url::Url;

use super::common::{Events, Interval};

/// Default instrument.
pub const DEFAULT_SYMBOL: &str = "NVDA";
/// Upper Unix timestamp bound that covers the whole available history.
pub const MAX_PERIOD2: i64 = 9_999_999_999;

/// Instrument and time range for one CSV download.
///
/// The default asks for the full daily price history of NVDA.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryQuery {
    /// Ticker symbol, placed in the URL path.
    pub symbol: String,
    /// Lower bound as a Unix timestamp (seconds).
    pub period1: i64,
    /// Upper bound as a Unix timestamp (seconds).
    pub period2: i64,
    pub interval: Interval,
    pub events: Events,
}

impl Default for HistoryQuery {
    fn default() -> HistoryQuery {
        HistoryQuery {
            symbol: DEFAULT_SYMBOL.to_string(),
            period1: 0,
            period2: MAX_PERIOD2,
            interval: Interval::Daily,
            events: Events::History,
        }
    }
}

impl HistoryQuery {
    pub fn with_symbol(mut self, symbol: &str) -> Self {
        self.symbol = symbol.to_string();
        self
    }

    pub fn with_period1(mut self, period1: i64) -> Self {
        self.period1 = period1;
        self
    }

    pub fn with_period2(mut self, period2: i64) -> Self {
        self.period2 = period2;
        self
    }

    pub fn with_interval(mut self, interval: Interval) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_events(mut self, events: Events) -> Self {
        self.events = events;
        self
    }

    /// Path of the download resource for this symbol.
    pub fn path(&self) -> String {
        format!("/v7/finance/download/{}", self.symbol)
    }

    /// Appends the range, interval, and events parameters to the URL.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("period1", &self.period1.to_string())
            .append_pair("period2", &self.period2.to_string())
            .append_pair("interval", &self.interval.to_string())
            .append_pair("events", &self.events.to_string());
        url
    }
}
