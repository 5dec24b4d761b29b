use serde::{Deserialize, Serialize};

/// One trading day's price summary, as one row of the provider's CSV download.
///
/// Every field is the raw token from the upstream row. Nothing is parsed,
/// trimmed, or rounded. Fields missing from a short row are `None` and are
/// left out of the serialized object.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DailyQuote {
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub low: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub close: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adj_close: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<String>,
}

impl DailyQuote {
    /// Assigns the comma-separated tokens of `line` positionally:
    /// date, open, high, low, close, adjusted close, volume.
    ///
    /// Quoted fields are not recognised, so an embedded comma shifts every
    /// following column. Tokens past the seventh are dropped.
    pub fn from_line(line: &str) -> Self {
        let mut tokens = line.split(',').map(str::to_string);
        Self {
            date: tokens.next().unwrap_or_default(),
            open: tokens.next(),
            high: tokens.next(),
            low: tokens.next(),
            close: tokens.next(),
            adj_close: tokens.next(),
            volume: tokens.next(),
        }
    }

    /// True when the row carried all seven columns.
    pub fn is_complete(&self) -> bool {
        self.volume.is_some()
    }
}
