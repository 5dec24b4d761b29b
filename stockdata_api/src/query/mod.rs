mod common;
pub use self::common::{Events, Interval};

mod history;
pub use self::history::{HistoryQuery, DEFAULT_SYMBOL, MAX_PERIOD2};
