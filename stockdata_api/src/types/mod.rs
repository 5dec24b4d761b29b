mod quote;
pub use self::quote::DailyQuote;
