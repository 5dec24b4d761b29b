//! Parameter enums shared by history queries.

use std::str::FromStr;

/// Bar width requested from the provider.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Interval {
    /// One row per trading day. This is the default.
    #[default]
    Daily,
    /// One row per week.
    Weekly,
    /// One row per month.
    Monthly,
}

impl FromStr for Interval {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1d" => Ok(Interval::Daily),
            "1wk" => Ok(Interval::Weekly),
            "1mo" => Ok(Interval::Monthly),
            _ => Err(format!("unknown interval '{}' (expected 1d, 1wk or 1mo)", s)),
        }
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Interval::Daily => "1d",
                Interval::Weekly => "1wk",
                Interval::Monthly => "1mo",
            }
        )
    }
}

/// Which event series the download contains.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Events {
    /// Price history. This is the default.
    #[default]
    History,
    /// Dividend payments.
    Dividends,
    /// Stock splits.
    Splits,
}

impl FromStr for Events {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "history" => Ok(Events::History),
            "div" => Ok(Events::Dividends),
            "split" => Ok(Events::Splits),
            _ => Err(format!("unknown events '{}' (expected history, div or split)", s)),
        }
    }
}

impl std::fmt::Display for Events {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Events::History => "history",
                Events::Dividends => "div",
                Events::Splits => "split",
            }
        )
    }
}
