//! Decoder for the provider's CSV download body.
//!
//! The body is a header line followed by one line per trading day. Lines are
//! split on `\n` and columns on `,` with no quoting rules, matching what the
//! provider actually sends.

use crate::types::DailyQuote;

/// Turns a CSV download body into one [`DailyQuote`] per data line.
///
/// The first line is skipped without looking at it. Blank lines in the middle
/// come out as a quote with an empty date. A newline at the very end of the
/// body is deliberately not treated as one: N data lines always give N quotes,
/// even though a plain split would emit an extra empty-date row there.
pub fn parse_history(body: &str) -> Vec<DailyQuote> {
    let body = body.strip_suffix('\n').unwrap_or(body);
    body.split('\n')
        .skip(1)
        .map(DailyQuote::from_line)
        .collect()
}
