//! Small parsing helpers shared by the view engine and UI.

use chrono::{Local, NaiveDate};

/// Parse a quantity string numerically.
///
/// Inputs: `raw` quantity text as entered by the user.
///
/// Output: Parsed value; empty or non-numeric input yields 0. Matches the
/// sorting and stock-level contract, which never rejects bad input.
#[must_use]
pub fn parse_quantity(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(0.0)
}

/// Parse an ISO (`YYYY-MM-DD`) expiry string.
///
/// Output: `Some(date)` when well-formed; `None` for empty or malformed
/// input.
#[must_use]
pub fn parse_expiry(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// Expiry date for ordering purposes.
///
/// Items without a parseable expiry sort as if dated far in the future, so
/// they land after everything with a real date.
#[must_use]
pub fn expiry_or_far_future(raw: &str) -> NaiveDate {
    parse_expiry(raw).unwrap_or(NaiveDate::MAX)
}

/// Today's date in local time, used for expiry classification.
#[must_use]
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
