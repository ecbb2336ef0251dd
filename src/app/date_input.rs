//! Date entry widget rules.
//!
//! Dates are typed as `YYYY-MM-DD`. The widget only lets digits and dashes in and
//! stops at ten characters. It also owns the return date lower bound: a complete
//! return date earlier than the departure date is raised to the departure date, the
//! way a date picker with a minimum would refuse earlier days. Form validation does
//! not repeat this check.

use chrono::NaiveDate;

/// Format of a complete date.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

const MAX_DATE_LEN: usize = 10;

/// Returns `true` if `c` may be appended to `current`.
#[must_use]
pub fn accepts(current: &str, c: char) -> bool {
    (c.is_ascii_digit() || c == '-') && current.chars().count() < MAX_DATE_LEN
}

/// Parses a complete `YYYY-MM-DD` date. Partial input yields `None`.
#[must_use]
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    if value.len() != MAX_DATE_LEN {
        return None;
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

/// Applies the return date lower bound.
///
/// Returns the raised return date when both dates are complete and the return
/// date falls before the departure date, otherwise `None`.
///
/// # Example
///
/// ```rust
/// use skybook::app::date_input::clamp_return_date;
///
/// assert_eq!(
///     clamp_return_date("2025-01-05", "2025-01-10"),
///     Some("2025-01-10".to_string())
/// );
/// assert_eq!(clamp_return_date("2025-01-12", "2025-01-10"), None);
/// assert_eq!(clamp_return_date("2025-01", "2025-01-10"), None);
/// ```
#[must_use]
pub fn clamp_return_date(return_date: &str, departure_date: &str) -> Option<String> {
    let ret = parse_date(return_date)?;
    let departure = parse_date(departure_date)?;
    (ret < departure).then(|| departure.format(DATE_FORMAT).to_string())
}
