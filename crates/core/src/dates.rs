//! Day-resolution date parsing and expiry classification.
//!
//! All classification functions take `today` as a parameter instead of
//! reading the ambient clock, so callers (and tests) stay deterministic.
//! Unparseable input degrades to `None`/`false`/`"—"` on the display path;
//! it never errors.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Deserializer};

use crate::error::{DomainError, DomainResult};

/// Horizon used for "expiring soon" when callers do not override it.
pub const DEFAULT_NEAR_EXPIRY_HORIZON_DAYS: u32 = 30;

/// Placeholder shown for missing or unparseable dates.
pub const DISPLAY_PLACEHOLDER: &str = "—";

/// Parse a calendar day from the formats the backend actually sends:
/// an ISO prefix (`YYYY-MM-DD`, optionally followed by a time component)
/// or `DD/MM/YYYY`. Anything else, including shape-valid strings that are
/// not real calendar dates, yields `None`. No other formats are guessed.
pub fn parse_flexible(input: &str) -> Option<NaiveDate> {
    let s = input.trim();
    if s.is_empty() {
        return None;
    }
    if let Some(prefix) = s.get(..10) {
        if is_iso_shape(prefix) {
            return NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok();
        }
    }
    NaiveDate::parse_from_str(s, "%d/%m/%Y").ok()
}

/// `YYYY-MM-DD` shape check (digits and dashes only, no calendar check).
fn is_iso_shape(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// True iff the date's calendar day is strictly before `today`.
/// Missing dates are never expired.
pub fn is_expired(date: Option<NaiveDate>, today: NaiveDate) -> bool {
    date.is_some_and(|d| d < today)
}

/// True iff the date falls within `[today, today + horizon_days]`,
/// inclusive on both ends. Expired and missing dates are never "near".
pub fn is_near_expiry(date: Option<NaiveDate>, today: NaiveDate, horizon_days: u32) -> bool {
    let Some(d) = date else {
        return false;
    };
    if d < today {
        return false;
    }
    today
        .checked_add_days(Days::new(u64::from(horizon_days)))
        .is_some_and(|limit| d <= limit)
}

/// Locale display format (`DD/MM/YYYY`), or the em-dash placeholder for
/// missing dates.
pub fn format_display(date: Option<NaiveDate>) -> String {
    match date {
        Some(d) => d.format("%d/%m/%Y").to_string(),
        None => DISPLAY_PLACEHOLDER.to_owned(),
    }
}

/// Canonical `YYYY-MM-DD` for outgoing payloads.
///
/// A string already in ISO shape is returned untouched; other parseable
/// inputs are re-formatted; unparseable input becomes the empty string.
pub fn to_iso_date_safe(input: &str) -> String {
    let s = input.trim();
    if is_iso_shape(s) {
        return s.to_owned();
    }
    match parse_flexible(s) {
        Some(d) => d.format("%Y-%m-%d").to_string(),
        None => String::new(),
    }
}

/// Serde helper: deserialize an optional date leniently through
/// [`parse_flexible`]. `null`, absent and unparseable values become `None`.
pub fn deserialize_flexible<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_flexible))
}

/// Validate a from/to day pair. An empty side passes (presence is the
/// caller's concern, as is an unparseable value); an inverted range is a
/// validation error.
pub fn validate_range(from: &str, to: &str) -> DomainResult<()> {
    if from.trim().is_empty() || to.trim().is_empty() {
        return Ok(());
    }
    let (Some(d1), Some(d2)) = (parse_flexible(from), parse_flexible(to)) else {
        return Ok(());
    };
    if d1 <= d2 {
        Ok(())
    } else {
        Err(DomainError::validation(
            "start date cannot be after end date",
        ))
    }
}
