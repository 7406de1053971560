//! Lenient monetary normalization and COP display formatting.
//!
//! The inventory backend and older exports disagree on whether amounts are
//! JSON numbers or locale-formatted strings (`"$ 1.234,56"`, `es-CO`:
//! `.` thousands separator, `,` decimal separator). Everything monetary is
//! normalized to a canonical `f64` exactly once, at ingestion.
//!
//! Absent or malformed input degrades to `0.0` instead of erroring: these
//! are display-path values and a best-effort amount beats a blocked render.
//! Degradations are logged at debug level but never surfaced as errors.

use serde::{Deserialize, Deserializer, Serialize};

/// Monetary value as delivered by the transport layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawMoney {
    Number(f64),
    Text(String),
}

/// Normalize a raw monetary value to a canonical amount.
///
/// `None` and non-finite numbers become `0.0`; strings go through
/// [`normalize_str`].
pub fn normalize(input: Option<&RawMoney>) -> f64 {
    match input {
        None => 0.0,
        Some(RawMoney::Number(n)) => normalize_number(*n),
        Some(RawMoney::Text(s)) => normalize_str(s),
    }
}

/// Normalize an already-numeric amount, guarding non-finite values.
pub fn normalize_number(n: f64) -> f64 {
    if n.is_finite() {
        n
    } else {
        tracing::debug!(value = %n, "non-finite monetary value, using 0");
        0.0
    }
}

/// Parse a locale-formatted amount, e.g. `"$ 1.234,56"` -> `1234.56`.
///
/// Cleaning steps: keep only digits, `,`, `.` and `-`; drop thousands
/// separator periods; turn the decimal comma into a period. Anything that
/// still fails to parse yields `0.0`.
pub fn normalize_str(input: &str) -> f64 {
    let cleaned: String = input
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, ',' | '.' | '-'))
        .collect();
    let cleaned = cleaned.replace('.', "").replace(',', ".");

    match cleaned.parse::<f64>() {
        Ok(n) if n.is_finite() => n,
        _ => {
            tracing::debug!(input, "monetary string did not parse, using 0");
            0.0
        }
    }
}

/// Serde helper: deserialize a monetary field leniently. Numbers pass
/// through, strings are normalized, `null`/absent becomes `0.0`.
pub fn deserialize_lenient<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawMoney>::deserialize(deserializer)?;
    Ok(normalize(raw.as_ref()))
}

/// Format an amount as COP for display: no decimals, `.` thousands
/// separator (`es-CO` style), e.g. `1250000.0` -> `"$ 1.250.000"`.
///
/// Non-finite input renders as `"$ 0"`.
pub fn format_cop(amount: f64) -> String {
    let rounded = normalize_number(amount).round();
    let negative = rounded < 0.0;
    let digits = format!("{}", rounded.abs() as u64);
    let grouped = group_thousands(&digits);
    if negative {
        format!("-$ {grouped}")
    } else {
        format!("$ {grouped}")
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}
