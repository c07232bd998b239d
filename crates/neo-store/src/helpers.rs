//! Conversions between NASA's text encodings and Rust values.
//!
//! NASA's close-approach data stores timestamps as naive UTC datetimes in the
//! form `2020-Dec-31 12:00` (English month abbreviations). Output uses ISO
//! `YYYY-MM-DD HH:MM` instead, so month names never need interpreting.

use chrono::NaiveDateTime;

use crate::error::{Result, StoreError};

const NASA_FORMAT: &str = "%Y-%b-%d %H:%M";
const OUTPUT_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Parses a NASA calendar date such as `2020-Dec-31 12:00`.
pub fn cd_to_datetime(calendar_date: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(calendar_date.trim(), NASA_FORMAT).map_err(|source| {
        StoreError::InvalidDate {
            input: calendar_date.to_string(),
            source,
        }
    })
}

/// Formats a datetime as `YYYY-MM-DD HH:MM`, without seconds.
pub fn datetime_to_str(dt: &NaiveDateTime) -> String {
    dt.format(OUTPUT_FORMAT).to_string()
}

/// Interprets an empty or missing string as "no value".
pub fn optional_string(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Parses an optional measurement; empty, missing or unparsable is `NaN`.
pub fn optional_float(raw: Option<&str>) -> f64 {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse().ok())
        .unwrap_or(f64::NAN)
}

/// Parses the `pha` (potentially hazardous asteroid) flag.
///
/// `Y` is hazardous; `N`, empty and missing are not. Anything else is
/// rejected.
pub fn hazard_flag(raw: Option<&str>) -> std::result::Result<bool, String> {
    match raw.map(str::trim) {
        Some("Y") => Ok(true),
        Some("N") | Some("") | None => Ok(false),
        Some(other) => Err(format!("unrecognized hazard flag '{other}'")),
    }
}

/// Formats a measurement for text output, writing `nan` when it is unknown.
pub fn float_to_str(value: f64) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else {
        value.to_string()
    }
}
