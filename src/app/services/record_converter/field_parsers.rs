//! Field parsing utilities for HealthKit records
//!
//! This module provides strict parsing helpers for the textual fields of a
//! Record element. Parsing is all-or-nothing: the entire input string must
//! match, with no fallback formats, partial parses or locale handling.

use crate::constants::{SOURCE_TAG_PREFIX, TIMESTAMP_FORMAT};
use crate::{Error, Result};
use chrono::{DateTime, Utc};

/// Parse an export timestamp into milliseconds since the Unix epoch
///
/// The input must match `YYYY-MM-DD HH:MM:SS ±HHMM` exactly. The result is
/// truncated to millisecond resolution.
pub fn parse_epoch_ms(text: &str) -> Result<i64> {
    let parsed = DateTime::parse_from_str(text, TIMESTAMP_FORMAT)
        .map_err(|e| Error::datetime_parsing(format!("Failed to parse date '{}'", text), e))?;
    Ok(parsed.timestamp_millis())
}

/// Format an epoch-millisecond timestamp in the export format (UTC)
///
/// Returns `None` for timestamps outside chrono's representable range.
/// Counterpart of [`parse_epoch_ms`] for diagnostics and round-trip tests;
/// the export itself is never rewritten.
pub fn format_epoch_ms(ms: i64) -> Option<String> {
    DateTime::<Utc>::from_timestamp_millis(ms).map(|dt| dt.format(TIMESTAMP_FORMAT).to_string())
}

/// Strictly parse a string as one base-10 integer
pub fn parse_i64_strict(text: &str) -> Result<i64> {
    text.parse::<i64>()
        .map_err(|_| Error::numeric_parsing(format!("Cannot convert string to integer: `{}`", text)))
}

/// Strictly parse a string as one floating-point value
pub fn parse_f64_strict(text: &str) -> Result<f64> {
    text.parse::<f64>()
        .map_err(|_| Error::numeric_parsing(format!("Cannot convert string to double: `{}`", text)))
}

/// Camel-case a device name: split on non-alphanumeric separators, keep the
/// first word as written, uppercase the first letter of every later word
///
/// `"iPhone"` stays `"iPhone"`; `"my phone"` becomes `"myPhone"`.
pub fn to_camel_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut first_word = true;

    for word in text
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
    {
        if first_word {
            result.push_str(word);
            first_word = false;
        } else {
            let mut chars = word.chars();
            if let Some(first) = chars.next() {
                result.extend(first.to_uppercase());
                result.push_str(chars.as_str());
            }
        }
    }

    result
}

/// Build the namespaced source tag for a measurement,
/// e.g. `"HealthKit:iPhone"`
pub fn source_tag(source_name: &str) -> String {
    format!("{}{}", SOURCE_TAG_PREFIX, to_camel_case(source_name))
}
