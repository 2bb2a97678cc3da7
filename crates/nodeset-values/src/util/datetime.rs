//! Node-set timestamp parsing and formatting.
//!
//! Timestamps are read at second precision as `YYYY-MM-DDTHH:MM:SS`.
//! Fractional seconds and trailing zone designators such as `Z` are cut off
//! before parsing. A numeric offset like `+02:00` is not stripped and fails.

use chrono::{NaiveDateTime, Timelike, Utc};

/// chrono format string for node-set timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Error type for timestamp parsing failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateTimeParseError {
    pub message: String,
}

impl std::fmt::Display for DateTimeParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for DateTimeParseError {}

/// Cuts timestamp text down to the part that is parsed.
///
/// Drops everything from the first `.`, then any trailing non-digit
/// characters.
pub fn normalize_timestamp(text: &str) -> &str {
    let text = text.trim();
    let text = match text.find('.') {
        Some(dot) => &text[..dot],
        None => text,
    };
    text.trim_end_matches(|c: char| !c.is_ascii_digit())
}

/// Parses a node-set timestamp.
pub fn parse_timestamp(text: &str) -> Result<NaiveDateTime, DateTimeParseError> {
    let normalized = normalize_timestamp(text);
    if normalized.is_empty() {
        return Err(DateTimeParseError {
            message: format!("Empty timestamp: {:?}", text),
        });
    }
    NaiveDateTime::parse_from_str(normalized, TIMESTAMP_FORMAT).map_err(|e| DateTimeParseError {
        message: format!("Invalid timestamp {:?}: {}", text, e),
    })
}

/// Formats a timestamp as `YYYY-MM-DDTHH:MM:SS`.
pub fn format_timestamp(dt: &NaiveDateTime) -> String {
    dt.format(TIMESTAMP_FORMAT).to_string()
}

/// Current UTC wall-clock time truncated to whole seconds.
pub fn now_seconds() -> NaiveDateTime {
    let now = Utc::now().naive_utc();
    now.with_nanosecond(0).unwrap_or(now)
}
