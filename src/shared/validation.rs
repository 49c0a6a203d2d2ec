/**
 * Field Validation
 *
 * Checks applied to visitor-supplied form fields before anything is
 * forwarded upstream. Every check returns a `SharedError::ValidationError`
 * whose message is the exact text relayed to the client.
 */
use std::sync::LazyLock;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, TimeZone, Utc};
use regex::Regex;

use crate::shared::error::SharedError;

/// Minimum visitor name length after trimming
pub const MIN_NAME_LENGTH: usize = 2;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    // something@something.tld
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid")
});

/// Returns the trimmed value when it is present and not blank
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Require a non-blank field, returning its trimmed value
pub fn require<'a>(field: &str, value: Option<&'a str>) -> Result<&'a str, SharedError> {
    non_blank(value).ok_or_else(|| SharedError::required(field))
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Validate an email field as submitted. Surrounding whitespace fails the
/// format check; it is only trimmed from the forwarded value.
pub fn check_email(field: &str, email: &str) -> Result<(), SharedError> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(SharedError::validation(
            field,
            format!("{field} must be a valid email format"),
        ))
    }
}

/// Validate a visitor name field (length counted in characters, after trimming)
pub fn check_name(field: &str, name: &str) -> Result<(), SharedError> {
    if name.trim().chars().count() >= MIN_NAME_LENGTH {
        Ok(())
    } else {
        Err(SharedError::validation(
            field,
            format!("{field} must be at least {MIN_NAME_LENGTH} characters long"),
        ))
    }
}

/// Parse a date field
///
/// Accepts RFC 3339 timestamps and plain `YYYY-MM-DD` dates (midnight UTC).
pub fn parse_date(field: &str, value: &str) -> Result<DateTime<FixedOffset>, SharedError> {
    let value = value.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed);
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|date| {
            Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN))
                .fixed_offset()
        })
        .map_err(|_| SharedError::validation(field, format!("{field} must be a valid date")))
}
