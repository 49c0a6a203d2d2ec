/**
 * Calendar Access Payloads
 *
 * Requests that deal with reaching a calendar: re-authorizing access to a
 * restricted calendar, verifying an emailed access token, and asking the
 * backend to resend forgotten calendar links.
 */
use serde::{Deserialize, Serialize};

use crate::shared::error::SharedError;
use crate::shared::validation::{check_email, require};

/// Query string of the calendar page: `GET /{slug}?token=...`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CalendarQuery {
    pub token: Option<String>,
}

impl CalendarQuery {
    /// The presented access token, ignoring empty `?token=`
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref().map(str::trim).filter(|t| !t.is_empty())
    }
}

/// Body forwarded to `POST calendar/{slug}/verify-token`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerifyTokenPayload<'a> {
    pub token: &'a str,
}

/// Access re-authorization form: `POST /local/calendar/validate-access`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ValidateAccessRequest {
    #[serde(rename = "visitorEmail")]
    pub visitor_email: Option<String>,
    #[serde(rename = "calendarURL")]
    pub calendar_url: Option<String>,
}

/// Body forwarded to `POST calendar/validate-access`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidateAccessPayload {
    #[serde(rename = "visitorEmail")]
    pub visitor_email: String,
    #[serde(rename = "calendarURL")]
    pub calendar_url: String,
}

impl ValidateAccessRequest {
    pub fn validate(&self) -> Result<ValidateAccessPayload, SharedError> {
        let visitor_email = require("visitorEmail", self.visitor_email.as_deref())?;
        check_email("visitorEmail", self.visitor_email.as_deref().unwrap_or_default())?;
        let calendar_url = require("calendarURL", self.calendar_url.as_deref())?;
        check_slug("calendarURL", calendar_url)?;
        Ok(ValidateAccessPayload {
            visitor_email: visitor_email.to_string(),
            calendar_url: calendar_url.to_string(),
        })
    }
}

/// Forgotten calendar link form: `POST /local/calendar/forgotten`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ForgottenCalendarRequest {
    #[serde(rename = "visitorEmail")]
    pub visitor_email: Option<String>,
}

/// Body forwarded to `POST calendar/forgotten`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForgottenCalendarPayload {
    #[serde(rename = "visitorEmail")]
    pub visitor_email: String,
}

impl ForgottenCalendarRequest {
    pub fn validate(&self) -> Result<ForgottenCalendarPayload, SharedError> {
        let visitor_email = require("visitorEmail", self.visitor_email.as_deref())?;
        check_email("visitorEmail", self.visitor_email.as_deref().unwrap_or_default())?;
        Ok(ForgottenCalendarPayload {
            visitor_email: visitor_email.to_string(),
        })
    }
}

/// Whether `slug` can be a calendar slug: a single path segment of URL
/// unreserved characters, other than `.` and `..`
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug.len() <= 128
        && slug != "."
        && slug != ".."
        && slug
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '~'))
}

fn check_slug(field: &str, slug: &str) -> Result<(), SharedError> {
    if is_valid_slug(slug) {
        Ok(())
    } else {
        Err(SharedError::validation(
            field,
            format!("{field} must be a valid calendar URL"),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_token_is_absent() {
        let query = CalendarQuery { token: Some("  ".into()) };
        assert!(query.token().is_none());
        let query = CalendarQuery { token: Some("abc".into()) };
        assert_eq!(query.token(), Some("abc"));
    }

    #[test]
    fn test_validate_access() {
        let request: ValidateAccessRequest =
            serde_json::from_value(json!({"visitorEmail": "a@b.com", "calendarURL": "pool-a "}))
                .unwrap();
        let payload = request.validate().unwrap();
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({"visitorEmail": "a@b.com", "calendarURL": "pool-a"})
        );
    }

    #[test]
    fn test_validate_access_rejects_bad_slug() {
        let request = ValidateAccessRequest {
            visitor_email: Some("a@b.com".into()),
            calendar_url: Some("../admin".into()),
        };
        let err = request.validate().unwrap_err();
        assert_eq!(err.public_message(), "calendarURL must be a valid calendar URL");
    }

    #[test]
    fn test_forgotten_requires_email() {
        let err = ForgottenCalendarRequest::default().validate().unwrap_err();
        assert_eq!(err.public_message(), "visitorEmail is required");

        let err = ForgottenCalendarRequest { visitor_email: Some("nope".into()) }
            .validate()
            .unwrap_err();
        assert_eq!(err.public_message(), "visitorEmail must be a valid email format");
    }

    #[test]
    fn test_slug_charset() {
        assert!(is_valid_slug("pool-a"));
        assert!(is_valid_slug("Studio_2"));
        assert!(is_valid_slug("anna.smith"));
        assert!(is_valid_slug("~pool"));
        assert!(!is_valid_slug("."));
        assert!(!is_valid_slug(".."));
        assert!(!is_valid_slug("a/b"));
        assert!(!is_valid_slug(""));
        assert!(!is_valid_slug("a b"));
        assert!(!is_valid_slug("a;b"));
    }
}
