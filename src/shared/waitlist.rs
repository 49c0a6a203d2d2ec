/**
 * Waitlist Data Structures
 *
 * A visitor joins a calendar's waitlist when no suitable spot is free. The
 * optional date window tells the calendar owner when the visitor would like
 * to come.
 */
use serde::{Deserialize, Serialize};

use crate::shared::error::SharedError;
use crate::shared::validation::{check_email, check_name, non_blank, parse_date, require};

/// Waitlist form submission: `POST /local/waitlist/join`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WaitlistRequest {
    #[serde(rename = "calendarURL")]
    pub calendar_url: Option<String>,
    pub visitor_email: Option<String>,
    pub visitor_name: Option<String>,
    pub timezone: Option<String>,
    pub spot_id: Option<String>,
    pub comment: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// Body forwarded to `POST waitlist/join`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WaitlistPayload {
    #[serde(rename = "calendarURL")]
    pub calendar_url: String,
    pub visitor_email: String,
    pub visitor_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spot_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

impl WaitlistRequest {
    pub fn validate(&self) -> Result<WaitlistPayload, SharedError> {
        let calendar_url = require("calendarURL", self.calendar_url.as_deref())?;
        let visitor_email = require("visitorEmail", self.visitor_email.as_deref())?;
        check_email("visitorEmail", self.visitor_email.as_deref().unwrap_or_default())?;
        let visitor_name = require("visitorName", self.visitor_name.as_deref())?;
        check_name("visitorName", visitor_name)?;

        let start_date = non_blank(self.start_date.as_deref());
        let end_date = non_blank(self.end_date.as_deref());
        let start = start_date.map(|d| parse_date("startDate", d)).transpose()?;
        let end = end_date.map(|d| parse_date("endDate", d)).transpose()?;
        if let (Some(start), Some(end)) = (start, end) {
            if end < start {
                return Err(SharedError::validation(
                    "endDate",
                    "endDate must not be before startDate",
                ));
            }
        }

        Ok(WaitlistPayload {
            calendar_url: calendar_url.to_string(),
            visitor_email: visitor_email.to_string(),
            visitor_name: visitor_name.to_string(),
            timezone: non_blank(self.timezone.as_deref()).map(str::to_string),
            spot_id: non_blank(self.spot_id.as_deref()).map(str::to_string),
            comment: non_blank(self.comment.as_deref()).map(str::to_string),
            start_date: start_date.map(str::to_string),
            end_date: end_date.map(str::to_string),
        })
    }
}
