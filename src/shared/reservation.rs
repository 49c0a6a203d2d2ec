/**
 * Reservation Data Structures
 *
 * Request payloads for creating and cancelling reservations, and the
 * normalized reservation detail returned by the backend.
 *
 * Incoming requests are validated locally and turned into trimmed outgoing
 * payloads; optional fields that are absent or blank are omitted entirely.
 */
use serde::{Deserialize, Serialize};

use crate::shared::calendar::DEFAULT_TIMEZONE;
use crate::shared::error::SharedError;
use crate::shared::validation::{check_email, check_name, non_blank, require};

/// Reservation form submission: `POST /local/reserve`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationRequest {
    pub spot_id: Option<String>,
    pub visitor_name: Option<String>,
    pub visitor_email: Option<String>,
    pub comment: Option<String>,
    pub timezone: Option<String>,
}

/// Body forwarded to `POST spots/reserve`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationPayload {
    pub spot_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visitor_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visitor_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

impl ReservationRequest {
    /// Validate and normalize into the upstream payload.
    ///
    /// Only `spotId` is required. Name and email are checked when present.
    pub fn validate(&self) -> Result<ReservationPayload, SharedError> {
        let spot_id = require("spotId", self.spot_id.as_deref())?;

        // A whitespace-only name counts as given (and too short)
        if let Some(name) = self.visitor_name.as_deref().filter(|n| !n.is_empty()) {
            check_name("visitorName", name)?;
        }
        let visitor_name = non_blank(self.visitor_name.as_deref());

        if let Some(email) = self.visitor_email.as_deref().filter(|e| !e.is_empty()) {
            check_email("visitorEmail", email)?;
        }
        let visitor_email = non_blank(self.visitor_email.as_deref());

        Ok(ReservationPayload {
            spot_id: spot_id.to_string(),
            visitor_name: visitor_name.map(str::to_string),
            visitor_email: visitor_email.map(str::to_string),
            comment: non_blank(self.comment.as_deref()).map(str::to_string),
            timezone: non_blank(self.timezone.as_deref()).map(str::to_string),
        })
    }
}

/// Cancellation request: `DELETE /local/reservation/delete/{id}`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CancelReservationRequest {
    pub reason: Option<String>,
}

/// Body forwarded to `DELETE reservation/delete/{id}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CancelReservationPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl CancelReservationRequest {
    pub fn normalize(&self) -> CancelReservationPayload {
        CancelReservationPayload {
            reason: non_blank(self.reason.as_deref()).map(str::to_string),
        }
    }
}

/// Query string of the reservation form page, as built by the calendar page
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReserveFormQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub location: Option<String>,
    pub timezone: Option<String>,
}

impl ReserveFormQuery {
    pub fn owner_timezone(&self) -> &str {
        non_blank(self.timezone.as_deref()).unwrap_or(DEFAULT_TIMEZONE)
    }
}

/// Reservation detail: `GET reservation/{id}`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReservationDetail {
    pub reservation: Reservation,
    #[serde(default)]
    pub spot: Option<SpotSummary>,
    #[serde(default)]
    pub calendar: Option<CalendarSummary>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub visitor: Option<Visitor>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub best_guess_start_date: Option<String>,
    #[serde(default)]
    pub best_guess_end_date: Option<String>,
    /// Calendar file link, relative to the API endpoint
    #[serde(default, rename = "icsURL")]
    pub ics_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Visitor {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpotSummary {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CalendarSummary {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl ReservationDetail {
    /// Absolute calendar-file link, when the backend supplied one
    pub fn absolute_ics_url(&self, api_endpoint: &str) -> Option<String> {
        let relative = non_blank(self.reservation.ics_url.as_deref())?;
        if relative.starts_with("http://") || relative.starts_with("https://") {
            return Some(relative.to_string());
        }
        Some(format!("{api_endpoint}{relative}"))
    }
}
