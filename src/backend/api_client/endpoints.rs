/**
 * Backend Endpoints
 *
 * One method per upstream operation. Paths are relative to the configured
 * version prefix.
 *
 * | Operation | Method | Path |
 * |---|---|---|
 * | calendar lookup | GET | `calendar/{slug}` |
 * | token verification | POST | `calendar/{slug}/verify-token` |
 * | access validation | POST | `calendar/validate-access` |
 * | forgotten calendar link | POST | `calendar/forgotten` |
 * | reservation create | POST | `spots/reserve` |
 * | reservation delete | DELETE | `reservation/delete/{id}` |
 * | reservation lookup | GET | `reservation/{id}` |
 * | waitlist join | POST | `waitlist/join` |
 */
use crate::backend::api_client::client::{ApiClient, ApiResponse};
use crate::backend::api_client::error::ApiError;
use crate::shared::access::{ForgottenCalendarPayload, ValidateAccessPayload, VerifyTokenPayload};
use crate::shared::calendar::CalendarResponse;
use crate::shared::reservation::{CancelReservationPayload, ReservationDetail, ReservationPayload};
use crate::shared::waitlist::WaitlistPayload;

impl ApiClient {
    /// Fetch a calendar snapshot by slug
    pub async fn fetch_calendar(&self, slug: &str) -> Result<CalendarResponse, ApiError> {
        let response = self.get(&["calendar", slug]).await?;
        serde_json::from_value(response.into_body()).map_err(|e| {
            tracing::error!("Calendar '{}' has an unexpected shape: {}", slug, e);
            ApiError::unavailable(format!("malformed calendar response: {e}"))
        })
    }

    /// Ask the backend whether `token` grants access to calendar `slug`
    pub async fn verify_access_token(&self, slug: &str, token: &str) -> Result<ApiResponse, ApiError> {
        self.post(&["calendar", slug, "verify-token"], &VerifyTokenPayload { token })
            .await
    }

    pub async fn validate_access(
        &self,
        payload: &ValidateAccessPayload,
    ) -> Result<ApiResponse, ApiError> {
        self.post(&["calendar", "validate-access"], payload).await
    }

    /// Ask the backend to email the visitor their calendar links
    pub async fn forgotten_calendar(
        &self,
        payload: &ForgottenCalendarPayload,
    ) -> Result<ApiResponse, ApiError> {
        self.post(&["calendar", "forgotten"], payload).await
    }

    pub async fn reserve_spot(&self, payload: &ReservationPayload) -> Result<ApiResponse, ApiError> {
        self.post(&["spots", "reserve"], payload).await
    }

    pub async fn delete_reservation(
        &self,
        reservation_id: &str,
        payload: &CancelReservationPayload,
    ) -> Result<ApiResponse, ApiError> {
        self.delete(&["reservation", "delete", reservation_id], payload)
            .await
    }

    pub async fn fetch_reservation(&self, reservation_id: &str) -> Result<ReservationDetail, ApiError> {
        let response = self.get(&["reservation", reservation_id]).await?;
        serde_json::from_value(response.into_body()).map_err(|e| {
            tracing::error!("Reservation '{}' has an unexpected shape: {}", reservation_id, e);
            ApiError::unavailable(format!("malformed reservation response: {e}"))
        })
    }

    pub async fn join_waitlist(&self, payload: &WaitlistPayload) -> Result<ApiResponse, ApiError> {
        self.post(&["waitlist", "join"], payload).await
    }
}
