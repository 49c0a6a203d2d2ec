/**
 * Calendar Page Handler
 *
 * `GET /{slug}?token=...`
 *
 * # Flow
 *
 * 1. Reject slugs that cannot be calendar URLs (404, no backend call).
 *    A query string that does not parse is treated as carrying no token
 * 2. Fetch the calendar; any failure is a 404 page
 * 3. Hide the backend's placeholder calendar (404)
 * 4. Run the access gate for restricted calendars
 * 5. Render the calendar or the access-request form, storing a freshly
 *    minted grant in the `access-allowed` cookie
 *
 * The route is wrapped in the no-cache middleware.
 */
use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::header::SET_COOKIE,
    response::{Html, IntoResponse, Response},
};

use crate::backend::access::GateOutcome;
use crate::backend::error::PageError;
use crate::backend::middleware::AccessCookies;
use crate::backend::server::state::AppState;
use crate::backend::views;
use crate::shared::access::{is_valid_slug, CalendarQuery};
use crate::shared::calendar::spot_groups;

pub async fn calendar_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    query: Result<Query<CalendarQuery>, QueryRejection>,
    cookies: AccessCookies,
) -> Result<Response, PageError> {
    // An unreadable query string (e.g. a repeated `token`) counts as no token
    let query = query.map(|Query(query)| query).unwrap_or_else(|rejection| {
        tracing::debug!("Ignoring calendar query string: {}", rejection.body_text());
        CalendarQuery::default()
    });

    if !is_valid_slug(&slug) {
        return Err(PageError::not_found());
    }

    let data = state.api.fetch_calendar(&slug).await.map_err(|e| {
        tracing::warn!("Calendar '{}' could not be loaded: {}", slug, e);
        PageError::not_found()
    })?;

    if data.calendar.is_placeholder() {
        tracing::debug!("Calendar '{}' is the placeholder calendar", slug);
        return Err(PageError::not_found());
    }

    let outcome = state
        .gate
        .evaluate(
            &state.api,
            &slug,
            data.calendar.is_restricted,
            query.token(),
            &cookies.as_strs(),
        )
        .await;

    let html = match &outcome {
        GateOutcome::Challenge { token_rejected } => {
            views::calendar::challenge(&data.calendar, &slug, *token_rejected)
        }
        GateOutcome::Open | GateOutcome::Granted { .. } => views::calendar::calendar(
            &data.calendar,
            &slug,
            &spot_groups(&data.grouped_spots),
        ),
    };

    let mut response = Html(html).into_response();
    if let GateOutcome::Granted { grant: Some(grant) } = &outcome {
        if let Some(cookie) = state.gate.cookie_header(grant) {
            response.headers_mut().append(SET_COOKIE, cookie);
        }
    }
    Ok(response)
}
