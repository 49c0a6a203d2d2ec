//! Mock booking backend helpers
//!
//! Thin wrappers around wiremock for the upstream endpoints the front end
//! calls. All paths carry the default `v1` version prefix.

use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Calendar body as returned by `GET calendar/{slug}`
pub fn calendar_body(name: &str, slug: &str, restricted: bool) -> Value {
    json!({
        "calendar": {
            "name": name,
            "url": slug,
            "isRestricted": restricted,
        },
        "groupedSpots": {
            "Saturday": [
                {
                    "id": "s1",
                    "startDate": "2026-03-07T09:00:00Z",
                    "endDate": "2026-03-07T10:00:00Z",
                    "location": "Lane 1",
                    "isAvailable": true
                }
            ]
        }
    })
}

/// Serve a calendar for `slug`
pub async fn mount_calendar(backend: &MockServer, slug: &str, name: &str, restricted: bool) {
    Mock::given(method("GET"))
        .and(path(format!("/v1/calendar/{slug}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(calendar_body(name, slug, restricted)))
        .mount(backend)
        .await;
}

/// Answer token verification for `slug` with `status`, expecting exactly
/// `calls` requests
pub async fn mount_verify_token(backend: &MockServer, slug: &str, status: u16, calls: u64) {
    let body = if (200..300).contains(&status) {
        json!({"valid": true})
    } else {
        json!({"message": "Invalid token"})
    };
    Mock::given(method("POST"))
        .and(path(format!("/v1/calendar/{slug}/verify-token")))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .expect(calls)
        .named("verify-token")
        .mount(backend)
        .await;
}

/// Fail the test if `path` on the backend is hit at all
pub async fn forbid(backend: &MockServer, http_method: &str, upstream_path: &str) {
    Mock::given(method(http_method))
        .and(path(upstream_path))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(backend)
        .await;
}
