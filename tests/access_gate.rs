//! Restricted calendar access integration tests
//!
//! Exercises the full `GET /{slug}` flow against a mock backend: challenge
//! page, token exchange, cookie reuse and signed grants.

mod common;

use axum::http::{
    header::{CACHE_CONTROL, COOKIE, SET_COOKIE},
    HeaderValue, StatusCode,
};
use common::{forbid, mount_calendar, mount_verify_token, TestApp};

const CHALLENGE_MARKER: &str = "/local/calendar/validate-access";
const CONTENT_MARKER: &str = "/reserve/s1?";

fn set_cookie(response: &axum_test::TestResponse) -> Option<String> {
    response
        .headers()
        .get(SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

#[tokio::test]
async fn test_public_calendar_renders_content() {
    let app = TestApp::start().await;
    mount_calendar(&app.backend, "pool-a", "Pool A", false).await;
    mount_verify_token(&app.backend, "pool-a", 200, 0).await;

    let response = app.server.get("/pool-a").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_contains!(response.text(), CONTENT_MARKER);
    assert_eq!(
        response.headers().get(CACHE_CONTROL).unwrap(),
        "no-cache, no-store, must-revalidate"
    );
    assert!(set_cookie(&response).is_none());
}

#[tokio::test]
async fn test_restricted_without_token_or_cookie_challenges() {
    let app = TestApp::start().await;
    mount_calendar(&app.backend, "pool-a", "Pool A", true).await;

    let response = app.server.get("/pool-a").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let html = response.text();
    assert_contains!(html, CHALLENGE_MARKER);
    assert_not_contains!(html, CONTENT_MARKER);
    assert!(set_cookie(&response).is_none());
}

#[tokio::test]
async fn test_cookie_for_other_calendar_challenges() {
    let app = TestApp::start().await;
    mount_calendar(&app.backend, "pool-a", "Pool A", true).await;

    let response = app
        .server
        .get("/pool-a")
        .add_header(COOKIE, HeaderValue::from_static("access-allowed=pool-b"))
        .await;

    assert_contains!(response.text(), CHALLENGE_MARKER);
}

#[tokio::test]
async fn test_verified_token_sets_cookie_and_shows_content() {
    let app = TestApp::start().await;
    mount_calendar(&app.backend, "pool-a", "Pool A", true).await;
    mount_verify_token(&app.backend, "pool-a", 200, 1).await;

    let response = app
        .server
        .get("/pool-a")
        .add_query_param("token", "one-time-token")
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_contains!(response.text(), CONTENT_MARKER);

    let cookie = set_cookie(&response).expect("grant cookie");
    assert!(cookie.starts_with("access-allowed=pool-a;"), "{cookie}");
    assert_contains!(cookie, "HttpOnly");
    assert_contains!(cookie, "SameSite=Lax");
    assert_contains!(cookie, "Path=/");
    assert_not_contains!(cookie, "Secure");
}

#[tokio::test]
async fn test_rejected_token_sets_no_cookie() {
    let app = TestApp::start().await;
    mount_calendar(&app.backend, "pool-a", "Pool A", true).await;
    mount_verify_token(&app.backend, "pool-a", 401, 1).await;

    let response = app
        .server
        .get("/pool-a")
        .add_query_param("token", "stale")
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let html = response.text();
    assert_contains!(html, CHALLENGE_MARKER);
    assert_contains!(html, "no longer valid");
    assert!(set_cookie(&response).is_none());
}

#[tokio::test]
async fn test_backend_error_during_verification_fails_closed() {
    let app = TestApp::start().await;
    mount_calendar(&app.backend, "pool-a", "Pool A", true).await;
    mount_verify_token(&app.backend, "pool-a", 500, 1).await;

    let response = app
        .server
        .get("/pool-a")
        .add_query_param("token", "whatever")
        .add_header(COOKIE, HeaderValue::from_static("access-allowed=pool-a"))
        .await;

    assert_contains!(response.text(), CHALLENGE_MARKER);
    assert!(set_cookie(&response).is_none());
}

#[tokio::test]
async fn test_matching_cookie_skips_verification() {
    let app = TestApp::start().await;
    mount_calendar(&app.backend, "pool-a", "Pool A", true).await;
    forbid(&app.backend, "POST", "/v1/calendar/pool-a/verify-token").await;

    for _ in 0..3 {
        let response = app
            .server
            .get("/pool-a")
            .add_header(COOKIE, HeaderValue::from_static("access-allowed=pool-a"))
            .await;
        assert_eq!(response.status_code(), StatusCode::OK);
        assert_contains!(response.text(), CONTENT_MARKER);
        assert!(set_cookie(&response).is_none());
    }
}

#[tokio::test]
async fn test_signed_mode_rejects_forged_cookie() {
    let app = TestApp::start_with(|builder| builder.grant_secret("test-secret")).await;
    mount_calendar(&app.backend, "pool-a", "Pool A", true).await;

    let forged = app
        .server
        .get("/pool-a")
        .add_header(COOKIE, HeaderValue::from_static("access-allowed=pool-a"))
        .await;
    assert_contains!(forged.text(), CHALLENGE_MARKER);
}

#[tokio::test]
async fn test_signed_grant_round_trip() {
    let app = TestApp::start_with(|builder| builder.grant_secret("test-secret")).await;
    mount_calendar(&app.backend, "pool-a", "Pool A", true).await;
    mount_verify_token(&app.backend, "pool-a", 200, 1).await;

    let granted = app
        .server
        .get("/pool-a")
        .add_query_param("token", "one-time-token")
        .await;
    let cookie = set_cookie(&granted).expect("grant cookie");
    let grant = cookie
        .strip_prefix("access-allowed=")
        .and_then(|rest| rest.split(';').next())
        .unwrap()
        .to_string();
    assert_ne!(grant, "pool-a");

    let revisit = app
        .server
        .get("/pool-a")
        .add_header(
            COOKIE,
            HeaderValue::from_str(&format!("access-allowed={grant}")).unwrap(),
        )
        .await;
    assert_contains!(revisit.text(), CONTENT_MARKER);
}

#[tokio::test]
async fn test_production_cookie_is_secure() {
    use spotbook::shared::config::Environment;

    let app =
        TestApp::start_with(|builder| builder.environment(Environment::Production)).await;
    mount_calendar(&app.backend, "pool-a", "Pool A", true).await;
    mount_verify_token(&app.backend, "pool-a", 200, 1).await;

    let response = app
        .server
        .get("/pool-a")
        .add_query_param("token", "one-time-token")
        .await;
    assert_contains!(set_cookie(&response).unwrap(), "; Secure");
}
