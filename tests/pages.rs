//! Page rendering integration tests
//!
//! Site pages, calendar and reservation pages against the mock backend,
//! the artwork gallery and uploads, and static file serving.

mod common;

use axum::http::StatusCode;
use axum_test::multipart::{MultipartForm, Part};
use common::{forbid, mount_calendar, TestApp};
use serde_json::{json, Value};
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, ResponseTemplate};

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

fn png_bytes(len: usize) -> Vec<u8> {
    let mut data = PNG_SIGNATURE.to_vec();
    data.resize(len.max(PNG_SIGNATURE.len()), 0);
    data
}

fn artwork_form(bytes: Vec<u8>, file_name: &str, mime: &str) -> MultipartForm {
    MultipartForm::new().add_part(
        "artwork",
        Part::bytes(bytes).file_name(file_name).mime_type(mime),
    )
}

#[tokio::test]
async fn test_home_and_about_render() {
    let app = TestApp::start().await;

    let home = app.server.get("/").await;
    assert_eq!(home.status_code(), StatusCode::OK);
    assert_contains!(home.text(), "/local/calendar/forgotten");

    let about = app.server.get("/about").await;
    assert_eq!(about.status_code(), StatusCode::OK);
    assert_contains!(about.text(), "<title>");
}

#[tokio::test]
async fn test_unknown_nested_path_is_not_found_page() {
    let app = TestApp::start().await;

    let response = app.server.get("/no/such/page").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_contains!(response.text(), "Page Not Found");
}

#[tokio::test]
async fn test_invalid_slug_skips_backend() {
    let app = TestApp::start().await;
    Mock::given(method("GET"))
        .and(path_regex("^/v1/calendar/"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&app.backend)
        .await;

    let response = app.server.get("/pool%20a").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_dotted_slug_is_served() {
    let app = TestApp::start().await;
    mount_calendar(&app.backend, "anna.smith", "Anna's Studio", false).await;

    let response = app.server.get("/anna.smith").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_contains!(response.text(), "/reserve/s1?");
}

#[tokio::test]
async fn test_duplicate_token_is_treated_as_absent() {
    let app = TestApp::start().await;
    mount_calendar(&app.backend, "pool-a", "Pool A", true).await;
    forbid(&app.backend, "POST", "/v1/calendar/pool-a/verify-token").await;

    let response = app.server.get("/pool-a?token=a&token=b").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_contains!(response.text(), "/local/calendar/validate-access");
}

#[tokio::test]
async fn test_sample_calendar_is_hidden() {
    let app = TestApp::start().await;
    mount_calendar(&app.backend, "sample", "Sample Calendar", false).await;

    let response = app.server.get("/sample").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_not_contains!(response.text(), "/reserve/s1");
}

#[tokio::test]
async fn test_missing_calendar_is_not_found() {
    let app = TestApp::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/calendar/gone"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "No such calendar"})))
        .mount(&app.backend)
        .await;

    let response = app.server.get("/gone").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_contains!(response.text(), "Page Not Found");
}

#[tokio::test]
async fn test_reservation_detail_links_calendar_file() {
    let app = TestApp::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/reservation/r1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "reservation": {
                "id": "r1",
                "status": "confirmed",
                "visitor": {"name": "Alice", "email": "alice@example.com"},
                "icsURL": "/v1/reservation/r1/ics"
            },
            "calendar": {"name": "Pool A", "url": "pool-a"}
        })))
        .mount(&app.backend)
        .await;

    let response = app.server.get("/reservation/r1").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let html = response.text();
    assert_contains!(html, "Pool A");
    assert_contains!(html, "Alice");
    assert_contains!(html, format!("{}/v1/reservation/r1/ics", app.backend.uri()).as_str());
    assert_contains!(html, "/local/reservation/delete/r1");
}

#[tokio::test]
async fn test_unknown_reservation_is_not_found() {
    let app = TestApp::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/reservation/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "Not found"})))
        .mount(&app.backend)
        .await;

    let response = app.server.get("/reservation/missing").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_contains!(response.text(), "Reservation Not Found");
}

#[tokio::test]
async fn test_malformed_reservation_is_server_error() {
    let app = TestApp::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/reservation/r2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"unexpected": true})))
        .mount(&app.backend)
        .await;

    let response = app.server.get("/reservation/r2").await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_contains!(
        response.text(),
        "An error occurred while loading the reservation details."
    );
}

#[tokio::test]
async fn test_reserve_form_defaults_timezone() {
    let app = TestApp::start().await;

    let response = app
        .server
        .get("/reserve/s1")
        .add_query_param("location", "Lane 1")
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let html = response.text();
    assert_contains!(html, "Lane 1");
    assert_contains!(html, r#"name="spotId" value="s1""#);
    assert_contains!(html, r#"name="timezone" value="Europe/Amsterdam""#);
}

#[tokio::test]
async fn test_gallery_creates_directory_and_lists_files() {
    let app = TestApp::start().await;
    let dir = app.artworks_dir();
    std::fs::remove_dir_all(&dir).ok();

    let empty = app.server.get("/artworks").await;
    assert_eq!(empty.status_code(), StatusCode::OK);
    assert_contains!(empty.text(), "0 artworks");
    assert!(dir.is_dir());

    std::fs::write(dir.join("1700000000000-sun.png"), png_bytes(64)).unwrap();
    std::fs::write(dir.join("notes.txt"), b"ignored").unwrap();

    let listed = app.server.get("/artworks").await;
    let html = listed.text();
    assert_contains!(html, "1 artwork<");
    assert_contains!(html, "/static/artworks/1700000000000-sun.png");
    assert_not_contains!(html, "notes.txt");
}

#[tokio::test]
async fn test_upload_stores_png() {
    let app = TestApp::start().await;

    let response = app
        .server
        .post("/local/artworks/upload")
        .multipart(artwork_form(png_bytes(1024), "my sun!.png", "image/png"))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body = response.json::<Value>();
    let filename = body["filename"].as_str().unwrap().to_string();
    assert!(filename.ends_with("-my_sun_.png"), "{filename}");
    assert_eq!(body["url"], format!("/static/artworks/{filename}"));

    let stored = std::fs::read(app.artworks_dir().join(&filename)).unwrap();
    assert_eq!(stored.len(), 1024);

    let served = app.server.get(&format!("/static/artworks/{filename}")).await;
    assert_eq!(served.status_code(), StatusCode::OK);
    assert_eq!(served.as_bytes().len(), 1024);
}

#[tokio::test]
async fn test_upload_rejects_wrong_mime_type() {
    let app = TestApp::start().await;

    let response = app
        .server
        .post("/local/artworks/upload")
        .multipart(artwork_form(png_bytes(64), "sun.jpg", "image/jpeg"))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>(),
        json!({"message": "Only PNG files are allowed"})
    );
}

#[tokio::test]
async fn test_upload_rejects_disguised_file() {
    let app = TestApp::start().await;

    let response = app
        .server
        .post("/local/artworks/upload")
        .multipart(artwork_form(b"GIF89a not a png".to_vec(), "sun.png", "image/png"))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>(),
        json!({"message": "Only PNG files are allowed"})
    );
}

#[tokio::test]
async fn test_upload_rejects_oversized_file() {
    let app = TestApp::start().await;

    let response = app
        .server
        .post("/local/artworks/upload")
        .multipart(artwork_form(png_bytes(5 * 1024 * 1024 + 1), "big.png", "image/png"))
        .await;

    assert_eq!(response.status_code(), StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(
        response.json::<Value>(),
        json!({"message": "File exceeds the 5MB limit"})
    );
    let leftovers = std::fs::read_dir(app.artworks_dir()).unwrap().count();
    assert_eq!(leftovers, 0);
}

#[tokio::test]
async fn test_upload_without_file_field() {
    let app = TestApp::start().await;

    let form = MultipartForm::new().add_text("title", "Sunset");
    let response = app.server.post("/local/artworks/upload").multipart(form).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>(), json!({"message": "No file uploaded"}));
}
