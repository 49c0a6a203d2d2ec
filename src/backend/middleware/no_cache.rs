/**
 * No-Cache Middleware
 *
 * Calendar pages show live availability and, for restricted calendars,
 * depend on the visitor's grant. Browsers and proxies must not reuse them.
 */
use axum::{
    extract::Request,
    http::{
        header::{CACHE_CONTROL, EXPIRES, PRAGMA},
        HeaderValue,
    },
    middleware::Next,
    response::Response,
};

/// Mark the response as uncacheable
pub async fn no_cache(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();
    headers.insert(
        CACHE_CONTROL,
        HeaderValue::from_static("no-cache, no-store, must-revalidate"),
    );
    headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));
    headers.insert(EXPIRES, HeaderValue::from_static("0"));
    response
}
