/**
 * Access Cookie
 *
 * Reading the `access-allowed` cookie from a request and building the
 * `Set-Cookie` header that stores a grant in the visitor's browser.
 */
use axum::http::{header::COOKIE, HeaderMap, HeaderValue};
use chrono::{Duration, Utc};

use crate::backend::access::grant::GRANT_TTL_SECS;

/// Name of the grant cookie
pub const ACCESS_COOKIE: &str = "access-allowed";

/// All values of cookie `name` across every `Cookie` header
pub fn cookie_values<'a>(headers: &'a HeaderMap, name: &str) -> Vec<&'a str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|line| line.split(';'))
        .filter_map(|pair| {
            let (key, value) = pair.trim().split_once('=')?;
            (key.trim() == name).then(|| value.trim().trim_matches('"'))
        })
        .collect()
}

/// `Set-Cookie` value storing `grant`
///
/// `HttpOnly`, `SameSite=Lax`, 30 days; `Secure` only when `secure` is set
/// (production deployments behind TLS).
pub fn grant_cookie(grant: &str, secure: bool) -> Result<HeaderValue, axum::http::header::InvalidHeaderValue> {
    let expires = (Utc::now() + Duration::seconds(GRANT_TTL_SECS))
        .format("%a, %d %b %Y %H:%M:%S GMT");
    let mut cookie = format!(
        "{ACCESS_COOKIE}={grant}; Max-Age={GRANT_TTL_SECS}; Expires={expires}; Path=/; HttpOnly; SameSite=Lax"
    );
    if secure {
        cookie.push_str("; Secure");
    }
    HeaderValue::from_str(&cookie)
}
