/**
 * Access Cookie Extractor
 *
 * Pulls every `access-allowed` cookie value out of the request so the
 * calendar handler can hand them to the access gate. Extraction never
 * fails: a request without the cookie simply yields an empty list.
 */
use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::backend::access::cookie::{cookie_values, ACCESS_COOKIE};

/// `access-allowed` values sent by the browser
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AccessCookies(pub Vec<String>);

impl AccessCookies {
    pub fn as_strs(&self) -> Vec<&str> {
        self.0.iter().map(String::as_str).collect()
    }
}

impl<S> FromRequestParts<S> for AccessCookies
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let values = cookie_values(&parts.headers, ACCESS_COOKIE)
            .into_iter()
            .map(str::to_string)
            .collect();
        Ok(AccessCookies(values))
    }
}
