/**
 * Restricted Calendar Gate
 *
 * Decides, for one request to a calendar page, whether the visitor sees the
 * calendar or the access-request form.
 *
 * # Decision Order
 *
 * 1. Calendar not restricted → `Open`
 * 2. `?token=` present → verify with the backend
 *    - verified → `Granted` with a fresh grant to store
 *    - anything else → `Challenge` (no cookie)
 * 3. `access-allowed` cookie valid for this slug → `Granted` (nothing to store)
 * 4. otherwise → `Challenge`
 *
 * The gate fails closed: a backend error during verification is a
 * challenge, never a grant. It never retries verification.
 */
use std::future::Future;

use axum::http::HeaderValue;

use crate::backend::access::cookie::grant_cookie;
use crate::backend::access::grant::GrantIssuer;
use crate::backend::api_client::{ApiClient, ApiError};

/// Something that can ask the backend whether an access token is good
pub trait TokenVerifier {
    fn verify_token(
        &self,
        slug: &str,
        token: &str,
    ) -> impl Future<Output = Result<(), ApiError>> + Send;
}

impl TokenVerifier for ApiClient {
    async fn verify_token(&self, slug: &str, token: &str) -> Result<(), ApiError> {
        self.verify_access_token(slug, token).await.map(|_| ())
    }
}

/// Result of evaluating the gate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateOutcome {
    /// Calendar is public
    Open,
    /// Visitor may see the calendar; `grant` is set when a new grant must be
    /// stored in the browser
    Granted { grant: Option<String> },
    /// Visitor gets the access-request form; `token_rejected` tells the page
    /// to explain that the link did not work
    Challenge { token_rejected: bool },
}

impl GateOutcome {
    pub fn shows_content(&self) -> bool {
        !matches!(self, Self::Challenge { .. })
    }
}

/// The access gate, shared by all requests
#[derive(Debug, Clone)]
pub struct AccessGate {
    grants: GrantIssuer,
    secure_cookies: bool,
}

impl AccessGate {
    pub fn new(grants: GrantIssuer, secure_cookies: bool) -> Self {
        Self {
            grants,
            secure_cookies,
        }
    }

    pub fn grants(&self) -> &GrantIssuer {
        &self.grants
    }

    /// Decide access to calendar `slug`.
    ///
    /// `cookies` holds every `access-allowed` value the browser sent.
    pub async fn evaluate<V: TokenVerifier>(
        &self,
        verifier: &V,
        slug: &str,
        restricted: bool,
        token: Option<&str>,
        cookies: &[&str],
    ) -> GateOutcome {
        if !restricted {
            return GateOutcome::Open;
        }

        if let Some(token) = token {
            if let Err(e) = verifier.verify_token(slug, token).await {
                tracing::info!("Access token for calendar '{}' not accepted: {}", slug, e);
                return GateOutcome::Challenge {
                    token_rejected: true,
                };
            }
            return match self.grants.issue(slug) {
                Ok(grant) => {
                    tracing::info!("Access token verified for calendar '{}'", slug);
                    GateOutcome::Granted { grant: Some(grant) }
                }
                Err(e) => {
                    tracing::error!("Failed to mint access grant for '{}': {:?}", slug, e);
                    GateOutcome::Challenge {
                        token_rejected: false,
                    }
                }
            };
        }

        if cookies.iter().any(|value| self.grants.allows(value, slug)) {
            return GateOutcome::Granted { grant: None };
        }

        tracing::debug!("No valid access grant for calendar '{}'", slug);
        GateOutcome::Challenge {
            token_rejected: false,
        }
    }

    /// Mint a grant for `slug` outside the token flow (explicit
    /// re-authorization) and return its `Set-Cookie` header
    pub fn grant_header(&self, slug: &str) -> Option<HeaderValue> {
        let grant = self
            .grants
            .issue(slug)
            .map_err(|e| tracing::error!("Failed to mint access grant for '{}': {:?}", slug, e))
            .ok()?;
        self.cookie_header(&grant)
    }

    /// `Set-Cookie` header storing an already minted grant
    pub fn cookie_header(&self, grant: &str) -> Option<HeaderValue> {
        grant_cookie(grant, self.secure_cookies)
            .map_err(|e| tracing::error!("Access grant is not a valid header value: {}", e))
            .ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Verifier with a fixed answer that counts its calls
    struct FixedVerifier {
        accept: bool,
        calls: AtomicUsize,
    }

    impl FixedVerifier {
        fn new(accept: bool) -> Self {
            Self {
                accept,
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl TokenVerifier for FixedVerifier {
        async fn verify_token(&self, _slug: &str, _token: &str) -> Result<(), ApiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.accept {
                Ok(())
            } else {
                Err(ApiError::unavailable("connection refused"))
            }
        }
    }

    fn plain_gate() -> AccessGate {
        AccessGate::new(GrantIssuer::plain(), false)
    }

    #[tokio::test]
    async fn test_unrestricted_skips_everything() {
        let verifier = FixedVerifier::new(false);
        let outcome = plain_gate()
            .evaluate(&verifier, "pool-a", false, Some("tok"), &[])
            .await;
        assert_eq!(outcome, GateOutcome::Open);
        assert_eq!(verifier.calls(), 0);
    }

    #[tokio::test]
    async fn test_no_token_no_cookie_challenges() {
        let verifier = FixedVerifier::new(true);
        let outcome = plain_gate()
            .evaluate(&verifier, "pool-a", true, None, &[])
            .await;
        assert_eq!(outcome, GateOutcome::Challenge { token_rejected: false });
        assert!(!outcome.shows_content());
    }

    #[tokio::test]
    async fn test_cookie_for_other_slug_challenges() {
        let verifier = FixedVerifier::new(true);
        let outcome = plain_gate()
            .evaluate(&verifier, "pool-a", true, None, &["pool-b"])
            .await;
        assert_eq!(outcome, GateOutcome::Challenge { token_rejected: false });
    }

    #[tokio::test]
    async fn test_matching_cookie_grants_without_verification() {
        let verifier = FixedVerifier::new(false);
        let gate = plain_gate();
        for _ in 0..3 {
            let outcome = gate
                .evaluate(&verifier, "pool-a", true, None, &["pool-b", "pool-a"])
                .await;
            assert_eq!(outcome, GateOutcome::Granted { grant: None });
        }
        assert_eq!(verifier.calls(), 0);
    }

    #[tokio::test]
    async fn test_verified_token_mints_grant() {
        let verifier = FixedVerifier::new(true);
        let outcome = plain_gate()
            .evaluate(&verifier, "pool-a", true, Some("tok"), &[])
            .await;
        assert_eq!(
            outcome,
            GateOutcome::Granted {
                grant: Some("pool-a".to_string())
            }
        );
        assert_eq!(verifier.calls(), 1);
    }

    #[tokio::test]
    async fn test_rejected_token_fails_closed_even_with_cookie() {
        let verifier = FixedVerifier::new(false);
        let outcome = plain_gate()
            .evaluate(&verifier, "pool-a", true, Some("tok"), &["pool-a"])
            .await;
        assert_eq!(outcome, GateOutcome::Challenge { token_rejected: true });
    }

    #[tokio::test]
    async fn test_signed_gate_ignores_forged_cookie() {
        let verifier = FixedVerifier::new(true);
        let gate = AccessGate::new(GrantIssuer::signed("secret"), true);

        let forged = gate.evaluate(&verifier, "pool-a", true, None, &["pool-a"]).await;
        assert_eq!(forged, GateOutcome::Challenge { token_rejected: false });

        let GateOutcome::Granted { grant: Some(grant) } =
            gate.evaluate(&verifier, "pool-a", true, Some("tok"), &[]).await
        else {
            panic!("expected a fresh grant");
        };
        let replay = gate.evaluate(&verifier, "pool-a", true, None, &[grant.as_str()]).await;
        assert_eq!(replay, GateOutcome::Granted { grant: None });
    }

    #[test]
    fn test_grant_header_secure_flag() {
        let gate = AccessGate::new(GrantIssuer::plain(), true);
        let header = gate.grant_header("pool-a").unwrap();
        let header = header.to_str().unwrap();
        assert!(header.starts_with("access-allowed=pool-a;"));
        assert!(header.ends_with("; Secure"));
    }
}
