/**
 * Access Grants
 *
 * An access grant is the cookie value proving a visitor may view one
 * restricted calendar. Two encodings exist:
 *
 * - **Plain** - the value is the calendar slug itself. This is what older
 *   deployments issued; anyone who can guess a slug can forge it.
 * - **Signed** - the value is an HS256 token whose subject is the slug and
 *   whose expiry is 30 days after issuance. Enabled by configuring
 *   `ACCESS_GRANT_SECRET`.
 *
 * Either way a grant is valid for exactly one slug.
 */
use std::sync::Arc;

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Lifetime of a grant, in seconds (30 days)
pub const GRANT_TTL_SECS: i64 = 30 * 24 * 60 * 60;

/// Claims of a signed grant
#[derive(Debug, Serialize, Deserialize)]
pub struct GrantClaims {
    /// Calendar slug
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

struct SigningKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

/// Mints and checks access grants
#[derive(Clone)]
pub struct GrantIssuer {
    keys: Option<Arc<SigningKeys>>,
}

impl std::fmt::Debug for GrantIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GrantIssuer")
            .field("signed", &self.is_signed())
            .finish()
    }
}

impl GrantIssuer {
    /// Grants whose value is the bare slug
    pub fn plain() -> Self {
        Self { keys: None }
    }

    /// Grants signed with `secret`
    pub fn signed(secret: &str) -> Self {
        let bytes = secret.as_bytes();
        Self {
            keys: Some(Arc::new(SigningKeys {
                encoding: EncodingKey::from_secret(bytes),
                decoding: DecodingKey::from_secret(bytes),
            })),
        }
    }

    /// Signed when a secret is configured, plain otherwise
    pub fn from_secret(secret: Option<&str>) -> Self {
        match secret {
            Some(secret) => Self::signed(secret),
            None => Self::plain(),
        }
    }

    pub fn is_signed(&self) -> bool {
        self.keys.is_some()
    }

    /// Mint a grant for `slug`
    pub fn issue(&self, slug: &str) -> Result<String, jsonwebtoken::errors::Error> {
        let Some(keys) = &self.keys else {
            return Ok(slug.to_string());
        };

        let now = Utc::now().timestamp();
        let claims = GrantClaims {
            sub: slug.to_string(),
            exp: (now + GRANT_TTL_SECS).max(0) as u64,
            iat: now.max(0) as u64,
        };
        encode(&Header::new(Algorithm::HS256), &claims, &keys.encoding)
    }

    /// Whether `value` is a live grant for exactly `slug`
    pub fn allows(&self, value: &str, slug: &str) -> bool {
        let Some(keys) = &self.keys else {
            return value == slug;
        };

        match decode::<GrantClaims>(value, &keys.decoding, &Validation::new(Algorithm::HS256)) {
            Ok(data) => data.claims.sub == slug,
            Err(e) => {
                tracing::debug!("Rejected access grant: {}", e);
                false
            }
        }
    }
}
