//! Restricted Calendar Access
//!
//! Some calendars are restricted: their page is only shown to visitors that
//! hold an access grant for that calendar. Grants are minted in exchange for
//! a one-time access token (emailed by the backend) or after an explicit
//! re-authorization, and are stored client-side in the `access-allowed`
//! cookie. There is no server-side session store.
//!
//! # Module Structure
//!
//! ```text
//! access/
//! ├── mod.rs     - Module exports and documentation
//! ├── gate.rs    - Grant / challenge decision per request
//! ├── grant.rs   - Plain and signed grant encodings
//! └── cookie.rs  - Cookie parsing and Set-Cookie construction
//! ```
//!
//! # Visitor States
//!
//! anonymous → token verified → cookie authorized. A visitor who cannot be
//! authorized is always offered the access-request form; the gate never
//! answers with an HTTP error status.

/// Grant / challenge decision
pub mod gate;

/// Grant encodings
pub mod grant;

/// Cookie handling
pub mod cookie;

pub use cookie::{cookie_values, grant_cookie, ACCESS_COOKIE};
pub use gate::{AccessGate, GateOutcome, TokenVerifier};
pub use grant::GrantIssuer;
