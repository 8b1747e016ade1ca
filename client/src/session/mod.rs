//! Session token handling and role-based routing.
//!
//! ARCHITECTURE
//! ============
//! `claims` decodes the bearer token, `role` owns the fixed role set and its
//! routes, `router` turns a stored token into one navigation, and `store`
//! provides the injected [`Session`] handle pages read the token through.

pub mod claims;
pub mod role;
pub mod router;
pub mod store;

pub use claims::{Claims, decode_claims};
pub use role::{LOGIN_PATH, REGISTER_PATH, ROUTER_PATH, Role, Route};
pub use router::{SessionRouter, Verdict, resolve};
pub use store::{BrowserTokenStore, MemoryTokenStore, Session, TOKEN_KEY, TokenStore, bearer_header};

/// Reasons a stored token cannot be used for routing.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("no session token stored")]
    Missing,
    #[error("token is not a three-segment JWT")]
    Malformed,
    #[error("token payload is not base64url: {0}")]
    Encoding(#[from] base64::DecodeError),
    #[error("token payload is not a JSON claim set: {0}")]
    Payload(#[from] serde_json::Error),
    #[error("token carries no role claim")]
    MissingRole,
    #[error("unrecognized role `{0}`")]
    UnknownRole(String),
}
