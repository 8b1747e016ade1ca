//! REST helpers for the food-donation backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, sent same-origin to
//! the host's `/api` passthrough. Server-side (SSR): stubs returning
//! [`ApiError::Unavailable`] since these calls only run in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. Non-2xx responses are decoded
//! from the backend's `{"detail": ...}` envelope so pages can show the
//! message inline. Authenticated calls take the bearer token explicitly from
//! the caller's [`Session`](crate::session::Session).

#![allow(clippy::unused_async)]

use std::future::Future;

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Donation, Event, LoginRequest, NewDonation, RegisterRequest, ServiceListing, Statistics, TokenResponse};
#[cfg(any(test, feature = "hydrate"))]
use super::types::ErrorEnvelope;
use crate::session::Session;

pub const API_BASE: &str = "/api";

/// Failure of a backend call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("your session has expired, please sign in again")]
    Unauthorized,
    #[error("{detail}")]
    Status { status: u16, detail: String },
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Whether the stored session should be dropped and the user sent to login.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

/// Run `call` with the session's token.
///
/// No request is issued when the session holds no token. A `401` from the
/// backend clears the stored token so the next guard check routes to login.
///
/// # Errors
///
/// Returns [`ApiError::Unauthorized`] without calling `call` when signed out,
/// otherwise whatever `call` returns.
pub async fn authorized<T, F, Fut>(session: &Session, call: F) -> Result<T, ApiError>
where
    F: FnOnce(String) -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
{
    let Some(token) = session.token() else {
        return Err(ApiError::Unauthorized);
    };
    let result = call(token).await;
    if matches!(result, Err(ApiError::Unauthorized)) {
        log::info!("backend rejected session token; signing out");
        session.sign_out();
    }
    result
}

#[cfg(any(test, feature = "hydrate"))]
fn endpoint(path: &str) -> String {
    format!("{API_BASE}/{}", path.trim_start_matches('/'))
}

#[cfg(any(test, feature = "hydrate"))]
fn donation_endpoint(id: &str) -> String {
    endpoint(&format!("donations/{id}"))
}

#[cfg(any(test, feature = "hydrate"))]
fn claim_endpoint(id: &str) -> String {
    endpoint(&format!("donations/{id}/claim"))
}

/// Map a non-2xx response body to an [`ApiError`].
#[cfg(any(test, feature = "hydrate"))]
fn error_from_response(status: u16, body: &str) -> ApiError {
    if status == 401 {
        return ApiError::Unauthorized;
    }
    let detail = serde_json::from_str::<ErrorEnvelope>(body)
        .map(|env| env.detail.message())
        .ok()
        .filter(|msg| !msg.is_empty())
        .unwrap_or_else(|| format!("request failed: {status}"));
    ApiError::Status { status, detail }
}

#[cfg(feature = "hydrate")]
mod http {
    use gloo_net::http::{Request, RequestBuilder, Response};
    use serde::Serialize;
    use serde::de::DeserializeOwned;

    use super::{ApiError, error_from_response};
    use crate::session::bearer_header;

    fn authorized(builder: RequestBuilder, token: Option<&str>) -> RequestBuilder {
        match token {
            Some(token) => builder.header("Authorization", &bearer_header(token)),
            None => builder,
        }
    }

    pub(super) async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
        if !resp.ok() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(error_from_response(status, &body));
        }
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub(super) async fn get<T: DeserializeOwned>(path: &str, token: Option<&str>) -> Result<T, ApiError> {
        let resp = authorized(Request::get(path), token)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(resp).await
    }

    pub(super) async fn post<B: Serialize, T: DeserializeOwned>(
        path: &str,
        token: Option<&str>,
        body: Option<&B>,
    ) -> Result<T, ApiError> {
        let builder = authorized(Request::post(path), token);
        let request = match body {
            Some(body) => builder.json(body).map_err(|e| ApiError::Decode(e.to_string()))?,
            None => builder.build().map_err(|e| ApiError::Network(e.to_string()))?,
        };
        let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(resp).await
    }
}

// =============================================================================
// AUTH
// =============================================================================

/// Exchange credentials for a session token via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns the backend's `detail` message on rejected credentials.
pub async fn login(request: &LoginRequest) -> Result<TokenResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        http::post(&endpoint("auth/login"), None, Some(request)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

/// Create an account via `POST /api/auth/register`; the response carries a token.
///
/// # Errors
///
/// Returns the backend's `detail` message when registration is refused.
pub async fn register(request: &RegisterRequest) -> Result<TokenResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        http::post(&endpoint("auth/register"), None, Some(request)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

// =============================================================================
// DONATIONS
// =============================================================================

/// Donations created by the signed-in donor (`GET /api/donations/mine`).
///
/// # Errors
///
/// Returns an [`ApiError`] on transport or HTTP failure.
pub async fn fetch_my_donations(token: &str) -> Result<Vec<Donation>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        http::get(&endpoint("donations/mine"), Some(token)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Unavailable)
    }
}

/// Unclaimed donations open for pickup (`GET /api/donations/available`).
///
/// # Errors
///
/// Returns an [`ApiError`] on transport or HTTP failure.
pub async fn fetch_available_donations(token: &str) -> Result<Vec<Donation>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        http::get(&endpoint("donations/available"), Some(token)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Unavailable)
    }
}

/// Fetch one donation (`GET /api/donations/{id}`).
///
/// # Errors
///
/// Returns an [`ApiError`] on transport or HTTP failure.
pub async fn fetch_donation(token: &str, id: &str) -> Result<Donation, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        http::get(&donation_endpoint(id), Some(token)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, id);
        Err(ApiError::Unavailable)
    }
}

/// Submit a new donation (`POST /api/donations`).
///
/// # Errors
///
/// Returns the backend's validation `detail` when the donation is refused.
pub async fn create_donation(token: &str, donation: &NewDonation) -> Result<Donation, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        http::post(&endpoint("donations"), Some(token), Some(donation)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, donation);
        Err(ApiError::Unavailable)
    }
}

/// Claim a pending donation for the signed-in food bank
/// (`POST /api/donations/{id}/claim`).
///
/// # Errors
///
/// Returns an [`ApiError`] when the donation is no longer claimable.
pub async fn claim_donation(token: &str, id: &str) -> Result<Donation, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        http::post::<(), _>(&claim_endpoint(id), Some(token), None).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, id);
        Err(ApiError::Unavailable)
    }
}

// =============================================================================
// READ-ONLY VIEWS
// =============================================================================

/// Platform totals (`GET /api/statistics`).
///
/// # Errors
///
/// Returns an [`ApiError`] on transport or HTTP failure.
pub async fn fetch_statistics(token: &str) -> Result<Statistics, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        http::get(&endpoint("statistics"), Some(token)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Unavailable)
    }
}

/// Support services near the individual (`GET /api/services`).
///
/// # Errors
///
/// Returns an [`ApiError`] on transport or HTTP failure.
pub async fn fetch_services(token: &str) -> Result<Vec<ServiceListing>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        http::get(&endpoint("services"), Some(token)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Unavailable)
    }
}

/// Upcoming volunteer events (`GET /api/events`).
///
/// # Errors
///
/// Returns an [`ApiError`] on transport or HTTP failure.
pub async fn fetch_events(token: &str) -> Result<Vec<Event>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        http::get(&endpoint("events"), Some(token)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Unavailable)
    }
}
