//! Host error type.
//!
//! ERROR HANDLING
//! ==============
//! Errors render as the same `{"detail": "..."}` envelope the backend uses,
//! so the client decodes passthrough failures and backend failures alike.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("invalid API path")]
    InvalidPath,
    #[error("backend timed out")]
    UpstreamTimeout,
    #[error("backend unavailable")]
    Upstream(#[source] reqwest::Error),
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() { Self::UpstreamTimeout } else { Self::Upstream(e) }
    }
}

impl AppError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidPath => StatusCode::BAD_REQUEST,
            Self::UpstreamTimeout => StatusCode::GATEWAY_TIMEOUT,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            Self::Upstream(e) => tracing::warn!(error = %e, "backend request failed"),
            Self::UpstreamTimeout => tracing::warn!("backend request timed out"),
            Self::InvalidPath => tracing::debug!("rejected API path"),
        }
        (self.status(), Json(serde_json::json!({ "detail": self.to_string() }))).into_response()
    }
}
