//! `/api/*` passthrough to the backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser only talks to this host. Each `/api/{path}` request is
//! replayed against `FOODSHARE_API_URL/{path}` with the caller's method,
//! query, body and bearer header; the backend's status, content type and
//! body are returned untouched.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use std::time::Instant;

use axum::body::Bytes;
use axum::extract::{OriginalUri, RawQuery, State};
use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderMap, HeaderName, Method};
use axum::response::{IntoResponse, Response};
use reqwest::Url;

use crate::error::AppError;
use crate::state::AppState;

const FORWARDED_REQUEST_HEADERS: [HeaderName; 3] = [AUTHORIZATION, CONTENT_TYPE, ACCEPT];

const API_PREFIX: &str = "/api/";

/// Resolve `path` under the backend base URL.
///
/// `path` is the raw request path, still percent-encoded, so an encoded `?`
/// or `#` inside a segment stays part of that segment. Dot segments (plain
/// or encoded) and anything that would resolve outside `base` are refused.
pub(crate) fn upstream_url(base: &Url, path: &str, query: Option<&str>) -> Result<Url, AppError> {
    let path = path.trim_start_matches('/');
    if path.is_empty() || path.contains('\\') {
        return Err(AppError::InvalidPath);
    }
    let dot_segment = |seg: &str| {
        let seg = seg.to_ascii_lowercase();
        matches!(seg.as_str(), "." | ".." | "%2e" | "%2e%2e" | ".%2e" | "%2e.")
    };
    if path.split('/').any(dot_segment) {
        return Err(AppError::InvalidPath);
    }

    let mut url = base.join(path).map_err(|_| AppError::InvalidPath)?;
    if !url.as_str().starts_with(base.as_str()) {
        return Err(AppError::InvalidPath);
    }
    url.set_query(query.filter(|q| !q.is_empty()));
    Ok(url)
}

/// `ANY /api/{*path}`: forward to the backend.
pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    OriginalUri(uri): OriginalUri,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, AppError> {
    let path = uri.path().strip_prefix(API_PREFIX).ok_or(AppError::InvalidPath)?;
    let url = upstream_url(&state.config.api_url, path, query.as_deref())?;

    let mut request = state.http.request(method.clone(), url);
    for name in &FORWARDED_REQUEST_HEADERS {
        if let Some(value) = headers.get(name) {
            request = request.header(name.clone(), value.clone());
        }
    }
    if !body.is_empty() {
        request = request.body(body);
    }

    let started = Instant::now();
    let upstream = request.send().await?;
    let status = upstream.status();
    let content_type = upstream.headers().get(CONTENT_TYPE).cloned();
    let bytes = upstream.bytes().await?;
    tracing::debug!(
        %method,
        path = %path,
        status = status.as_u16(),
        elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
        "proxied api request"
    );

    let mut response = (status, bytes).into_response();
    match content_type {
        Some(value) => {
            response.headers_mut().insert(CONTENT_TYPE, value);
        }
        None => {
            response.headers_mut().remove(CONTENT_TYPE);
        }
    }
    Ok(response)
}
