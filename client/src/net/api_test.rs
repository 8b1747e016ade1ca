use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;
use crate::session::MemoryTokenStore;

#[test]
fn endpoint_joins_under_api_base() {
    assert_eq!(endpoint("statistics"), "/api/statistics");
    assert_eq!(endpoint("/auth/login"), "/api/auth/login");
}

#[test]
fn donation_endpoints_embed_id() {
    assert_eq!(donation_endpoint("d-7"), "/api/donations/d-7");
    assert_eq!(claim_endpoint("42"), "/api/donations/42/claim");
}

#[test]
fn error_from_response_401_is_unauthorized() {
    let err = error_from_response(401, r#"{"detail":"Could not validate credentials"}"#);
    assert_eq!(err, ApiError::Unauthorized);
    assert!(err.is_unauthorized());
}

#[test]
fn error_from_response_reads_detail_message() {
    let err = error_from_response(400, r#"{"detail":"Email already registered"}"#);
    assert_eq!(err, ApiError::Status { status: 400, detail: "Email already registered".to_owned() });
    assert_eq!(err.to_string(), "Email already registered");
}

#[test]
fn error_from_response_reads_validation_list() {
    let err = error_from_response(422, r#"{"detail":[{"loc":["body","email"],"msg":"field required"}]}"#);
    assert_eq!(err.to_string(), "email: field required");
}

#[test]
fn error_from_response_falls_back_to_status() {
    let err = error_from_response(503, "<html>upstream down</html>");
    assert_eq!(err.to_string(), "request failed: 503");
    let err = error_from_response(500, r#"{"detail":""}"#);
    assert_eq!(err.to_string(), "request failed: 500");
}

#[tokio::test]
async fn calls_are_unavailable_off_browser() {
    assert_eq!(fetch_statistics("tok").await, Err(ApiError::Unavailable));
    assert_eq!(fetch_donation("tok", "1").await, Err(ApiError::Unavailable));
}

#[tokio::test]
async fn authorized_without_token_issues_no_call() {
    let session = Session::new(MemoryTokenStore::default());
    let calls = AtomicUsize::new(0);
    let result: Result<(), ApiError> = authorized(&session, |_| async {
        calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    })
    .await;
    assert_eq!(result, Err(ApiError::Unauthorized));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn authorized_passes_stored_token() {
    let session = Session::new(MemoryTokenStore::with_token("tok-1"));
    let result = authorized(&session, |token| async move { Ok(token) }).await;
    assert_eq!(result.as_deref(), Ok("tok-1"));
    assert_eq!(session.token().as_deref(), Some("tok-1"));
}

#[tokio::test]
async fn authorized_signs_out_on_401() {
    let session = Session::new(MemoryTokenStore::with_token("stale"));
    let result: Result<(), ApiError> = authorized(&session, |_| async { Err(ApiError::Unauthorized) }).await;
    assert!(result.is_err());
    assert_eq!(session.token(), None);
}

#[tokio::test]
async fn authorized_keeps_session_on_other_errors() {
    let session = Session::new(MemoryTokenStore::with_token("tok"));
    let result: Result<(), ApiError> =
        authorized(&session, |_| async { Err(ApiError::Status { status: 500, detail: "boom".to_owned() }) }).await;
    assert!(result.is_err());
    assert_eq!(session.token().as_deref(), Some("tok"));
}
