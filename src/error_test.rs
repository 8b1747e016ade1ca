use super::*;

#[test]
fn invalid_path_is_bad_request() {
    assert_eq!(AppError::InvalidPath.status(), StatusCode::BAD_REQUEST);
}

#[test]
fn timeout_is_gateway_timeout() {
    assert_eq!(AppError::UpstreamTimeout.status(), StatusCode::GATEWAY_TIMEOUT);
}

#[tokio::test]
async fn response_body_uses_detail_envelope() {
    let response = AppError::InvalidPath.into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, serde_json::json!({ "detail": "invalid API path" }));
}
