use std::time::Duration;

use axum::Json;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::extract::Path;
use axum::{Router, extract::RawQuery};

use super::*;
use crate::config::Config;

fn base(raw: &str) -> Url {
    Url::parse(raw).unwrap()
}

// =============================================================================
// upstream_url
// =============================================================================

#[test]
fn upstream_url_joins_under_base_path() {
    let url = upstream_url(&base("http://backend:8000/v1/"), "donations/mine", None).unwrap();
    assert_eq!(url.as_str(), "http://backend:8000/v1/donations/mine");
}

#[test]
fn upstream_url_keeps_query() {
    let url = upstream_url(&base("http://backend/"), "donations", Some("status=pending&page=2")).unwrap();
    assert_eq!(url.as_str(), "http://backend/donations?status=pending&page=2");
}

#[test]
fn upstream_url_drops_empty_query() {
    let url = upstream_url(&base("http://backend/"), "statistics", Some("")).unwrap();
    assert_eq!(url.as_str(), "http://backend/statistics");
}

#[test]
fn upstream_url_strips_leading_slashes() {
    let url = upstream_url(&base("http://backend/api/"), "//events", None).unwrap();
    assert_eq!(url.as_str(), "http://backend/api/events");
}

#[test]
fn upstream_url_rejects_dot_segments() {
    let root = base("http://backend/api/");
    for path in ["../admin", "donations/../../x", "./events", "%2e%2e/admin", "%2E%2E/admin", "a\\b", ""] {
        assert!(matches!(upstream_url(&root, path, None), Err(AppError::InvalidPath)), "{path:?}");
    }
}

#[test]
fn upstream_url_keeps_encoded_delimiters_inside_segments() {
    let root = base("http://backend/api/");
    let url = upstream_url(&root, "donations/a%3Fb%23c", None).unwrap();
    assert_eq!(url.as_str(), "http://backend/api/donations/a%3Fb%23c");
    assert_eq!(url.query(), None);
    assert_eq!(url.fragment(), None);
}

#[test]
fn upstream_url_rejects_absolute_urls() {
    let root = base("http://backend/api/");
    assert!(matches!(upstream_url(&root, "http://evil.example/x", None), Err(AppError::InvalidPath)));
}

// =============================================================================
// forward (against a local fake backend)
// =============================================================================

async fn echo(headers: HeaderMap, RawQuery(query): RawQuery, body: String) -> Json<serde_json::Value> {
    let auth = headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok()).map(str::to_owned);
    Json(serde_json::json!({ "authorization": auth, "query": query, "body": body }))
}

async fn echo_id(Path(id): Path<String>, RawQuery(query): RawQuery) -> Json<serde_json::Value> {
    Json(serde_json::json!({ "id": id, "query": query }))
}

async fn rejected() -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::UNAUTHORIZED, Json(serde_json::json!({ "detail": "Could not validate credentials" })))
}

async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

async fn spawn_proxy(backend: &str) -> String {
    let config = Config {
        port: 0,
        api_url: base(&format!("{backend}/")),
        api_timeout: Duration::from_secs(5),
    };
    let state = AppState::new(config).unwrap();
    spawn(crate::routes::api_routes(state)).await
}

#[tokio::test]
async fn forward_replays_method_auth_query_and_body() {
    let backend = spawn(Router::new().route("/donations", post(echo))).await;
    let proxy = spawn_proxy(&backend).await;

    let resp = reqwest::Client::new()
        .post(format!("{proxy}/api/donations?draft=1"))
        .header(AUTHORIZATION, "Bearer tok")
        .header(CONTENT_TYPE, "application/json")
        .body(r#"{"food_type":"Bread"}"#)
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers().get(CONTENT_TYPE).unwrap(), "application/json");
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["authorization"], "Bearer tok");
    assert_eq!(body["query"], "draft=1");
    assert_eq!(body["body"], r#"{"food_type":"Bread"}"#);
}

#[tokio::test]
async fn forward_keeps_encoded_question_mark_in_path() {
    let backend = spawn(Router::new().route("/donations/{id}", get(echo_id))).await;
    let proxy = spawn_proxy(&backend).await;

    let resp = reqwest::get(format!("{proxy}/api/donations/a%3Fb?page=1")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["id"], "a?b");
    assert_eq!(body["query"], "page=1");
}

#[tokio::test]
async fn forward_passes_backend_errors_through() {
    let backend = spawn(Router::new().route("/statistics", get(rejected))).await;
    let proxy = spawn_proxy(&backend).await;

    let resp = reqwest::get(format!("{proxy}/api/statistics")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["detail"], "Could not validate credentials");
}

#[tokio::test]
async fn forward_unreachable_backend_is_bad_gateway() {
    // Bind then drop to get a port nothing listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let dead = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);
    let proxy = spawn_proxy(&dead).await;

    let resp = reqwest::get(format!("{proxy}/api/events")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["detail"], "backend unavailable");
}

#[tokio::test]
async fn healthz_is_ok() {
    let proxy = spawn_proxy("http://127.0.0.1:9").await;
    let resp = reqwest::get(format!("{proxy}/healthz")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}
