use base64::Engine;
use base64::engine::general_purpose::{URL_SAFE, URL_SAFE_NO_PAD};

use super::*;

fn token_with_payload(payload: &str) -> String {
    let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload);
    format!("{header}.{body}.c2lnbmF0dXJl")
}

#[test]
fn decode_reads_role_and_subject() {
    let claims = decode_claims(&token_with_payload(r#"{"role":"donor","sub":"u1"}"#));
    let claims = claims.ok();
    assert_eq!(
        claims,
        Some(Claims { sub: Some("u1".to_owned()), role: Some("donor".to_owned()), name: None, exp: None })
    );
}

#[test]
fn decode_ignores_unknown_claims() {
    let token = token_with_payload(r#"{"role":"volunteer","sub":"7","iat":1,"scope":["a"]}"#);
    let claims = decode_claims(&token).ok();
    assert_eq!(claims.and_then(|c| c.role().ok()), Some(Role::Volunteer));
}

#[test]
fn decode_accepts_padded_payload() {
    let header = URL_SAFE_NO_PAD.encode("{}");
    let body = URL_SAFE.encode(r#"{"role":"foodbank"}"#);
    assert!(body.ends_with('='), "fixture should carry padding: {body}");
    let claims = decode_claims(&format!("{header}.{body}.sig")).ok();
    assert_eq!(claims.and_then(|c| c.role().ok()), Some(Role::Foodbank));
}

#[test]
fn decode_rejects_wrong_segment_count() {
    assert!(matches!(decode_claims("only-one"), Err(SessionError::Malformed)));
    assert!(matches!(decode_claims("a.b"), Err(SessionError::Malformed)));
    assert!(matches!(decode_claims("a.b.c.d"), Err(SessionError::Malformed)));
    assert!(matches!(decode_claims("a..c"), Err(SessionError::Malformed)));
}

#[test]
fn decode_rejects_invalid_base64() {
    assert!(matches!(decode_claims("h.***.s"), Err(SessionError::Encoding(_))));
}

#[test]
fn decode_rejects_non_json_payload() {
    let result = decode_claims(&token_with_payload("not json at all"));
    assert!(matches!(result, Err(SessionError::Payload(_))));
}

#[test]
fn decode_rejects_json_that_is_not_an_object() {
    let result = decode_claims(&token_with_payload(r#""donor""#));
    assert!(matches!(result, Err(SessionError::Payload(_))));
}

#[test]
fn role_claim_missing_is_an_error() {
    let claims = Claims { sub: Some("u1".to_owned()), ..Claims::default() };
    assert!(matches!(claims.role(), Err(SessionError::MissingRole)));
}

#[test]
fn role_claim_unknown_is_an_error() {
    let claims = Claims { role: Some("admin".to_owned()), ..Claims::default() };
    assert!(matches!(claims.role(), Err(SessionError::UnknownRole(raw)) if raw == "admin"));
}

#[test]
fn decode_rejects_json_array_payload() {
    let result = decode_claims(&token_with_payload(r#"["u1","donor"]"#));
    assert!(matches!(result, Err(SessionError::Payload(_))));
}

#[test]
fn decode_accepts_numeric_subject() {
    let claims = decode_claims(&token_with_payload(r#"{"role":"donor","sub":42}"#)).ok();
    assert_eq!(claims.as_ref().and_then(|c| c.sub.as_deref()), Some("42"));
    assert_eq!(claims.and_then(|c| c.role().ok()), Some(Role::Donor));
}

#[test]
fn decode_accepts_null_subject() {
    let claims = decode_claims(&token_with_payload(r#"{"role":"donor","sub":null}"#)).ok();
    assert_eq!(claims.map(|c| c.sub), Some(None));
}

#[test]
fn decode_accepts_fractional_expiry() {
    let claims = decode_claims(&token_with_payload(r#"{"role":"donor","exp":1700000000.75}"#)).ok();
    assert_eq!(claims.and_then(|c| c.exp), Some(1_700_000_000));
}

#[test]
fn decode_rejects_structured_subject() {
    let result = decode_claims(&token_with_payload(r#"{"role":"donor","sub":{"id":1}}"#));
    assert!(matches!(result, Err(SessionError::Payload(_))));
}
