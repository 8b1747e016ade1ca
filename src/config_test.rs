use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_apply_when_only_api_url_set() {
    let cfg = Config::from_lookup(lookup(&[("FOODSHARE_API_URL", "http://backend:8000")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.api_timeout, Duration::from_secs(DEFAULT_API_TIMEOUT_SECS));
    assert_eq!(cfg.api_url.as_str(), "http://backend:8000/");
}

#[test]
fn api_url_is_required() {
    let err = Config::from_lookup(lookup(&[])).unwrap_err();
    assert!(matches!(err, ConfigError::Missing("FOODSHARE_API_URL")));
    let err = Config::from_lookup(lookup(&[("FOODSHARE_API_URL", "   ")])).unwrap_err();
    assert!(matches!(err, ConfigError::Missing("FOODSHARE_API_URL")));
}

#[test]
fn api_url_gains_trailing_slash_and_drops_query() {
    let cfg = Config::from_lookup(lookup(&[("FOODSHARE_API_URL", "https://api.example.org/v1?x=1#frag")])).unwrap();
    assert_eq!(cfg.api_url.as_str(), "https://api.example.org/v1/");
}

#[test]
fn api_url_rejects_other_schemes() {
    let err = Config::from_lookup(lookup(&[("FOODSHARE_API_URL", "ftp://files.example.org")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { key: "FOODSHARE_API_URL", .. }));
}

#[test]
fn api_url_rejects_garbage() {
    let err = Config::from_lookup(lookup(&[("FOODSHARE_API_URL", "not a url")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { key: "FOODSHARE_API_URL", .. }));
}

#[test]
fn port_and_timeout_parse() {
    let cfg = Config::from_lookup(lookup(&[
        ("FOODSHARE_API_URL", "http://backend"),
        ("PORT", " 8080 "),
        ("FOODSHARE_API_TIMEOUT_SECS", "3"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.api_timeout, Duration::from_secs(3));
}

#[test]
fn invalid_port_reports_key_and_value() {
    let err = Config::from_lookup(lookup(&[("FOODSHARE_API_URL", "http://backend"), ("PORT", "eighty")])).unwrap_err();
    assert!(err.to_string().starts_with("invalid PORT=\"eighty\""), "{err}");
}

#[test]
fn zero_timeout_is_rejected() {
    let err = Config::from_lookup(lookup(&[("FOODSHARE_API_URL", "http://backend"), ("FOODSHARE_API_TIMEOUT_SECS", "0")]))
        .unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { key: "FOODSHARE_API_TIMEOUT_SECS", .. }));
}
