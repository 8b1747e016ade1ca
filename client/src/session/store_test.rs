use super::*;
use crate::session::Role;

const VOLUNTEER_TOKEN: &str = "e30.eyJyb2xlIjoidm9sdW50ZWVyIiwic3ViIjoidjEifQ.sig";

#[test]
fn memory_store_starts_empty() {
    assert_eq!(MemoryTokenStore::default().load(), None);
}

#[test]
fn memory_store_save_then_clear() {
    let store = MemoryTokenStore::default();
    store.save("abc");
    assert_eq!(store.load().as_deref(), Some("abc"));
    store.clear();
    assert_eq!(store.load(), None);
}

#[test]
fn memory_store_treats_empty_token_as_absent() {
    assert_eq!(MemoryTokenStore::with_token("").load(), None);
}

#[test]
fn browser_store_is_inert_off_browser() {
    let store = BrowserTokenStore;
    store.save("abc");
    assert_eq!(store.load(), None);
}

#[test]
fn session_bearer_formats_header() {
    let session = Session::new(MemoryTokenStore::with_token("tok"));
    assert_eq!(session.bearer().as_deref(), Some("Bearer tok"));
}

#[test]
fn session_without_token_has_no_bearer() {
    let session = Session::new(MemoryTokenStore::default());
    assert_eq!(session.bearer(), None);
    assert!(matches!(session.claims(), Err(SessionError::Missing)));
}

#[test]
fn session_sign_in_trims_and_stores() {
    let session = Session::new(MemoryTokenStore::default());
    session.sign_in(&format!("  {VOLUNTEER_TOKEN}\n"));
    assert_eq!(session.token().as_deref(), Some(VOLUNTEER_TOKEN));
    assert_eq!(session.verdict().role(), Some(Role::Volunteer));
}

#[test]
fn session_sign_out_clears_token() {
    let session = Session::new(MemoryTokenStore::with_token(VOLUNTEER_TOKEN));
    session.sign_out();
    assert_eq!(session.token(), None);
    assert!(matches!(session.verdict(), Verdict::Anonymous));
}

#[test]
fn session_clones_share_the_store() {
    let session = Session::new(MemoryTokenStore::default());
    let other = session.clone();
    session.sign_in("shared");
    assert_eq!(other.token().as_deref(), Some("shared"));
}

#[test]
fn session_claims_expose_subject() {
    let session = Session::new(MemoryTokenStore::with_token(VOLUNTEER_TOKEN));
    assert_eq!(session.claims().ok().and_then(|c| c.sub).as_deref(), Some("v1"));
}
