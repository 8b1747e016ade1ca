use super::*;
use crate::session::SessionError;

fn authorized(role: Role) -> Verdict {
    Verdict::Authorized { role, subject: Some("u1".to_owned()) }
}

#[test]
fn anonymous_visitor_goes_to_login() {
    assert_eq!(guard_redirect(&Verdict::Anonymous, None), Some(Route::Login));
    assert_eq!(guard_redirect(&Verdict::Anonymous, Some(Role::Donor)), Some(Route::Login));
}

#[test]
fn rejected_token_goes_to_login() {
    let verdict = Verdict::Rejected(SessionError::Malformed);
    assert_eq!(guard_redirect(&verdict, None), Some(Route::Login));
}

#[test]
fn any_role_may_view_unrestricted_pages() {
    for role in Role::ALL {
        assert_eq!(guard_redirect(&authorized(role), None), None);
    }
}

#[test]
fn matching_role_renders() {
    assert_eq!(guard_redirect(&authorized(Role::Foodbank), Some(Role::Foodbank)), None);
}

#[test]
fn other_role_is_sent_to_its_own_dashboard() {
    assert_eq!(
        guard_redirect(&authorized(Role::Volunteer), Some(Role::Donor)),
        Some(Route::Dashboard(Role::Volunteer))
    );
}
