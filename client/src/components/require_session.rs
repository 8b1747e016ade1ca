//! Route guard for pages that need a signed-in user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected page wraps its content in [`RequireSession`]. Children own
//! all data fetching and only mount once the stored token has been checked,
//! so a signed-out visitor is routed to login before any request is made.

#[cfg(test)]
#[path = "require_session_test.rs"]
mod require_session_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::session::{Role, Route, Session, Verdict};

/// Where a guarded page should send the visitor instead of rendering.
///
/// `None` means the page may render.
#[must_use]
pub fn guard_redirect(verdict: &Verdict, required: Option<Role>) -> Option<Route> {
    match (verdict, required) {
        (Verdict::Anonymous | Verdict::Rejected(_), _) => Some(Route::Login),
        (Verdict::Authorized { role, .. }, Some(required)) if *role != required => Some(Route::Dashboard(*role)),
        (Verdict::Authorized { .. }, _) => None,
    }
}

/// Render `children` only for a valid session, optionally of one role.
///
/// Server render and first client render are both empty; the check runs
/// after mount because the token lives in browser storage.
#[component]
pub fn RequireSession(#[prop(optional)] role: Option<Role>, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();
    let allowed = RwSignal::new(false);

    Effect::new(move || {
        let verdict = session.verdict();
        match guard_redirect(&verdict, role) {
            None => allowed.set(true),
            Some(route) => {
                if let Verdict::Rejected(e) = &verdict {
                    log::warn!("session token rejected: {e}");
                }
                navigate(route.path(), NavigateOptions { replace: true, ..NavigateOptions::default() });
            }
        }
    });

    view! {
        <Show when=move || allowed.get()>
            {children()}
        </Show>
    }
}
