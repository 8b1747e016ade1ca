//! `/dashboard`: the session router entry point.
//!
//! SYSTEM CONTEXT
//! ==============
//! Login and registration land here. The page renders no protected content;
//! after mount it evaluates the stored token once and replaces itself with
//! the login page or the role's dashboard.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::session::{Session, SessionRouter};

#[component]
pub fn DashboardRouterPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();

    Effect::new(move || {
        SessionRouter::new(&session).evaluate(|path| {
            navigate(path, NavigateOptions { replace: true, ..NavigateOptions::default() });
        });
    });

    view! {
        <div class="dashboard-router">
            <p>"Opening your dashboard..."</p>
        </div>
    }
}
