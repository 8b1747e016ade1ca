//! Top navigation shown on every signed-in page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::session::{LOGIN_PATH, Session};

#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();

    let verdict = session.verdict();
    let role = verdict.role();
    let home = role.map_or(LOGIN_PATH, |r| r.dashboard_path());
    let role_label = role.map(|r| r.label()).unwrap_or_default();

    let on_logout = move |_| {
        session.sign_out();
        navigate(LOGIN_PATH, NavigateOptions::default());
    };

    view! {
        <nav class="nav-bar">
            <a class="nav-bar__brand" href=home>"FoodShare"</a>
            <a class="nav-bar__link" href="/statistics">"Statistics"</a>
            <span class="nav-bar__role">{role_label}</span>
            <button class="btn nav-bar__logout" on:click=on_logout>
                "Log out"
            </button>
        </nav>
    }
}
