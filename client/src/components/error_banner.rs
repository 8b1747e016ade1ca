//! Inline error display for failed backend calls.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::ApiError;
use crate::session::LOGIN_PATH;

/// Show `error` inline. An unauthorized error also routes to login, since
/// the session has already been cleared by then.
#[component]
pub fn ErrorBanner(error: ApiError) -> impl IntoView {
    if error.is_unauthorized() {
        let navigate = use_navigate();
        Effect::new(move || navigate(LOGIN_PATH, NavigateOptions::default()));
    }

    view! { <p class="error-banner" role="alert">{error.to_string()}</p> }
}
