//! Platform statistics for any signed-in user.

use leptos::prelude::*;

use crate::components::error_banner::ErrorBanner;
use crate::components::nav_bar::NavBar;
use crate::components::require_session::RequireSession;
use crate::components::stat_tile::StatGrid;
use crate::net::api;
use crate::session::Session;

#[component]
pub fn StatisticsPage() -> impl IntoView {
    view! {
        <RequireSession>
            <NavBar/>
            <StatisticsView/>
        </RequireSession>
    }
}

#[component]
fn StatisticsView() -> impl IntoView {
    let session = expect_context::<Session>();
    let stats = LocalResource::new(move || {
        let session = session.clone();
        async move { api::authorized(&session, |token| async move { api::fetch_statistics(&token).await }).await }
    });

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Impact"</h1>
            </header>
            <Suspense fallback=move || view! { <p>"Loading statistics..."</p> }>
                {move || {
                    stats
                        .get()
                        .map(|result| match result {
                            Ok(stats) => view! { <StatGrid stats=stats/> }.into_any(),
                            Err(e) => view! { <ErrorBanner error=e/> }.into_any(),
                        })
                }}
            </Suspense>
        </div>
    }
}
