//! Individual dashboard: support services nearby.

use leptos::prelude::*;

use crate::components::error_banner::ErrorBanner;
use crate::components::listing_card::ServiceCard;
use crate::components::nav_bar::NavBar;
use crate::components::require_session::RequireSession;
use crate::net::api;
use crate::session::{Role, Session};

#[component]
pub fn IndividualDashboardPage() -> impl IntoView {
    view! {
        <RequireSession role=Role::Individual>
            <NavBar/>
            <IndividualDashboard/>
        </RequireSession>
    }
}

#[component]
fn IndividualDashboard() -> impl IntoView {
    let session = expect_context::<Session>();
    let services = LocalResource::new(move || {
        let session = session.clone();
        async move { api::authorized(&session, |token| async move { api::fetch_services(&token).await }).await }
    });

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Find Food Support"</h1>
            </header>
            <Suspense fallback=move || view! { <p>"Loading services..."</p> }>
                {move || {
                    services
                        .get()
                        .map(|result| match result {
                            Ok(list) if list.is_empty() => {
                                view! { <p class="dashboard-page__empty">"No services are listed yet."</p> }.into_any()
                            }
                            Ok(list) => {
                                view! {
                                    <div class="dashboard-page__cards">
                                        {list.into_iter().map(|s| view! { <ServiceCard service=s/> }).collect::<Vec<_>>()}
                                    </div>
                                }
                                    .into_any()
                            }
                            Err(e) => view! { <ErrorBanner error=e/> }.into_any(),
                        })
                }}
            </Suspense>
        </div>
    }
}
