//! Food bank dashboard: claimable donations and platform totals.

use leptos::prelude::*;

use crate::components::donation_card::DonationCard;
use crate::components::error_banner::ErrorBanner;
use crate::components::nav_bar::NavBar;
use crate::components::require_session::RequireSession;
use crate::components::stat_tile::StatGrid;
use crate::net::api;
use crate::session::{Role, Session};

#[component]
pub fn FoodbankDashboardPage() -> impl IntoView {
    view! {
        <RequireSession role=Role::Foodbank>
            <NavBar/>
            <FoodbankDashboard/>
        </RequireSession>
    }
}

#[component]
fn FoodbankDashboard() -> impl IntoView {
    let session = expect_context::<Session>();
    let claim_error = RwSignal::new(None::<String>);

    let available = LocalResource::new({
        let session = session.clone();
        move || {
            let session = session.clone();
            async move { api::authorized(&session, |token| async move { api::fetch_available_donations(&token).await }).await }
        }
    });
    let stats = LocalResource::new({
        let session = session.clone();
        move || {
            let session = session.clone();
            async move { api::authorized(&session, |token| async move { api::fetch_statistics(&token).await }).await }
        }
    });

    let on_claim = Callback::new(move |id: String| {
        let session = session.clone();
        claim_error.set(None);
        leptos::task::spawn_local(async move {
            match api::authorized(&session, |token| async move { api::claim_donation(&token, &id).await }).await {
                Ok(donation) => {
                    log::info!("claimed donation {}", donation.id);
                    available.refetch();
                }
                Err(e) => claim_error.set(Some(format!("Could not claim donation: {e}"))),
            }
        });
    });

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Food Bank"</h1>
            </header>
            <section class="dashboard-page__section">
                <h2>"Overview"</h2>
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
            </section>
            <section class="dashboard-page__section">
                <h2>"Available Donations"</h2>
                <Show when=move || claim_error.get().is_some()>
                    <p class="error-banner" role="alert">{move || claim_error.get().unwrap_or_default()}</p>
                </Show>
                <Suspense fallback=move || view! { <p>"Loading donations..."</p> }>
                    {move || {
                        available
                            .get()
                            .map(|result| match result {
                                Ok(list) if list.is_empty() => {
                                    view! { <p class="dashboard-page__empty">"No donations are waiting for pickup."</p> }
                                        .into_any()
                                }
                                Ok(list) => {
                                    view! {
                                        <div class="dashboard-page__cards">
                                            {list
                                                .into_iter()
                                                .map(|d| view! { <DonationCard donation=d on_claim=on_claim/> })
                                                .collect::<Vec<_>>()}
                                        </div>
                                    }
                                        .into_any()
                                }
                                Err(e) => view! { <ErrorBanner error=e/> }.into_any(),
                            })
                    }}
                </Suspense>
            </section>
        </div>
    }
}
