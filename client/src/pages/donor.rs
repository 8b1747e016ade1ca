//! Donor dashboard: the donor's own donations.

use leptos::prelude::*;

use crate::components::donation_card::DonationCard;
use crate::components::error_banner::ErrorBanner;
use crate::components::nav_bar::NavBar;
use crate::components::require_session::RequireSession;
use crate::net::api;
use crate::session::{Role, Session};

#[component]
pub fn DonorDashboardPage() -> impl IntoView {
    view! {
        <RequireSession role=Role::Donor>
            <NavBar/>
            <DonorDashboard/>
        </RequireSession>
    }
}

#[component]
fn DonorDashboard() -> impl IntoView {
    let session = expect_context::<Session>();
    let donations = LocalResource::new(move || {
        let session = session.clone();
        async move { api::authorized(&session, |token| async move { api::fetch_my_donations(&token).await }).await }
    });

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"My Donations"</h1>
                <a class="btn btn--primary" href="/donations/new">"+ New Donation"</a>
            </header>
            <Suspense fallback=move || view! { <p>"Loading donations..."</p> }>
                {move || {
                    donations
                        .get()
                        .map(|result| match result {
                            Ok(list) if list.is_empty() => {
                                view! {
                                    <p class="dashboard-page__empty">
                                        "You have not listed any donations yet."
                                    </p>
                                }
                                    .into_any()
                            }
                            Ok(list) => {
                                view! {
                                    <div class="dashboard-page__cards">
                                        {list
                                            .into_iter()
                                            .map(|d| view! { <DonationCard donation=d/> })
                                            .collect::<Vec<_>>()}
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
