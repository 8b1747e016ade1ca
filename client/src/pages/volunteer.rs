//! Volunteer dashboard: upcoming events and donations awaiting pickup.

use leptos::prelude::*;

use crate::components::donation_card::DonationCard;
use crate::components::error_banner::ErrorBanner;
use crate::components::listing_card::EventCard;
use crate::components::nav_bar::NavBar;
use crate::components::require_session::RequireSession;
use crate::net::api;
use crate::session::{Role, Session};

#[component]
pub fn VolunteerDashboardPage() -> impl IntoView {
    view! {
        <RequireSession role=Role::Volunteer>
            <NavBar/>
            <VolunteerDashboard/>
        </RequireSession>
    }
}

#[component]
fn VolunteerDashboard() -> impl IntoView {
    let session = expect_context::<Session>();
    let events = LocalResource::new({
        let session = session.clone();
        move || {
            let session = session.clone();
            async move { api::authorized(&session, |token| async move { api::fetch_events(&token).await }).await }
        }
    });
    let pickups = LocalResource::new(move || {
        let session = session.clone();
        async move { api::authorized(&session, |token| async move { api::fetch_available_donations(&token).await }).await }
    });

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Volunteer"</h1>
            </header>
            <section class="dashboard-page__section">
                <h2>"Upcoming Events"</h2>
                <Suspense fallback=move || view! { <p>"Loading events..."</p> }>
                    {move || {
                        events
                            .get()
                            .map(|result| match result {
                                Ok(list) if list.is_empty() => {
                                    view! { <p class="dashboard-page__empty">"No upcoming events."</p> }.into_any()
                                }
                                Ok(list) => {
                                    view! {
                                        <div class="dashboard-page__cards">
                                            {list.into_iter().map(|e| view! { <EventCard event=e/> }).collect::<Vec<_>>()}
                                        </div>
                                    }
                                        .into_any()
                                }
                                Err(e) => view! { <ErrorBanner error=e/> }.into_any(),
                            })
                    }}
                </Suspense>
            </section>
            <section class="dashboard-page__section">
                <h2>"Pickups Needed"</h2>
                <Suspense fallback=move || view! { <p>"Loading pickups..."</p> }>
                    {move || {
                        pickups
                            .get()
                            .map(|result| match result {
                                Ok(list) if list.is_empty() => {
                                    view! { <p class="dashboard-page__empty">"Nothing to pick up right now."</p> }
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
            </section>
        </div>
    }
}
