//! Read-only detail view for one donation.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::directions_link::DirectionsLink;
use crate::components::error_banner::ErrorBanner;
use crate::components::nav_bar::NavBar;
use crate::components::require_session::RequireSession;
use crate::net::api;
use crate::net::types::Donation;
use crate::session::Session;
use crate::util::donation_form::format_quantity;

#[component]
pub fn DonationDetailPage() -> impl IntoView {
    view! {
        <RequireSession>
            <NavBar/>
            <DonationDetail/>
        </RequireSession>
    }
}

#[component]
fn DonationDetail() -> impl IntoView {
    let session = expect_context::<Session>();
    let params = use_params_map();
    let donation_id = move || params.read().get("id").unwrap_or_default();

    let donation = LocalResource::new(move || {
        let session = session.clone();
        let id = donation_id();
        async move { api::authorized(&session, |token| async move { api::fetch_donation(&token, &id).await }).await }
    });

    view! {
        <div class="detail-page">
            <Suspense fallback=move || view! { <p>"Loading donation..."</p> }>
                {move || {
                    donation
                        .get()
                        .map(|result| match result {
                            Ok(d) => view! { <DonationFacts donation=d/> }.into_any(),
                            Err(e) => view! { <ErrorBanner error=e/> }.into_any(),
                        })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn DonationFacts(donation: Donation) -> impl IntoView {
    let quantity = format_quantity(donation.quantity, &donation.unit);
    let expiry = donation.expiry_date.map_or_else(|| "Not given".to_owned(), |d| d.format("%d %B %Y").to_string());
    let notes = donation.notes.unwrap_or_default();

    view! {
        <article class="detail-page__card">
            <h1>{donation.food_type}</h1>
            <dl class="detail-page__facts">
                <dt>"Status"</dt>
                <dd>{donation.status.label()}</dd>
                <dt>"Quantity"</dt>
                <dd>{quantity}</dd>
                <dt>"Best before"</dt>
                <dd>{expiry}</dd>
                <dt>"Pickup address"</dt>
                <dd>{donation.pickup_address.clone()}</dd>
                {donation.donor_name.map(|name| view! { <dt>"Donor"</dt><dd>{name}</dd> })}
                {donation.foodbank_name.map(|name| view! { <dt>"Claimed by"</dt><dd>{name}</dd> })}
                {donation.created_at.map(|at| view! { <dt>"Listed"</dt><dd>{at}</dd> })}
            </dl>
            {(!notes.is_empty()).then(|| view! { <p class="detail-page__notes">{notes}</p> })}
            <DirectionsLink address=donation.pickup_address/>
        </article>
    }
}
