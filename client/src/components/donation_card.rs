//! Card for a single donation in dashboard lists.

use leptos::prelude::*;

use crate::components::directions_link::DirectionsLink;
use crate::net::types::Donation;
use crate::util::donation_form::format_quantity;

/// A donation summary linking to its detail page.
///
/// With `on_claim`, pending donations show a claim button that reports the
/// donation id.
#[component]
pub fn DonationCard(donation: Donation, #[prop(optional)] on_claim: Option<Callback<String>>) -> impl IntoView {
    let href = format!("/donations/{}", donation.id);
    let quantity = format_quantity(donation.quantity, &donation.unit);
    let expiry = donation.expiry_date.map(|d| format!("Expires {}", d.format("%d %b %Y")));
    let status = donation.status;
    let claim = on_claim.filter(|_| status.is_claimable()).map(|on_claim| {
        let id = donation.id.clone();
        view! {
            <button class="btn btn--primary donation-card__claim" on:click=move |_| on_claim.run(id.clone())>
                "Claim"
            </button>
        }
    });

    view! {
        <article class="donation-card">
            <a class="donation-card__title" href=href>{donation.food_type}</a>
            <span class="donation-card__quantity">{quantity}</span>
            <span class=format!("donation-card__status donation-card__status--{}", status.label().to_lowercase())>
                {status.label()}
            </span>
            {expiry.map(|e| view! { <span class="donation-card__expiry">{e}</span> })}
            {donation.donor_name.map(|name| view! { <span class="donation-card__donor">{name}</span> })}
            <DirectionsLink address=donation.pickup_address/>
            {claim}
        </article>
    }
}
