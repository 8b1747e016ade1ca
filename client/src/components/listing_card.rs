//! Cards for service listings and volunteer events.

use leptos::prelude::*;

use crate::components::directions_link::DirectionsLink;
use crate::net::types::{Event, ServiceListing};

#[component]
pub fn ServiceCard(service: ServiceListing) -> impl IntoView {
    view! {
        <article class="listing-card">
            <h3 class="listing-card__title">{service.name}</h3>
            {service.provider.map(|p| view! { <span class="listing-card__provider">{p}</span> })}
            <p class="listing-card__body">{service.description}</p>
            {service.hours.map(|h| view! { <span class="listing-card__hours">{h}</span> })}
            {service.phone.map(|p| {
                let tel = format!("tel:{p}");
                view! { <a class="listing-card__phone" href=tel>{p}</a> }
            })}
            <span class="listing-card__address">{service.address.clone()}</span>
            <DirectionsLink address=service.address/>
        </article>
    }
}

#[component]
pub fn EventCard(event: Event) -> impl IntoView {
    let when = match (event.starts_at, event.ends_at) {
        (Some(start), Some(end)) => format!("{start} to {end}"),
        (Some(start), None) => start,
        _ => String::new(),
    };
    let needed = event.volunteers_needed.map(|n| format!("{n} volunteers needed"));

    view! {
        <article class="listing-card listing-card--event">
            <h3 class="listing-card__title">{event.title}</h3>
            <span class="listing-card__when">{when}</span>
            <p class="listing-card__body">{event.description}</p>
            {needed.map(|n| view! { <span class="listing-card__needed">{n}</span> })}
            <span class="listing-card__address">{event.location.clone()}</span>
            <DirectionsLink address=event.location/>
        </article>
    }
}
