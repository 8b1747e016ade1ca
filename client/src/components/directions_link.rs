//! "View directions" link for an address.

use leptos::prelude::*;

use crate::util::directions::directions_url;

/// Opens maps directions in a new tab. Renders nothing for a blank address.
#[component]
pub fn DirectionsLink(#[prop(into)] address: String) -> impl IntoView {
    directions_url(&address).map(|href| {
        view! {
            <a class="directions-link" href=href target="_blank" rel="noopener noreferrer">
                "View directions"
            </a>
        }
    })
}
