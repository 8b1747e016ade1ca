//! Single labelled figure on the statistics views.

use leptos::prelude::*;

use crate::net::types::Statistics;

#[component]
pub fn StatTile(#[prop(into)] label: String, #[prop(into)] value: String) -> impl IntoView {
    view! {
        <div class="stat-tile">
            <span class="stat-tile__value">{value}</span>
            <span class="stat-tile__label">{label}</span>
        </div>
    }
}

/// Labelled figures for a statistics payload, in display order.
#[must_use]
pub fn stat_rows(stats: &Statistics) -> Vec<(&'static str, String)> {
    vec![
        ("Donations", stats.total_donations.to_string()),
        ("Food donated (kg)", format!("{:.1}", stats.total_quantity_kg)),
        ("Meals provided", stats.meals_provided.to_string()),
        ("Active donors", stats.active_donors.to_string()),
        ("Active volunteers", stats.active_volunteers.to_string()),
        ("Food banks", stats.foodbanks.to_string()),
    ]
}

/// Grid of tiles for `stats`.
#[component]
pub fn StatGrid(stats: Statistics) -> impl IntoView {
    view! {
        <div class="stat-grid">
            {stat_rows(&stats)
                .into_iter()
                .map(|(label, value)| view! { <StatTile label=label value=value/> })
                .collect::<Vec<_>>()}
        </div>
    }
}
