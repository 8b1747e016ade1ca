//! New-donation form for donors.
//!
//! SYSTEM CONTEXT
//! ==============
//! The draft is persisted to `localStorage` as the donor types and cleared
//! once the backend accepts the donation. Validation runs client-side first
//! so obvious mistakes never reach the backend.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::nav_bar::NavBar;
use crate::components::require_session::RequireSession;
use crate::net::api;
use crate::session::{Role, Session};
use crate::util::donation_form::{DonationDraft, UNITS};
use crate::util::draft_storage::{self, DONATION_DRAFT_KEY};

#[component]
pub fn NewDonationPage() -> impl IntoView {
    view! {
        <RequireSession role=Role::Donor>
            <NavBar/>
            <NewDonationForm/>
        </RequireSession>
    }
}

#[component]
fn NewDonationForm() -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();
    let draft = RwSignal::new(draft_storage::load_json::<DonationDraft>(DONATION_DRAFT_KEY).unwrap_or_default());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    Effect::new(move || {
        draft.with(|d| draft_storage::save_json(DONATION_DRAFT_KEY, d));
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let donation = match draft.with(DonationDraft::validate) {
            Ok(donation) => donation,
            Err(e) => {
                info.set(e.to_string());
                return;
            }
        };
        busy.set(true);
        info.set("Submitting donation...".to_owned());

        let session = session.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::authorized(&session, |token| async move { api::create_donation(&token, &donation).await }).await {
                Ok(created) => {
                    draft_storage::remove(DONATION_DRAFT_KEY);
                    navigate(&format!("/donations/{}", created.id), NavigateOptions::default());
                }
                Err(e) => {
                    info.set(format!("Donation not submitted: {e}"));
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="form-page">
            <h1>"New Donation"</h1>
            <form class="donation-form" on:submit=on_submit>
                <label class="donation-form__label">
                    "Food type"
                    <input
                        class="donation-form__input"
                        type="text"
                        placeholder="e.g. Bread, tinned vegetables"
                        prop:value=move || draft.with(|d| d.food_type.clone())
                        on:input=move |ev| draft.update(|d| d.food_type = event_target_value(&ev))
                    />
                </label>
                <div class="donation-form__row">
                    <label class="donation-form__label">
                        "Quantity"
                        <input
                            class="donation-form__input"
                            type="number"
                            min="0"
                            step="any"
                            prop:value=move || draft.with(|d| d.quantity.clone())
                            on:input=move |ev| draft.update(|d| d.quantity = event_target_value(&ev))
                        />
                    </label>
                    <label class="donation-form__label">
                        "Unit"
                        <select
                            class="donation-form__input"
                            on:change=move |ev| draft.update(|d| d.unit = event_target_value(&ev))
                        >
                            {UNITS
                                .into_iter()
                                .map(|unit| {
                                    view! {
                                        <option value=unit selected=move || draft.with(|d| d.unit == unit)>
                                            {unit}
                                        </option>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>
                </div>
                <label class="donation-form__label">
                    "Best before"
                    <input
                        class="donation-form__input"
                        type="date"
                        prop:value=move || draft.with(|d| d.expiry_date.clone())
                        on:input=move |ev| draft.update(|d| d.expiry_date = event_target_value(&ev))
                    />
                </label>
                <label class="donation-form__label">
                    "Pickup address"
                    <input
                        class="donation-form__input"
                        type="text"
                        prop:value=move || draft.with(|d| d.pickup_address.clone())
                        on:input=move |ev| draft.update(|d| d.pickup_address = event_target_value(&ev))
                    />
                </label>
                <label class="donation-form__label">
                    "Notes"
                    <textarea
                        class="donation-form__input"
                        rows="3"
                        prop:value=move || draft.with(|d| d.notes.clone())
                        on:input=move |ev| draft.update(|d| d.notes = event_target_value(&ev))
                    ></textarea>
                </label>
                <div class="donation-form__actions">
                    <a class="btn" href=Role::Donor.dashboard_path()>"Cancel"</a>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Submit Donation"
                    </button>
                </div>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="form-page__message">{move || info.get()}</p>
            </Show>
        </div>
    }
}
