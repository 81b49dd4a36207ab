//! Review step: read-only projection of the full draft.
//!
//! No inputs and no validation here; the user either confirms or goes back
//! to edit.

use leptos::*;

use crate::types::BookingDraft;

#[component]
pub fn ReviewStep(draft: ReadSignal<BookingDraft>) -> impl IntoView {
    view! {
        <div class="form-step review">
            <div class="review-row">
                <span class="review-label">"Pickup"</span>
                <span class="review-value">{move || draft.get().pickup_location}</span>
            </div>
            <div class="review-row">
                <span class="review-label">"Drop-off"</span>
                <span class="review-value">{move || draft.get().dropoff_location}</span>
            </div>
            <div class="review-row">
                <span class="review-label">"Shipment date"</span>
                <span class="review-value">{move || draft.get().formatted_date()}</span>
            </div>
            <div class="review-row">
                <span class="review-label">"Weight"</span>
                <span class="review-value">{move || format!("{} kg", draft.get().cargo_weight)}</span>
            </div>
            <div class="review-row">
                <span class="review-label">"Volume"</span>
                <span class="review-value">{move || format!("{} m³", draft.get().cargo_volume)}</span>
            </div>
            <div class="review-row">
                <span class="review-label">"Temperature"</span>
                <span class="review-value">{move || format!("{:.2}", draft.get().temperature)}</span>
            </div>
            <div class="review-row">
                <span class="review-label">"Fragile handling"</span>
                <span class="review-value">
                    {move || if draft.get().fragile { "Yes" } else { "No" }}
                </span>
            </div>
            <div class="review-row">
                <span class="review-label">"Contact"</span>
                <span class="review-value">{move || draft.get().email}</span>
            </div>
            <div class="review-row total">
                <span class="review-label">"Estimated price"</span>
                <span class="review-value">{move || draft.get().formatted_price()}</span>
            </div>
        </div>
    }
}
