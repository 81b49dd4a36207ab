//! Cargo details step: weight, volume, handling options and contact email.
//!
//! Weight and volume edits recompute the derived price immediately, so the
//! estimate shown at the bottom tracks the inputs.

use leptos::*;
use web_sys::HtmlInputElement;

use crate::config::DEFAULT_TEMPERATURE;
use crate::types::{BookingDraft, Field, FieldErrors};
use super::FieldMessage;

#[component]
pub fn CargoStep(
    draft: ReadSignal<BookingDraft>,
    set_draft: WriteSignal<BookingDraft>,
    errors: ReadSignal<FieldErrors>,
) -> impl IntoView {
    view! {
        <div class="form-step">
            <div class="form-group">
                <label for="cargoWeight">"Cargo Weight (kg)"</label>
                <input
                    type="number"
                    id="cargoWeight"
                    min="0.1"
                    step="0.1"
                    placeholder="e.g. 120"
                    prop:value=move || draft.get().cargo_weight
                    on:input=move |ev| {
                        set_draft.update(|d| {
                            d.cargo_weight = event_target_value(&ev);
                            d.recompute_pricing();
                        })
                    }
                />
                <FieldMessage errors=errors field=Field::CargoWeight/>
            </div>

            <div class="form-group">
                <label for="cargoVolume">"Cargo Volume (m³)"</label>
                <input
                    type="number"
                    id="cargoVolume"
                    min="0.1"
                    step="0.1"
                    placeholder="e.g. 2.5"
                    prop:value=move || draft.get().cargo_volume
                    on:input=move |ev| {
                        set_draft.update(|d| {
                            d.cargo_volume = event_target_value(&ev);
                            d.recompute_pricing();
                        })
                    }
                />
                <FieldMessage errors=errors field=Field::CargoVolume/>
            </div>

            <div class="form-group">
                <label for="temperature">"Transport Temperature"</label>
                <input
                    type="range"
                    id="temperature"
                    min="0"
                    max="1"
                    step="0.01"
                    prop:value=move || draft.get().temperature.to_string()
                    on:input=move |ev| {
                        let value = event_target_value(&ev)
                            .parse()
                            .unwrap_or(DEFAULT_TEMPERATURE);
                        set_draft.update(|d| d.temperature = value)
                    }
                />
                <span class="range-value">
                    {move || format!("{:.2}", draft.get().temperature)}
                </span>
            </div>

            <div class="form-group checkbox">
                <label for="fragile">
                    <input
                        type="checkbox"
                        id="fragile"
                        prop:checked=move || draft.get().fragile
                        on:change=move |ev| {
                            let checked = event_target::<HtmlInputElement>(&ev).checked();
                            set_draft.update(|d| d.fragile = checked)
                        }
                    />
                    "Fragile cargo"
                </label>
            </div>

            <div class="form-group">
                <label for="email">"Contact Email"</label>
                <input
                    type="email"
                    id="email"
                    placeholder="you@company.com"
                    prop:value=move || draft.get().email
                    on:input=move |ev| {
                        set_draft.update(|d| d.email = event_target_value(&ev))
                    }
                />
                <FieldMessage errors=errors field=Field::Email/>
            </div>

            <div class="price-estimate">
                "Estimated price: "
                <strong>{move || draft.get().formatted_price()}</strong>
            </div>
        </div>
    }
}
