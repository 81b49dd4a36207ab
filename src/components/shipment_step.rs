//! Shipment details step: pickup, drop-off and date.

use leptos::*;

use crate::types::{BookingDraft, Field, FieldErrors};
use super::FieldMessage;

/// Today's date in the format the date input expects for its `min` bound.
///
/// Past dates are discouraged at the input level only; the validator
/// requires the date but does not compare it against today.
fn today_iso() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

#[component]
pub fn ShipmentStep(
    draft: ReadSignal<BookingDraft>,
    set_draft: WriteSignal<BookingDraft>,
    errors: ReadSignal<FieldErrors>,
) -> impl IntoView {
    view! {
        <div class="form-step">
            <div class="form-group">
                <label for="pickupLocation">"Pickup Location"</label>
                <input
                    type="text"
                    id="pickupLocation"
                    placeholder="City or address"
                    prop:value=move || draft.get().pickup_location
                    on:input=move |ev| {
                        set_draft.update(|d| d.pickup_location = event_target_value(&ev))
                    }
                />
                <FieldMessage errors=errors field=Field::PickupLocation/>
            </div>

            <div class="form-group">
                <label for="dropoffLocation">"Drop-off Location"</label>
                <input
                    type="text"
                    id="dropoffLocation"
                    placeholder="City or address"
                    prop:value=move || draft.get().dropoff_location
                    on:input=move |ev| {
                        set_draft.update(|d| d.dropoff_location = event_target_value(&ev))
                    }
                />
                <FieldMessage errors=errors field=Field::DropoffLocation/>
            </div>

            <div class="form-group">
                <label for="shipmentDate">"Shipment Date"</label>
                <input
                    type="date"
                    id="shipmentDate"
                    min=today_iso()
                    prop:value=move || draft.get().shipment_date
                    on:input=move |ev| {
                        set_draft.update(|d| d.shipment_date = event_target_value(&ev))
                    }
                />
                <FieldMessage errors=errors field=Field::ShipmentDate/>
            </div>
        </div>
    }
}
