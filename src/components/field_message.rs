//! Inline validation message for a single field.

use leptos::*;

use crate::types::{Field, FieldErrors};

/// Renders the field's error under its control, or nothing when valid.
#[component]
pub fn FieldMessage(errors: ReadSignal<FieldErrors>, field: Field) -> impl IntoView {
    view! {
        <Show
            when=move || errors.get().get(field).is_some()
            fallback=|| view! { }
        >
            <div class="error-message">
                {move || errors.get().get(field).unwrap_or_default()}
            </div>
        </Show>
    }
}
