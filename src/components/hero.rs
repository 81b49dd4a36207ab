//! Hero section component

use leptos::*;
use leptos_router::A;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Ship cargo without the paperwork"</h1>
            <p class="subtitle">
                "Door-to-door freight for businesses of any size. "
                "Get an instant estimate and book a pickup in three short steps."
            </p>
            <A href="/booking" class="cta-button">"Book a Shipment"</A>
        </div>
    }
}
