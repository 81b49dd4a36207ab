//! Post-submit confirmation page.

use leptos::*;
use leptos_router::A;

#[component]
pub fn ThankYou() -> impl IntoView {
    view! {
        <div class="thank-you">
            <div class="thank-you-icon">"✅"</div>
            <h1>"Thank you!"</h1>
            <p>
                "Your booking has been received. "
                "Our team will reach out to the contact email with pickup details."
            </p>
            <A href="/" class="cta-button">"Back to Home"</A>
        </div>
    }
}
