use leptos::*;
use leptos_router::A;

use crate::config::APP_NAME;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header>
            <div class="header-left">
                <A href="/" class="logo">{APP_NAME}</A>
            </div>
            <div class="header-right">
                <nav class="nav-links">
                    <A href="/" class="nav-link">"Home"</A>
                    <A href="/booking" class="nav-link">"Book a Shipment"</A>
                </nav>
            </div>
        </header>
    }
}
