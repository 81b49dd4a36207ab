//! Footer component

use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer>
            <div>"Copyright © 2026 FreightFlow • Powered by " <span class="rust-badge">"🦀 Rust + Leptos"</span></div>
            <div class="footer-links">
                <a href="https://github.com/freightflow" class="footer-link" target="_blank">
                    "GitHub"
                </a>
                <a href="mailto:hello@freightflow.example.com" class="footer-link">
                    "Contact"
                </a>
            </div>
        </footer>
    }
}
