//! FreightFlow - Frontend Rust/Leptos Application
//!
//! A client-rendered WebAssembly frontend for booking cargo shipments
//! through a three-step form on the FreightFlow marketing site.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (navbar)                                             │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Routes                                                      │
//! │  ├── /           Hero (landing, call-to-action)             │
//! │  ├── /booking    BookingForm                                │
//! │  │               ├── ShipmentStep | CargoStep | ReviewStep  │
//! │  │               └── Back / Next / Confirm controls         │
//! │  └── /thank-you  ThankYou (confirmation)                    │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (BookingDraft, FieldErrors, etc.)
//! - [`form`] - Pure form engine (navigator, validation, pricing)
//! - [`components`] - UI components (Header, BookingForm, etc.)
//! - [`services`] - Submission collaborator (log + redirect)

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod form;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Draft
    BookingDraft,
    // Validation
    Field, FieldErrors,
};

// Form engine
pub use form::{Step, StepNavigator, SubmitDecision};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🚚 FreightFlow - Starting Leptos App");

    // Mount the application
    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Router>
            <Header/>
            <main>
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/booking" view=BookingPage/>
                    <Route path="/thank-you" view=ThankYouPage/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Title text=format!("{} - Door-to-Door Cargo", APP_NAME)/>
        <div class="container">
            <Hero/>
        </div>
    }
}

#[component]
fn BookingPage() -> impl IntoView {
    view! {
        <Title text="Booking"/>
        <div class="container">
            <BookingForm/>
        </div>
    }
}

#[component]
fn ThankYouPage() -> impl IntoView {
    view! {
        <Title text="Thank You"/>
        <div class="container">
            <ThankYou/>
        </div>
    }
}
