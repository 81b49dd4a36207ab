//! Multi-step booking form controller.
//!
//! Owns the in-memory [`BookingDraft`], the step navigator and the current
//! validation errors. Step content is rendered by the presentational step
//! components; all transitions go through the [`StepNavigator`] so the
//! gating rules live in one place.

use leptos::*;
use leptos_router::use_navigate;

use crate::config::CONFIRMATION_PATH;
use crate::form::{Step, StepNavigator, SubmitDecision};
use crate::services::submit_booking;
use crate::types::{BookingDraft, FieldErrors};

use super::{CargoStep, ReviewStep, ShipmentStep};

#[component]
pub fn BookingForm() -> impl IntoView {
    let (draft, set_draft) = create_signal(BookingDraft::default());
    let (navigator, set_navigator) = create_signal(StepNavigator::new());
    let (errors, set_errors) = create_signal(FieldErrors::default());
    let navigate = use_navigate();

    let step = move || navigator.get().step();
    let submitting = move || navigator.get().is_submitting();

    // Back never validates; stale errors from the step we left are cleared.
    let on_back = move |_| {
        set_navigator.update(|nav| nav.retreat());
        set_errors.set(FieldErrors::default());
    };

    let on_next = move |_| {
        let current = draft.get_untracked();
        let mut step_errors = FieldErrors::default();
        set_navigator.update(|nav| step_errors = nav.advance(&current));
        if !step_errors.is_empty() {
            log::warn!("⚠️ {} field(s) failed validation", step_errors.len());
        }
        set_errors.set(step_errors);
    };

    let on_submit = move |_| {
        let current = draft.get_untracked();
        let mut decision = SubmitDecision::AlreadyPending;
        set_navigator.update(|nav| decision = nav.try_submit(&current));

        match decision {
            SubmitDecision::Proceed => {
                set_errors.set(FieldErrors::default());
                let navigate = navigate.clone();
                spawn_local(async move {
                    let reference = submit_booking(&current).await;
                    log::info!("✅ Booking {} confirmed, redirecting", reference);
                    navigate(CONFIRMATION_PATH, Default::default());
                });
            }
            // Second click while pending, swallowed by the guard
            SubmitDecision::AlreadyPending => {}
            SubmitDecision::Rejected(submit_errors) => set_errors.set(submit_errors),
        }
    };

    view! {
        <div class="booking-form">
            <StepIndicator navigator=navigator/>
            <h2 class="step-title">{move || step().title()}</h2>

            {move || match step() {
                Step::Shipment => {
                    view! { <ShipmentStep draft=draft set_draft=set_draft errors=errors/> }
                        .into_view()
                }
                Step::Cargo => {
                    view! { <CargoStep draft=draft set_draft=set_draft errors=errors/> }
                        .into_view()
                }
                Step::Review => view! { <ReviewStep draft=draft/> }.into_view(),
            }}

            <div class="form-controls">
                <button
                    type="button"
                    class="btn btn-secondary"
                    style:visibility=move || if step().is_first() { "hidden" } else { "visible" }
                    disabled=move || step().is_first() || submitting()
                    on:click=on_back
                >
                    "Back"
                </button>
                {move || if step().is_last() {
                    let on_submit = on_submit.clone();
                    view! {
                        <button
                            type="button"
                            class="btn btn-primary"
                            disabled=submitting
                            on:click=on_submit
                        >
                            {move || if submitting() { "Submitting..." } else { "Confirm Booking" }}
                        </button>
                    }
                    .into_view()
                } else {
                    view! {
                        <button
                            type="button"
                            class="btn btn-primary"
                            disabled=submitting
                            on:click=on_next
                        >
                            "Next"
                        </button>
                    }
                    .into_view()
                }}
            </div>
        </div>
    }
}

/// The three step titles with the active one highlighted.
#[component]
fn StepIndicator(navigator: ReadSignal<StepNavigator>) -> impl IntoView {
    view! {
        <ol class="step-indicator">
            {Step::ALL
                .into_iter()
                .map(|step| {
                    view! {
                        <li
                            class="step-indicator-item"
                            class:active=move || navigator.get().step() == step
                            class:done=move || { navigator.get().step().index() > step.index() }
                        >
                            {step.title()}
                        </li>
                    }
                })
                .collect_view()}
        </ol>
    }
}
