//! The booking form engine.
//!
//! Pure logic behind the multi-step form, kept free of Leptos and browser
//! APIs so it unit-tests on the native target:
//!
//! - [`pricing`] - Price estimation formula
//! - [`validation`] - Per-field rules and per-step field sets
//! - [`navigator`] - Step sequencing state machine

pub mod navigator;
pub mod pricing;
pub mod validation;

pub use navigator::*;
pub use pricing::*;
pub use validation::*;
