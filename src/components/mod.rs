//! UI Components for the FreightFlow application.
//!
//! This module contains all Leptos components organized by function:
//!
//! # Layout Components
//! - [`Header`] - Navigation bar
//! - [`Hero`] - Landing page title and call-to-action
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`BookingForm`] - Multi-step booking form controller
//! - [`ShipmentStep`] - Pickup, drop-off and date inputs
//! - [`CargoStep`] - Weight, volume, handling and contact inputs
//! - [`ReviewStep`] - Read-only projection of the draft
//! - [`FieldMessage`] - Inline validation message for one field
//! - [`ThankYou`] - Post-submit confirmation page

mod booking_form;
mod cargo_step;
mod field_message;
mod footer;
mod header;
mod hero;
mod review_step;
mod shipment_step;
mod thank_you;

pub use booking_form::*;
pub use cargo_step::*;
pub use field_message::*;
pub use footer::*;
pub use header::*;
pub use hero::*;
pub use review_step::*;
pub use shipment_step::*;
pub use thank_you::*;
