//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **Draft Types** - The in-progress booking record
//! - **Validation Types** - Field identifiers and per-field errors

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::config::DEFAULT_TEMPERATURE;
use crate::form::pricing::{estimate_price, parse_amount};

// =============================================================================
// Draft Types
// =============================================================================

/// The in-progress, unsaved booking record.
///
/// Created with defaults when the form mounts, mutated field-by-field as the
/// user types, and discarded on navigation away or successful submit. Weight
/// and volume keep the raw input string so partially typed values survive a
/// render; [`BookingDraft::weight_kg`] and [`BookingDraft::volume_m3`] give
/// the numeric views.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDraft {
    /// Pickup city or address
    pub pickup_location: String,
    /// Drop-off city or address
    pub dropoff_location: String,
    /// ISO date (`YYYY-MM-DD`) from the date input
    pub shipment_date: String,
    /// Raw weight input (kg)
    pub cargo_weight: String,
    /// Raw volume input (m³)
    pub cargo_volume: String,
    /// Transport temperature, normalized to [0, 1]
    pub temperature: f64,
    /// Whether the cargo needs fragile handling
    pub fragile: bool,
    /// Contact email for the booking
    pub email: String,
    /// Estimated price in USD. Derived, never user-editable.
    pub pricing: f64,
}

impl Default for BookingDraft {
    fn default() -> Self {
        Self {
            pickup_location: String::new(),
            dropoff_location: String::new(),
            shipment_date: String::new(),
            cargo_weight: String::new(),
            cargo_volume: String::new(),
            temperature: DEFAULT_TEMPERATURE,
            fragile: false,
            email: String::new(),
            pricing: estimate_price(0.0, 0.0),
        }
    }
}

impl BookingDraft {
    /// Cargo weight in kilograms; empty or non-numeric input counts as 0.
    pub fn weight_kg(&self) -> f64 {
        parse_amount(&self.cargo_weight)
    }

    /// Cargo volume in cubic meters; empty or non-numeric input counts as 0.
    pub fn volume_m3(&self) -> f64 {
        parse_amount(&self.cargo_volume)
    }

    /// Recompute the derived price from the current weight and volume.
    ///
    /// Must be called after every mutation of `cargo_weight` or
    /// `cargo_volume`; nothing recomputes it implicitly.
    pub fn recompute_pricing(&mut self) {
        self.pricing = estimate_price(self.weight_kg(), self.volume_m3());
    }

    /// Currency-prefixed price, two decimal places.
    pub fn formatted_price(&self) -> String {
        format!("${:.2}", self.pricing)
    }

    /// Shipment date as a long date string, e.g. "September 1, 2026".
    ///
    /// Falls back to the raw input when it does not parse as an ISO date.
    pub fn formatted_date(&self) -> String {
        chrono::NaiveDate::parse_from_str(&self.shipment_date, "%Y-%m-%d")
            .map(|date| date.format("%B %-d, %Y").to_string())
            .unwrap_or_else(|_| self.shipment_date.clone())
    }
}

// =============================================================================
// Validation Types
// =============================================================================

/// Identifies a user-validated field of the [`BookingDraft`].
///
/// `temperature`, `fragile` and `pricing` have no entry: the first two are
/// always valid by construction and the last is derived.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    PickupLocation,
    DropoffLocation,
    ShipmentDate,
    CargoWeight,
    CargoVolume,
    Email,
}

/// Per-field validation errors for one validation pass.
///
/// Empty means "all checked fields valid". Messages are the fixed rule
/// messages, surfaced inline next to the failing control.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldErrors {
    errors: BTreeMap<Field, &'static str>,
}

impl FieldErrors {
    /// Record a failing field. A later insert for the same field wins.
    pub fn insert(&mut self, field: Field, message: &'static str) {
        self.errors.insert(field, message);
    }

    /// Error message for a field, if it failed.
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_draft() {
        let draft = BookingDraft::default();
        assert_eq!(draft.temperature, DEFAULT_TEMPERATURE);
        assert!(!draft.fragile);
        // Derived-field invariant holds from mount
        assert_eq!(draft.pricing, 50.0);
        assert_eq!(draft.formatted_price(), "$50.00");
    }

    #[test]
    fn test_recompute_pricing_after_mutation() {
        let mut draft = BookingDraft::default();
        draft.cargo_weight = "100".to_string();
        draft.cargo_volume = "10".to_string();
        draft.recompute_pricing();
        assert_eq!(draft.pricing, 102.0);

        // Junk input falls back to zero contribution
        draft.cargo_volume = "abc".to_string();
        draft.recompute_pricing();
        assert_eq!(draft.pricing, 100.0);
    }

    #[test]
    fn test_formatted_date() {
        let mut draft = BookingDraft::default();
        draft.shipment_date = "2026-09-01".to_string();
        assert_eq!(draft.formatted_date(), "September 1, 2026");

        draft.shipment_date = "someday".to_string();
        assert_eq!(draft.formatted_date(), "someday");
    }

    #[test]
    fn test_draft_serializes_camel_case() {
        let draft = BookingDraft::default();
        let json = serde_json::to_value(&draft).unwrap();
        assert!(json.get("pickupLocation").is_some());
        assert!(json.get("cargoWeight").is_some());
        assert_eq!(json.get("pricing").unwrap().as_f64(), Some(50.0));
    }

    #[test]
    fn test_field_errors() {
        let mut errors = FieldErrors::default();
        assert!(errors.is_empty());
        errors.insert(Field::Email, "Invalid email address");
        assert_eq!(errors.get(Field::Email), Some("Invalid email address"));
        assert_eq!(errors.get(Field::PickupLocation), None);
        assert_eq!(errors.len(), 1);
    }
}
