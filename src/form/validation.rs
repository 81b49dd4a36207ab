//! Per-field validation rules for the booking draft.
//!
//! Rules are evaluated on explicit triggers (Next, Submit), not on every
//! keystroke. Each validation pass returns a fresh [`FieldErrors`], so a
//! field's error clears as soon as the field revalidates clean.
//!
//! # Rules
//!
//! | field            | rule          | message                         |
//! |------------------|---------------|---------------------------------|
//! | pickup_location  | non-empty     | Pickup location is required     |
//! | dropoff_location | non-empty     | Drop-off location is required   |
//! | shipment_date    | non-empty     | Shipment date is required       |
//! | cargo_weight     | numeric ≥ 0.1 | Weight must be positive         |
//! | cargo_volume     | numeric ≥ 0.1 | Volume must be positive         |
//! | email            | `\S+@\S+`     | Invalid email address           |

use crate::config::MIN_CARGO_AMOUNT;
use crate::form::navigator::Step;
use crate::form::pricing::parse_amount;
use crate::types::{BookingDraft, Field, FieldErrors};

/// Fields gating forward progress out of a step.
///
/// Review gates nothing: its Next is the submit action, which revalidates
/// the whole draft.
pub fn step_fields(step: Step) -> &'static [Field] {
    match step {
        Step::Shipment => &[
            Field::PickupLocation,
            Field::DropoffLocation,
            Field::ShipmentDate,
        ],
        Step::Cargo => &[Field::CargoWeight, Field::CargoVolume, Field::Email],
        Step::Review => &[],
    }
}

/// Check one field against its rule. `None` means valid.
pub fn field_error(field: Field, draft: &BookingDraft) -> Option<&'static str> {
    match field {
        Field::PickupLocation => {
            required(&draft.pickup_location, "Pickup location is required")
        }
        Field::DropoffLocation => {
            required(&draft.dropoff_location, "Drop-off location is required")
        }
        Field::ShipmentDate => required(&draft.shipment_date, "Shipment date is required"),
        Field::CargoWeight => positive_amount(&draft.cargo_weight, "Weight must be positive"),
        Field::CargoVolume => positive_amount(&draft.cargo_volume, "Volume must be positive"),
        Field::Email => {
            if is_valid_email(&draft.email) {
                None
            } else {
                Some("Invalid email address")
            }
        }
    }
}

/// Validate a set of fields, collecting every failure.
pub fn validate_fields(fields: &[Field], draft: &BookingDraft) -> FieldErrors {
    let mut errors = FieldErrors::default();
    for &field in fields {
        if let Some(message) = field_error(field, draft) {
            errors.insert(field, message);
        }
    }
    errors
}

/// Validate only the fields belonging to the given step.
pub fn validate_step(step: Step, draft: &BookingDraft) -> FieldErrors {
    validate_fields(step_fields(step), draft)
}

/// Validate the whole draft. Used for the final submit pass.
pub fn validate_draft(draft: &BookingDraft) -> FieldErrors {
    validate_fields(
        &[
            Field::PickupLocation,
            Field::DropoffLocation,
            Field::ShipmentDate,
            Field::CargoWeight,
            Field::CargoVolume,
            Field::Email,
        ],
        draft,
    )
}

/// Same accept/reject set as `^\S+@\S+$`: no whitespace, and an `@` with at
/// least one character on each side.
pub fn is_valid_email(value: &str) -> bool {
    if value.contains(char::is_whitespace) {
        return false;
    }
    match value.find('@') {
        Some(at) => at > 0 && at + 1 < value.len(),
        None => false,
    }
}

fn required(value: &str, message: &'static str) -> Option<&'static str> {
    if value.trim().is_empty() {
        Some(message)
    } else {
        None
    }
}

fn positive_amount(raw: &str, message: &'static str) -> Option<&'static str> {
    if parse_amount(raw) >= MIN_CARGO_AMOUNT {
        None
    } else {
        Some(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> BookingDraft {
        let mut draft = BookingDraft::default();
        draft.pickup_location = "Lisbon".to_string();
        draft.dropoff_location = "Porto".to_string();
        draft.shipment_date = "2026-09-01".to_string();
        draft.cargo_weight = "120".to_string();
        draft.cargo_volume = "2.5".to_string();
        draft.email = "ops@example.com".to_string();
        draft.recompute_pricing();
        draft
    }

    #[test]
    fn test_valid_draft_passes_everywhere() {
        let draft = valid_draft();
        assert!(validate_step(Step::Shipment, &draft).is_empty());
        assert!(validate_step(Step::Cargo, &draft).is_empty());
        assert!(validate_step(Step::Review, &draft).is_empty());
        assert!(validate_draft(&draft).is_empty());
    }

    #[test]
    fn test_required_messages() {
        let draft = BookingDraft::default();
        let errors = validate_step(Step::Shipment, &draft);
        assert_eq!(errors.len(), 3);
        assert_eq!(
            errors.get(Field::PickupLocation),
            Some("Pickup location is required")
        );
        assert_eq!(
            errors.get(Field::DropoffLocation),
            Some("Drop-off location is required")
        );
        assert_eq!(
            errors.get(Field::ShipmentDate),
            Some("Shipment date is required")
        );
    }

    #[test]
    fn test_whitespace_only_is_empty() {
        let mut draft = valid_draft();
        draft.pickup_location = "   ".to_string();
        let errors = validate_step(Step::Shipment, &draft);
        assert_eq!(
            errors.get(Field::PickupLocation),
            Some("Pickup location is required")
        );
    }

    #[test]
    fn test_cargo_amounts() {
        let mut draft = valid_draft();
        draft.cargo_weight = "0".to_string();
        draft.cargo_volume = "not a number".to_string();
        let errors = validate_step(Step::Cargo, &draft);
        assert_eq!(errors.get(Field::CargoWeight), Some("Weight must be positive"));
        assert_eq!(errors.get(Field::CargoVolume), Some("Volume must be positive"));

        // The minimum itself is accepted
        draft.cargo_weight = "0.1".to_string();
        draft.cargo_volume = "0.1".to_string();
        assert!(validate_step(Step::Cargo, &draft).is_empty());
    }

    #[test]
    fn test_email_rule() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("a@b"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a@"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email(""));

        let mut draft = valid_draft();
        draft.email = "not-an-email".to_string();
        let errors = validate_step(Step::Cargo, &draft);
        assert_eq!(errors.get(Field::Email), Some("Invalid email address"));
    }

    #[test]
    fn test_errors_clear_on_revalidation() {
        let mut draft = valid_draft();
        draft.email = "bad".to_string();
        assert!(!validate_step(Step::Cargo, &draft).is_empty());

        draft.email = "ops@example.com".to_string();
        assert!(validate_step(Step::Cargo, &draft).is_empty());
    }
}
