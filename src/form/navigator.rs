//! Step sequencing for the booking form.
//!
//! Three linear steps, no skipping. Forward transitions are gated on the
//! current step's validation; backward transitions are unconditional.
//! Submission is only reachable from the final step and is guarded against
//! double-invocation while pending.

use crate::form::validation::{validate_draft, validate_step};
use crate::types::{BookingDraft, FieldErrors};

/// One of the three sequential form pages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Shipment,
    Cargo,
    Review,
}

impl Step {
    /// All steps in order, for the step indicator.
    pub const ALL: [Step; 3] = [Step::Shipment, Step::Cargo, Step::Review];

    /// Zero-based position in the sequence.
    pub fn index(self) -> usize {
        match self {
            Step::Shipment => 0,
            Step::Cargo => 1,
            Step::Review => 2,
        }
    }

    /// Heading shown above the step content.
    pub fn title(self) -> &'static str {
        match self {
            Step::Shipment => "Shipment Details",
            Step::Cargo => "Cargo Details",
            Step::Review => "Review & Confirm",
        }
    }

    pub fn is_first(self) -> bool {
        self == Step::Shipment
    }

    pub fn is_last(self) -> bool {
        self == Step::Review
    }

    fn next(self) -> Option<Step> {
        match self {
            Step::Shipment => Some(Step::Cargo),
            Step::Cargo => Some(Step::Review),
            Step::Review => None,
        }
    }

    fn back(self) -> Option<Step> {
        match self {
            Step::Shipment => None,
            Step::Cargo => Some(Step::Shipment),
            Step::Review => Some(Step::Cargo),
        }
    }
}

/// Outcome of a submit attempt.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitDecision {
    /// Validation passed and the pending flag is now set; the caller owns
    /// the actual submission side effects.
    Proceed,
    /// A submission is already pending, or the navigator is not on Review.
    AlreadyPending,
    /// Final validation failed; state unchanged.
    Rejected(FieldErrors),
}

/// The form's step state machine.
///
/// Owns only position and the pending flag. The draft lives with the form
/// controller and is passed in per transition, so values entered on earlier
/// steps survive any amount of back/forward movement.
#[derive(Clone, Debug, PartialEq)]
pub struct StepNavigator {
    step: Step,
    submitting: bool,
}

impl Default for StepNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl StepNavigator {
    pub fn new() -> Self {
        Self {
            step: Step::Shipment,
            submitting: false,
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    /// True between a `Proceed` decision and the redirect.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Try to move forward one step.
    ///
    /// Validates only the current step's fields. On failure the step is
    /// unchanged and the failures are returned for inline display. Moving
    /// past Review, or while a submission is pending, is a no-op.
    pub fn advance(&mut self, draft: &BookingDraft) -> FieldErrors {
        if self.submitting {
            return FieldErrors::default();
        }
        let errors = validate_step(self.step, draft);
        if errors.is_empty() {
            if let Some(next) = self.step.next() {
                self.step = next;
            }
        }
        errors
    }

    /// Move back one step. Never validates; no-op on the first step or
    /// while a submission is pending.
    pub fn retreat(&mut self) {
        if self.submitting {
            return;
        }
        if let Some(prev) = self.step.back() {
            self.step = prev;
        }
    }

    /// Attempt the final submission from Review.
    ///
    /// Runs full-draft validation. At most one call ever returns
    /// [`SubmitDecision::Proceed`]; the pending flag stays set until the
    /// page navigates away.
    pub fn try_submit(&mut self, draft: &BookingDraft) -> SubmitDecision {
        if self.submitting || !self.step.is_last() {
            return SubmitDecision::AlreadyPending;
        }
        let errors = validate_draft(draft);
        if !errors.is_empty() {
            return SubmitDecision::Rejected(errors);
        }
        self.submitting = true;
        SubmitDecision::Proceed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Field;

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
    fn test_advance_blocked_by_missing_field() {
        let mut nav = StepNavigator::new();
        let mut draft = valid_draft();
        draft.pickup_location = String::new();

        let errors = nav.advance(&draft);
        assert_eq!(nav.step(), Step::Shipment);
        assert_eq!(
            errors.get(Field::PickupLocation),
            Some("Pickup location is required")
        );
    }

    #[test]
    fn test_advance_through_all_steps() {
        let mut nav = StepNavigator::new();
        let draft = valid_draft();

        assert!(nav.advance(&draft).is_empty());
        assert_eq!(nav.step(), Step::Cargo);
        assert!(nav.advance(&draft).is_empty());
        assert_eq!(nav.step(), Step::Review);

        // No step past Review
        assert!(nav.advance(&draft).is_empty());
        assert_eq!(nav.step(), Step::Review);
    }

    #[test]
    fn test_retreat_is_unconditional() {
        let mut nav = StepNavigator::new();
        let mut draft = valid_draft();
        nav.advance(&draft);
        assert_eq!(nav.step(), Step::Cargo);

        // Back never validates, even with the draft now invalid
        draft.email = "bad".to_string();
        nav.retreat();
        assert_eq!(nav.step(), Step::Shipment);

        // And is a no-op on the first step
        nav.retreat();
        assert_eq!(nav.step(), Step::Shipment);

        // Draft values entered earlier are untouched by navigation
        assert_eq!(draft.pickup_location, "Lisbon");
    }

    #[test]
    fn test_submit_only_from_review() {
        let mut nav = StepNavigator::new();
        let draft = valid_draft();
        assert_eq!(nav.try_submit(&draft), SubmitDecision::AlreadyPending);
        assert!(!nav.is_submitting());
    }

    #[test]
    fn test_submit_rejects_invalid_draft() {
        let mut nav = StepNavigator::new();
        let draft = valid_draft();
        nav.advance(&draft);
        nav.advance(&draft);

        let mut broken = draft.clone();
        broken.email = "bad".to_string();
        match nav.try_submit(&broken) {
            SubmitDecision::Rejected(errors) => {
                assert_eq!(errors.get(Field::Email), Some("Invalid email address"));
            }
            other => panic!("expected Rejected, got {:?}", other),
        }
        assert!(!nav.is_submitting());
    }

    #[test]
    fn test_double_submit_proceeds_once() {
        let mut nav = StepNavigator::new();
        let draft = valid_draft();
        nav.advance(&draft);
        nav.advance(&draft);

        assert_eq!(nav.try_submit(&draft), SubmitDecision::Proceed);
        assert!(nav.is_submitting());
        // Second click in quick succession
        assert_eq!(nav.try_submit(&draft), SubmitDecision::AlreadyPending);
    }

    #[test]
    fn test_pending_locks_navigation() {
        let mut nav = StepNavigator::new();
        let draft = valid_draft();
        nav.advance(&draft);
        nav.advance(&draft);
        nav.try_submit(&draft);

        nav.retreat();
        assert_eq!(nav.step(), Step::Review);
        assert!(nav.advance(&draft).is_empty());
        assert_eq!(nav.step(), Step::Review);
    }
}
