//! Wizard form state
//!
//! Navigation is gated by a presence check (every field on the current page
//! is non-empty), which is weaker than the schema: a malformed email still
//! lets the user move on to personal info. Only submission requires the
//! schema to pass.

use chrono::{DateTime, Local};
use std::collections::BTreeSet;

use super::fields::{Field, FormValues, WizardStep};
use super::schema::{FieldErrors, ValidationSchema};
use crate::submit::errors::SubmitError;

/// Submission lifecycle
#[derive(Debug, Clone, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    InFlight,
    Succeeded {
        at: DateTime<Local>,
    },
    Failed {
        at: DateTime<Local>,
        error: SubmitError,
    },
}

impl SubmitStatus {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, SubmitStatus::InFlight)
    }
}

/// Result of pressing Next/Submit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Presence check passed, now on this step
    Moved(WizardStep),
    /// A field on the current page is empty; every field is now touched
    Blocked,
    /// On the review step: the caller should run `submit()`
    Submit,
}

/// Result of the validation half of submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitGate {
    /// Values to send; status is now `InFlight`
    Ready(FormValues),
    /// Schema errors exist; every field is now touched
    Invalid,
    /// A request is already in flight
    Busy,
    /// The form was already accepted by the endpoint
    AlreadySubmitted,
}

/// The single owned state of one wizard instance
#[derive(Debug, Clone)]
pub struct FormState {
    values: FormValues,
    errors: FieldErrors,
    touched: BTreeSet<Field>,
    active_step: WizardStep,
    submit_status: SubmitStatus,
    schema: ValidationSchema,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    pub fn new() -> Self {
        Self::with_schema(ValidationSchema::signup())
    }

    pub fn with_schema(schema: ValidationSchema) -> Self {
        let values = FormValues::default();
        let errors = schema.validate(&values);
        Self {
            values,
            errors,
            touched: BTreeSet::new(),
            active_step: WizardStep::default(),
            submit_status: SubmitStatus::Idle,
            schema,
        }
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn value(&self, field: Field) -> &str {
        self.values.get(field)
    }

    /// All current schema errors, touched or not
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn active_step(&self) -> WizardStep {
        self.active_step
    }

    pub fn submit_status(&self) -> &SubmitStatus {
        &self.submit_status
    }

    /// The endpoint accepted the form; values and page are frozen
    pub fn is_submitted(&self) -> bool {
        matches!(self.submit_status, SubmitStatus::Succeeded { .. })
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    /// Error message to render: the first failing rule, only for touched fields
    pub fn visible_error(&self, field: Field) -> Option<&str> {
        if !self.is_touched(field) {
            return None;
        }
        self.errors
            .get(&field)
            .and_then(|messages| messages.first())
            .map(String::as_str)
    }

    /// Fields that would block submission
    pub fn invalid_fields(&self) -> Vec<Field> {
        self.errors.keys().copied().collect()
    }

    fn revalidate(&mut self) {
        self.errors = self.schema.validate(&self.values);
    }

    /// Field-change event: replace one field's value and re-run validation.
    /// Returns false once the form has been submitted.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) -> bool {
        if self.is_submitted() {
            return false;
        }
        self.values.set(field, value);
        self.revalidate();
        true
    }

    /// Mark a field as visited (blur)
    pub fn touch(&mut self, field: Field) {
        self.touched.insert(field);
    }

    pub fn touch_all(&mut self) {
        self.touched.extend(Field::ALL);
    }

    /// Next/Submit button
    pub fn advance(&mut self) -> Advance {
        let step = self.active_step;
        if step.is_last() {
            return Advance::Submit;
        }

        if self.values.all_present(step.fields()) {
            self.active_step = step.next();
            tracing::debug!("Advanced to step {}", self.active_step.index());
            Advance::Moved(self.active_step)
        } else {
            self.touch_all();
            Advance::Blocked
        }
    }

    /// Back button. Returns false at the first step and after submission.
    pub fn retreat(&mut self) -> bool {
        if self.active_step == WizardStep::AccountDetails || self.is_submitted() {
            return false;
        }
        self.active_step = self.active_step.prev();
        true
    }

    /// Validate everything and, if it passes, claim the single in-flight slot
    pub fn submit(&mut self) -> SubmitGate {
        match self.submit_status {
            SubmitStatus::InFlight => return SubmitGate::Busy,
            SubmitStatus::Succeeded { .. } => return SubmitGate::AlreadySubmitted,
            SubmitStatus::Idle | SubmitStatus::Failed { .. } => {}
        }

        self.touch_all();
        self.revalidate();
        if !self.errors.is_empty() {
            return SubmitGate::Invalid;
        }

        self.submit_status = SubmitStatus::InFlight;
        SubmitGate::Ready(self.values.clone())
    }

    /// Record the outcome of the in-flight request. Ignored when nothing is in flight.
    pub fn finish_submission(&mut self, result: Result<(), SubmitError>) -> bool {
        if !self.submit_status.is_in_flight() {
            tracing::warn!("Submission result received with no request in flight");
            return false;
        }

        let at = Local::now();
        self.submit_status = match result {
            Ok(()) => SubmitStatus::Succeeded { at },
            Err(error) => SubmitStatus::Failed { at, error },
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first_error(state: &FormState, field: Field) -> Option<&str> {
        state
            .errors()
            .get(&field)
            .and_then(|m| m.first())
            .map(String::as_str)
    }

    fn fill_account(state: &mut FormState) {
        state.set_field(Field::Email, "a@b.com");
        state.set_field(Field::Password, "12345678");
        state.set_field(Field::ConfirmPassword, "12345678");
    }

    fn fill_personal(state: &mut FormState) {
        state.set_field(Field::FirstName, "Ada");
        state.set_field(Field::LastName, "Lovelace");
        state.set_field(Field::Phone, "+31 20 000 0000");
        state.set_field(Field::Residence, "Amsterdam");
    }

    #[test]
    fn test_new_state() {
        let state = FormState::new();
        assert_eq!(state.active_step(), WizardStep::AccountDetails);
        assert_eq!(state.values(), &FormValues::default());
        assert!(Field::ALL.iter().all(|f| !state.is_touched(*f)));
        assert!(matches!(state.submit_status(), SubmitStatus::Idle));
        // Errors exist but none are visible yet
        assert!(!state.errors().is_empty());
        assert!(Field::ALL.iter().all(|f| state.visible_error(*f).is_none()));
    }

    #[test]
    fn test_set_field_only_changes_that_field() {
        let mut state = FormState::new();
        fill_account(&mut state);
        let before = state.values().clone();
        state.set_field(Field::Phone, "555");
        for field in Field::ALL {
            if field == Field::Phone {
                assert_eq!(state.value(field), "555");
            } else {
                assert_eq!(state.value(field), before.get(field));
            }
        }
    }

    #[test]
    fn test_advance_from_account_details() {
        let mut state = FormState::new();
        fill_account(&mut state);
        // Personal info is still empty: does not matter on step 0
        assert_eq!(state.advance(), Advance::Moved(WizardStep::PersonalInfo));
        assert_eq!(state.active_step().index(), 1);
    }

    #[test]
    fn test_advance_blocked_with_empty_email() {
        let mut state = FormState::new();
        state.set_field(Field::Password, "12345678");
        state.set_field(Field::ConfirmPassword, "12345678");
        assert_eq!(state.advance(), Advance::Blocked);
        assert_eq!(state.active_step(), WizardStep::AccountDetails);
        assert!(Field::ALL.iter().all(|f| state.is_touched(*f)));
        assert_eq!(state.visible_error(Field::Email), Some("Email is required"));
    }

    #[test]
    fn test_presence_gate_is_weaker_than_schema() {
        let mut state = FormState::new();
        state.set_field(Field::Email, "not-an-email");
        state.set_field(Field::Password, "short");
        state.set_field(Field::ConfirmPassword, "other");
        assert_eq!(state.advance(), Advance::Moved(WizardStep::PersonalInfo));
        assert!(state.errors().contains_key(&Field::Email));
        assert!(state.errors().contains_key(&Field::Password));
    }

    #[test]
    fn test_personal_info_requires_phone_and_residence() {
        let mut state = FormState::new();
        fill_account(&mut state);
        state.advance();
        state.set_field(Field::FirstName, "Ada");
        state.set_field(Field::LastName, "Lovelace");
        assert_eq!(state.advance(), Advance::Blocked);
        assert_eq!(state.active_step(), WizardStep::PersonalInfo);

        state.set_field(Field::Phone, "1");
        state.set_field(Field::Residence, "x");
        assert_eq!(state.advance(), Advance::Moved(WizardStep::Review));
    }

    #[test]
    fn test_advance_on_review_requests_submit() {
        let mut state = FormState::new();
        fill_account(&mut state);
        fill_personal(&mut state);
        state.advance();
        state.advance();
        assert_eq!(state.advance(), Advance::Submit);
        assert_eq!(state.active_step(), WizardStep::Review);
    }

    #[test]
    fn test_retreat() {
        let mut state = FormState::new();
        assert!(!state.retreat());
        assert!(!state.retreat());
        assert_eq!(state.active_step(), WizardStep::AccountDetails);

        fill_account(&mut state);
        state.advance();
        assert!(state.retreat());
        assert_eq!(state.active_step(), WizardStep::AccountDetails);
    }

    #[test]
    fn test_password_error_visible_only_after_touch() {
        let mut state = FormState::new();
        state.set_field(Field::Password, "short");
        assert_eq!(
            first_error(&state, Field::Password),
            Some("Password should be at least 8 characters")
        );
        assert_eq!(state.visible_error(Field::Password), None);
        state.touch(Field::Password);
        assert_eq!(
            state.visible_error(Field::Password),
            Some("Password should be at least 8 characters")
        );
    }

    #[test]
    fn test_errors_recomputed_on_change() {
        let mut state = FormState::new();
        state.touch(Field::ConfirmPassword);
        state.set_field(Field::Password, "12345678");
        state.set_field(Field::ConfirmPassword, "12345678");
        assert_eq!(state.visible_error(Field::ConfirmPassword), None);
        state.set_field(Field::Password, "87654321");
        assert_eq!(
            state.visible_error(Field::ConfirmPassword),
            Some("Passwords do not match")
        );
    }

    #[test]
    fn test_submit_invalid_touches_everything() {
        let mut state = FormState::new();
        state.set_field(Field::Email, "bad");
        assert_eq!(state.submit(), SubmitGate::Invalid);
        assert!(Field::ALL.iter().all(|f| state.is_touched(*f)));
        assert!(matches!(state.submit_status(), SubmitStatus::Idle));
    }

    #[test]
    fn test_submit_guards_in_flight_request() {
        let mut state = FormState::new();
        fill_account(&mut state);
        fill_personal(&mut state);

        match state.submit() {
            SubmitGate::Ready(values) => assert_eq!(&values, state.values()),
            other => panic!("expected Ready, got {:?}", other),
        }
        assert!(state.submit_status().is_in_flight());
        assert_eq!(state.submit(), SubmitGate::Busy);

        assert!(state.finish_submission(Ok(())));
        assert!(matches!(state.submit_status(), SubmitStatus::Succeeded { .. }));
        assert_eq!(state.submit(), SubmitGate::AlreadySubmitted);
    }

    #[test]
    fn test_failed_submission_allows_retry() {
        let mut state = FormState::new();
        fill_account(&mut state);
        fill_personal(&mut state);
        assert!(matches!(state.submit(), SubmitGate::Ready(_)));
        state.finish_submission(Err(SubmitError::Status {
            code: 500,
            body: String::new(),
        }));
        assert!(matches!(state.submit_status(), SubmitStatus::Failed { .. }));
        // Submission failures never leak into field errors
        assert!(state.errors().is_empty());
        assert!(matches!(state.submit(), SubmitGate::Ready(_)));
    }

    #[test]
    fn test_finish_without_request_is_ignored() {
        let mut state = FormState::new();
        assert!(!state.finish_submission(Ok(())));
        assert!(matches!(state.submit_status(), SubmitStatus::Idle));
    }

    #[test]
    fn test_editing_updates_errors() {
        let mut state = FormState::new();
        state.set_field(Field::Email, "a@b.co");
        assert!(!state.errors().contains_key(&Field::Email));
        state.set_field(Field::Email, "a@b");
        assert!(!state.errors().contains_key(&Field::Email));
        state.set_field(Field::Email, "a@");
        assert_eq!(first_error(&state, Field::Email), Some("Invalid email"));
    }

    #[test]
    fn test_short_mismatched_confirm_shows_length_but_keeps_mismatch() {
        let mut state = FormState::new();
        state.set_field(Field::Password, "12345678");
        state.set_field(Field::ConfirmPassword, "1234");
        state.touch(Field::ConfirmPassword);
        assert_eq!(
            state.visible_error(Field::ConfirmPassword),
            Some("Confirm password should be at least 8 characters")
        );
        assert!(state.errors()[&Field::ConfirmPassword]
            .iter()
            .any(|m| m == "Passwords do not match"));
    }

    #[test]
    fn test_empty_confirm_blocks_submit() {
        let mut state = FormState::new();
        fill_account(&mut state);
        fill_personal(&mut state);
        state.set_field(Field::ConfirmPassword, "");
        assert_eq!(state.submit(), SubmitGate::Invalid);
        assert_eq!(
            state.visible_error(Field::ConfirmPassword),
            Some("Passwords do not match")
        );
    }

    #[test]
    fn test_submitted_form_is_frozen() {
        let mut state = FormState::new();
        fill_account(&mut state);
        fill_personal(&mut state);
        state.advance();
        state.advance();
        let sent = match state.submit() {
            SubmitGate::Ready(values) => values,
            other => panic!("expected Ready, got {:?}", other),
        };
        state.finish_submission(Ok(()));
        assert!(state.is_submitted());

        assert!(!state.set_field(Field::Email, "other@b.com"));
        assert!(!state.retreat());
        assert_eq!(state.active_step(), WizardStep::Review);
        assert_eq!(state.values(), &sent);
    }

    #[test]
    fn test_failed_submission_stays_editable() {
        let mut state = FormState::new();
        fill_account(&mut state);
        fill_personal(&mut state);
        state.submit();
        state.finish_submission(Err(SubmitError::Timeout));
        assert!(!state.is_submitted());
        assert!(state.set_field(Field::Phone, "2"));
    }
}
