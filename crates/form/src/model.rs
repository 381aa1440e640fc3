//! The form's data, separate from any display.

use chrono::{DateTime, Utc};

use crate::error::FieldInvalid;
use crate::field::{FieldId, FieldState, FieldValidator};
use crate::format::format_phone;
use crate::payload::SubmissionPayload;

/// Values, validity and rules of the four form fields.
///
/// `FormModel` only computes; it never renders. The
/// [`FormController`](crate::FormController) pairs it with a display sink.
#[derive(Debug, Clone)]
pub struct FormModel {
    fields: [FieldState; 4],
    validators: [FieldValidator; 4],
}

impl Default for FormModel {
    fn default() -> Self {
        Self::new()
    }
}

impl FormModel {
    /// An empty form with the standard rules.
    #[must_use]
    pub fn new() -> Self {
        Self {
            fields: Default::default(),
            validators: FieldId::ALL.map(FieldValidator::for_field),
        }
    }

    /// Replaces the validator of the field it belongs to.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_validator(mut self, validator: FieldValidator) -> Self {
        let index = validator.field().index();
        self.validators[index] = validator;
        self
    }

    /// Current state of `field`.
    #[must_use]
    pub fn field(&self, field: FieldId) -> &FieldState {
        &self.fields[field.index()]
    }

    /// Validator of `field`.
    #[must_use]
    pub fn validator(&self, field: FieldId) -> &FieldValidator {
        &self.validators[field.index()]
    }

    /// Stores a new raw value and returns the value actually kept.
    ///
    /// Phone input is masked on the way in, so the returned value can differ
    /// from `raw`.
    pub fn set_value(&mut self, field: FieldId, raw: &str) -> &str {
        let value = match field {
            FieldId::Phone => format_phone(raw),
            FieldId::Name | FieldId::Email | FieldId::Message => raw.to_owned(),
        };
        let state = &mut self.fields[field.index()];
        state.set_value(value);
        state.value()
    }

    /// Validates the stored value of `field` and records the outcome.
    pub fn validate_field(&mut self, field: FieldId) -> Result<(), FieldInvalid> {
        let outcome = self.validators[field.index()].validate(self.fields[field.index()].value());
        self.fields[field.index()].record(&outcome);
        outcome
    }

    /// Validates every field in document order, returning all failures.
    pub fn validate_all(&mut self) -> Vec<FieldInvalid> {
        FieldId::ALL
            .into_iter()
            .filter_map(|field| self.validate_field(field).err())
            .collect()
    }

    /// True only if every field passed its last validation.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.fields.iter().all(FieldState::is_valid)
    }

    /// The first field, in document order, whose last validation failed.
    #[must_use]
    pub fn first_invalid(&self) -> Option<FieldId> {
        FieldId::ALL
            .into_iter()
            .find(|field| self.field(*field).error_message().is_some())
    }

    /// The submission record for the current values, stamped `at`.
    #[must_use]
    pub fn payload(&self, at: DateTime<Utc>) -> SubmissionPayload {
        let trimmed = |field| self.field(field).value().trim().to_owned();
        SubmissionPayload {
            name: trimmed(FieldId::Name),
            email: trimmed(FieldId::Email),
            phone: trimmed(FieldId::Phone),
            message: trimmed(FieldId::Message),
            timestamp: at,
        }
    }

    /// Clears every value and validation result; rules are kept.
    pub fn reset(&mut self) {
        self.fields = Default::default();
    }
}
