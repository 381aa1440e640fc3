//! Form fields, their state and their validators.

use std::fmt;

use jobform_validator::combinators::WithMessage;
use jobform_validator::foundation::{Validate, ValidateExt};
use jobform_validator::rule::Rule;
use serde::{Deserialize, Serialize};

use crate::error::FieldInvalid;

// ============================================================================
// FIELD ID
// ============================================================================

/// One of the four inputs of the application form.
///
/// Variants are declared in document order, which is also the order used to
/// pick the first invalid field on a rejected submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldId {
    /// Applicant's full name.
    Name,
    /// Contact email.
    Email,
    /// US phone number, shown as `(XXX) XXX-XXXX`.
    Phone,
    /// Cover message.
    Message,
}

impl FieldId {
    /// All fields in document order.
    pub const ALL: [FieldId; 4] = [
        FieldId::Name,
        FieldId::Email,
        FieldId::Phone,
        FieldId::Message,
    ];

    /// Stable lowercase name, matching the serde representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            FieldId::Name => "name",
            FieldId::Email => "email",
            FieldId::Phone => "phone",
            FieldId::Message => "message",
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// FIELD STATE
// ============================================================================

/// Result of the last validation of a field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldStatus {
    /// Not validated since the last reset.
    #[default]
    Pristine,
    /// Passed its rule.
    Valid,
    /// Failed its rule; carries the message on display.
    Invalid(String),
}

/// Current value and validity of one field.
///
/// Validity and error message live in a single [`FieldStatus`], so a field
/// can never be valid and carry an error at the same time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    value: String,
    status: FieldStatus,
}

impl FieldState {
    /// The value as last entered (after phone masking).
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The status of the last validation.
    #[must_use]
    pub fn status(&self) -> &FieldStatus {
        &self.status
    }

    /// True only if the last validation passed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.status == FieldStatus::Valid
    }

    /// The message on display, if the last validation failed.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match &self.status {
            FieldStatus::Invalid(message) => Some(message),
            FieldStatus::Pristine | FieldStatus::Valid => None,
        }
    }

    pub(crate) fn set_value(&mut self, value: String) {
        self.value = value;
    }

    pub(crate) fn record(&mut self, outcome: &Result<(), FieldInvalid>) {
        self.status = match outcome {
            Ok(()) => FieldStatus::Valid,
            Err(invalid) => FieldStatus::Invalid(invalid.message.clone()),
        };
    }
}

// ============================================================================
// FIELD VALIDATOR
// ============================================================================

/// Applies one [`Rule`] to the trimmed value of one field.
///
/// # Examples
///
/// ```
/// use jobform::{FieldId, FieldValidator};
///
/// let name = FieldValidator::for_field(FieldId::Name);
/// assert!(name.validate("  Ada ").is_ok());
///
/// let err = name.validate(" A ").unwrap_err();
/// assert_eq!(err.message, "Please enter your full name (minimum 2 characters)");
/// ```
#[derive(Debug, Clone)]
pub struct FieldValidator {
    field: FieldId,
    rule: WithMessage<Rule>,
}

impl FieldValidator {
    /// A validator for `field` using `rule`, reporting `message` on failure.
    pub fn new(field: FieldId, rule: Rule, message: impl Into<String>) -> Self {
        Self {
            field,
            rule: rule.with_message(message),
        }
    }

    /// The standard rule of the application form for `field`.
    #[must_use]
    pub fn for_field(field: FieldId) -> Self {
        match field {
            FieldId::Name => Self::new(
                field,
                Rule::min_length(2),
                "Please enter your full name (minimum 2 characters)",
            ),
            FieldId::Email => Self::new(field, Rule::email(), "Please enter a valid email address"),
            FieldId::Phone => Self::new(
                field,
                Rule::digit_count(10),
                "Please enter a valid 10-digit phone number",
            ),
            FieldId::Message => Self::new(
                field,
                Rule::min_length(20),
                "Please enter a message (minimum 20 characters)",
            ),
        }
    }

    /// The field this validator belongs to.
    #[must_use]
    pub fn field(&self) -> FieldId {
        self.field
    }

    /// The rule applied to the trimmed value.
    #[must_use]
    pub fn rule(&self) -> &Rule {
        self.rule.inner()
    }

    /// Validates `raw_value` after trimming surrounding whitespace.
    pub fn validate(&self, raw_value: &str) -> Result<(), FieldInvalid> {
        self.rule
            .validate(raw_value.trim())
            .map_err(|error| FieldInvalid {
                field: self.field,
                message: error.message.clone().into_owned(),
                source: error.with_field(self.field.as_str()),
            })
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("", false)]
    #[case("A", false)]
    #[case("   A   ", false)]
    #[case("Al", true)]
    #[case("  Al  ", true)]
    #[case("Zo\u{eb}", true)]
    fn name_rule(#[case] input: &str, #[case] valid: bool) {
        assert_eq!(
            FieldValidator::for_field(FieldId::Name).validate(input).is_ok(),
            valid
        );
    }

    #[rstest]
    #[case("a@b.co", true)]
    #[case("  a@b.co  ", true)]
    #[case("a@b", false)]
    #[case("a b@c.com", false)]
    fn email_rule(#[case] input: &str, #[case] valid: bool) {
        assert_eq!(
            FieldValidator::for_field(FieldId::Email).validate(input).is_ok(),
            valid
        );
    }

    #[rstest]
    #[case("5551234567", true)]
    #[case("(555) 123-4567", true)]
    #[case("(555) 123-456", false)]
    #[case("", false)]
    fn phone_rule(#[case] input: &str, #[case] valid: bool) {
        assert_eq!(
            FieldValidator::for_field(FieldId::Phone).validate(input).is_ok(),
            valid
        );
    }

    #[test]
    fn message_rule_boundary() {
        let validator = FieldValidator::for_field(FieldId::Message);
        let nineteen = "a".repeat(19);
        let twenty = "a".repeat(20);

        assert!(validator.validate(&nineteen).is_err());
        assert!(validator.validate(&twenty).is_ok());
        // Surrounding whitespace does not count
        assert!(validator.validate(&format!("  {nineteen}  ")).is_err());
    }

    #[test]
    fn invalid_carries_field_and_code() {
        let err = FieldValidator::for_field(FieldId::Phone)
            .validate("555")
            .unwrap_err();

        assert_eq!(err.field, FieldId::Phone);
        assert_eq!(err.message, "Please enter a valid 10-digit phone number");
        assert_eq!(err.code(), "digit_count");
        assert_eq!(err.source.field.as_deref(), Some("phone"));
        assert_eq!(
            err.to_string(),
            "phone: Please enter a valid 10-digit phone number"
        );
    }

    #[test]
    fn custom_rule() {
        let validator = FieldValidator::new(
            FieldId::Name,
            Rule::pattern(r"^\p{Lu}").unwrap(),
            "Start with a capital letter",
        );
        assert!(validator.validate("Ada").is_ok());
        assert_eq!(validator.validate("ada").unwrap_err().code(), "invalid_format");
        assert_eq!(validator.rule().kind(), "pattern_match");
    }

    #[test]
    fn field_state_status_is_consistent() {
        let mut state = FieldState::default();
        assert_eq!(state.status(), &FieldStatus::Pristine);
        assert!(!state.is_valid());

        let validator = FieldValidator::for_field(FieldId::Name);
        state.record(&validator.validate("A"));
        assert_eq!(
            state.error_message(),
            Some("Please enter your full name (minimum 2 characters)")
        );

        state.record(&validator.validate("Ada"));
        assert!(state.is_valid());
        assert_eq!(state.error_message(), None);
    }

    #[test]
    fn field_ids_serialize_lowercase() {
        let json = serde_json::to_string(&FieldId::ALL).unwrap();
        assert_eq!(json, r#"["name","email","phone","message"]"#);
        for id in FieldId::ALL {
            assert_eq!(id.to_string(), id.as_str());
        }
    }
}
