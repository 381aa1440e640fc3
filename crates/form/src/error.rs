//! Error types for the form core.

use jobform_validator::foundation::ValidationError;

use crate::field::FieldId;

/// A field failed its rule.
///
/// This is the only error a user can cause. It never escapes the field it
/// belongs to except as data: the controller renders it through the
/// display sink and reports it in a rejected submit.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {message}")]
pub struct FieldInvalid {
    /// The field that failed.
    pub field: FieldId,
    /// The message shown next to the field.
    pub message: String,
    /// The rule failure behind the message.
    #[source]
    pub source: ValidationError,
}

impl FieldInvalid {
    /// Code of the rule that failed, e.g. `min_length`.
    #[must_use]
    pub fn code(&self) -> &str {
        self.source.root_code()
    }
}

/// Invalid [`FormConfig`](crate::FormConfig).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A delay that drives a state transition was zero.
    #[error("{0} must be greater than zero")]
    ZeroDelay(&'static str),
}

/// A submit that could not start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// `on_submit` was called outside a Tokio runtime.
    #[error("submitting needs a running Tokio runtime")]
    NoRuntime,
}
