//! Core traits for the validation system

use crate::foundation::ValidationError;

/// The core trait that all validators implement.
///
/// Generic over the input type via `Input`, which may be unsized (`str`).
///
/// # Examples
///
/// ```
/// use jobform_validator::foundation::{Validate, ValidationError};
///
/// struct NoDigits;
///
/// impl Validate for NoDigits {
///     type Input = str;
///
///     fn validate(&self, input: &str) -> Result<(), ValidationError> {
///         if input.chars().any(|c| c.is_ascii_digit()) {
///             Err(ValidationError::new("no_digits", "Digits are not allowed"))
///         } else {
///             Ok(())
///         }
///     }
/// }
///
/// assert!(NoDigits.validate("Ada").is_ok());
/// assert!(NoDigits.validate("R2D2").is_err());
/// ```
pub trait Validate {
    /// The type of input being validated.
    type Input: ?Sized;

    /// Validates the input value.
    ///
    /// Returns `Ok(())` on success, or the reason for failure.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;

    /// Shorthand for `self.validate(input).is_ok()`.
    fn is_valid(&self, input: &Self::Input) -> bool {
        self.validate(input).is_ok()
    }
}

/// Attaches a user-facing message to any [`Validate`] type.
///
/// ```
/// use jobform_validator::prelude::*;
///
/// let name = min_length(2).with_message("Please enter your name");
/// assert_eq!(name.validate("A").unwrap_err().message, "Please enter your name");
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Replaces the message of any error this validator returns.
    ///
    /// The original error is kept as a nested error.
    fn with_message(self, message: impl Into<String>) -> WithMessage<Self> {
        WithMessage::new(self, message)
    }
}

impl<T: Validate> ValidateExt for T {}

pub use crate::combinators::message::WithMessage;
