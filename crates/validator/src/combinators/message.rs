//! MESSAGE combinator - custom error messages

use crate::foundation::{Validate, ValidationError};

/// Replaces the error message of a validator.
///
/// Turns a terse built-in message into the wording shown next to a form
/// field. The code and the original error (nested) are kept.
///
/// # Examples
///
/// ```
/// use jobform_validator::combinators::WithMessage;
/// use jobform_validator::prelude::*;
///
/// let validator = WithMessage::new(min_length(20), "Please enter a message (minimum 20 characters)");
///
/// let error = validator.validate("too short").unwrap_err();
/// assert_eq!(error.message, "Please enter a message (minimum 20 characters)");
/// assert_eq!(error.code, "min_length");
/// ```
#[derive(Debug, Clone)]
pub struct WithMessage<V> {
    inner: V,
    message: String,
}

impl<V> WithMessage<V> {
    /// Wraps `inner` so its failures carry `message`.
    pub fn new(inner: V, message: impl Into<String>) -> Self {
        Self {
            inner,
            message: message.into(),
        }
    }

    /// Returns a reference to the inner validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }

    /// Returns the custom message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl<V> Validate for WithMessage<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.inner.validate(input).map_err(|original| {
            ValidationError::new(original.code.clone(), self.message.clone())
                .with_nested_error(original)
        })
    }
}

/// Creates a `WithMessage` combinator.
pub fn with_message<V>(validator: V, message: impl Into<String>) -> WithMessage<V> {
    WithMessage::new(validator, message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::{min_length, phone_digits};

    const PHONE_MESSAGE: &str = "Please enter a valid 10-digit phone number";

    #[test]
    fn passes_through_success() {
        let phone = with_message(phone_digits(10), PHONE_MESSAGE);
        assert!(phone.validate("(555) 123-4567").is_ok());
    }

    #[test]
    fn keeps_code_and_nests_original() {
        let phone = with_message(phone_digits(10), PHONE_MESSAGE);
        let error = phone.validate("555-1234").unwrap_err();

        assert_eq!(error.message, PHONE_MESSAGE);
        assert_eq!(error.code, "digit_count");
        assert_eq!(error.nested.len(), 1);
        assert_eq!(error.nested[0].param("actual"), Some("7"));
        assert_eq!(error.root_code(), "digit_count");
    }

    #[test]
    fn accessors() {
        let name = WithMessage::new(min_length(2), "Please enter your full name");
        assert_eq!(name.message(), "Please enter your full name");
        assert_eq!(name.inner().min, 2);
    }
}
