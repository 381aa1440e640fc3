//! Phone number validator.
//!
//! Formatting characters are ignored: the validator strips everything that
//! is not an ASCII digit and checks how many digits remain.

use crate::foundation::{Validate, ValidationError};

/// Keeps only the ASCII digits of `input`, in order.
///
/// ```
/// use jobform_validator::validators::extract_digits;
///
/// assert_eq!(extract_digits("(555) 123-4567"), "5551234567");
/// assert_eq!(extract_digits("n/a"), "");
/// ```
#[must_use]
pub fn extract_digits(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Requires an exact number of ASCII digits.
///
/// # Examples
///
/// ```
/// use jobform_validator::validators::Phone;
/// use jobform_validator::foundation::Validate;
///
/// let us = Phone::exact_digits(10);
/// assert!(us.validate("(555) 123-4567").is_ok());
/// assert!(us.validate("555-1234").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Phone {
    digits: u8,
}

impl Phone {
    /// Creates a phone validator requiring exactly `digits` digits.
    #[must_use]
    pub fn exact_digits(digits: u8) -> Self {
        Self { digits }
    }

    /// The required digit count.
    #[must_use]
    pub fn digits(&self) -> u8 {
        self.digits
    }
}

impl Validate for Phone {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let count = input.chars().filter(char::is_ascii_digit).count();
        if count == usize::from(self.digits) {
            return Ok(());
        }
        Err(ValidationError::digit_count("", usize::from(self.digits), count))
    }
}

/// Creates a phone validator requiring exactly `digits` digits.
#[must_use]
pub fn phone_digits(digits: u8) -> Phone {
    Phone::exact_digits(digits)
}
