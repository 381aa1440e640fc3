//! String content validators
//!
//! Validators for checking string content against patterns.

use std::sync::LazyLock;

use crate::foundation::{RuleError, ValidationError};

/// Something, an `@`, something, a dot, something; no whitespace and no
/// second `@` anywhere.
pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static EMAIL_REGEX: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(EMAIL_PATTERN).expect("static email pattern compiles"));

// ============================================================================
// REGEX VALIDATOR
// ============================================================================

crate::validator! {
    /// Validates that a string matches a regular expression.
    pub MatchesRegex { pattern: regex::Regex } for str;
    rule(self, input) { self.pattern.is_match(input) }
    error(self, input) {
        ValidationError::invalid_format("", "regex")
            .with_param("pattern", self.pattern.as_str().to_string())
    }
    new(pattern: &str) -> RuleError {
        regex::Regex::new(pattern)
            .map(|pattern| Self { pattern })
            .map_err(|source| RuleError::InvalidPattern {
                pattern: pattern.to_owned(),
                source,
            })
    }
    fn matches_regex(pattern: &str);
}

impl From<regex::Regex> for MatchesRegex {
    fn from(pattern: regex::Regex) -> Self {
        Self { pattern }
    }
}

// ============================================================================
// EMAIL VALIDATOR
// ============================================================================

crate::validator! {
    /// Validates email format.
    ///
    /// Deliberately loose: see [`EMAIL_PATTERN`].
    pub Email { pattern: regex::Regex } for str;
    rule(self, input) { self.pattern.is_match(input) }
    error(self, input) { ValidationError::invalid_format("", "email") }
    new() {
        Self {
            pattern: EMAIL_REGEX.clone(),
        }
    }
    fn email();
}

/// Returns true if `input` looks like an email address.
#[must_use]
pub fn is_valid_email(input: &str) -> bool {
    EMAIL_REGEX.is_match(input)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;
    use rstest::rstest;

    #[test]
    fn test_regex() {
        let validator = matches_regex(r"^\d{3}-\d{4}$").unwrap();
        assert!(validator.validate("123-4567").is_ok());
        assert_eq!(
            validator.validate("invalid").unwrap_err().param("pattern"),
            Some(r"^\d{3}-\d{4}$")
        );
    }

    #[test]
    fn test_regex_rejects_bad_pattern() {
        let error = matches_regex("([a-z]").unwrap_err();
        assert!(matches!(error, RuleError::InvalidPattern { ref pattern, .. } if pattern == "([a-z]"));
    }

    #[rstest]
    #[case("a@b.co", true)]
    #[case("jane.doe@example.com", true)]
    #[case("a@b.c.d", true)]
    #[case("a@b", false)]
    #[case("a b@c.com", false)]
    #[case("a@b@c.com", false)]
    #[case("@example.com", false)]
    #[case("user@.com", false)]
    #[case("", false)]
    fn test_email(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(email().validate(input).is_ok(), expected);
        assert_eq!(is_valid_email(input), expected);
    }
}
