//! Tagged validation rules.
//!
//! A [`Rule`] is a closed set of string checks that can be stored as data,
//! passed around, and dispatched through one [`Validate`] impl. New checks
//! become new variants; callers that hold a `Rule` never change.

use std::fmt;

use crate::foundation::{RuleError, Validate, ValidationError};
use crate::validators::{EMAIL_PATTERN, MatchesRegex, MinLength, Phone};

/// A single string validation rule.
///
/// # Examples
///
/// ```
/// use jobform_validator::foundation::Validate;
/// use jobform_validator::rule::Rule;
///
/// let rules = [
///     Rule::min_length(2),
///     Rule::email(),
///     Rule::digit_count(10),
/// ];
///
/// assert!(rules[0].validate("Al").is_ok());
/// assert!(rules[1].validate("a@b").is_err());
/// assert!(rules[2].validate("(555) 123-4567").is_ok());
/// ```
#[derive(Debug, Clone)]
pub enum Rule {
    /// At least `n` chars.
    MinLength(usize),
    /// The whole value matches the expression.
    PatternMatch(regex::Regex),
    /// Exactly `n` ASCII digits once everything else is stripped.
    DigitCount(u8),
}

impl Rule {
    /// A minimum length rule, counted in chars.
    #[must_use]
    pub fn min_length(min: usize) -> Self {
        Self::MinLength(min)
    }

    /// A pattern rule. Fails if `pattern` is not a valid regular expression.
    pub fn pattern(pattern: &str) -> Result<Self, RuleError> {
        MatchesRegex::new(pattern).map(|v| Self::PatternMatch(v.pattern))
    }

    /// The loose email pattern, see [`EMAIL_PATTERN`].
    #[must_use]
    pub fn email() -> Self {
        Self::PatternMatch(crate::validators::email().pattern)
    }

    /// An exact digit-count rule.
    #[must_use]
    pub fn digit_count(digits: u8) -> Self {
        Self::DigitCount(digits)
    }

    /// Stable code of the rule kind.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MinLength(_) => "min_length",
            Self::PatternMatch(_) => "pattern_match",
            Self::DigitCount(_) => "digit_count",
        }
    }
}

impl Validate for Rule {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        match self {
            Self::MinLength(min) => MinLength::new(*min).validate(input),
            Self::PatternMatch(pattern) => MatchesRegex::from(pattern.clone()).validate(input),
            Self::DigitCount(digits) => Phone::exact_digits(*digits).validate(input),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MinLength(min) => write!(f, "min_length({min})"),
            Self::PatternMatch(pattern) if pattern.as_str() == EMAIL_PATTERN => f.write_str("email"),
            Self::PatternMatch(pattern) => write!(f, "pattern({})", pattern.as_str()),
            Self::DigitCount(digits) => write!(f, "digit_count({digits})"),
        }
    }
}
