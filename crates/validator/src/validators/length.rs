//! String length validator
//!
//! Length is counted in Unicode scalar values (chars), the way a person
//! reads the text. This differs from a browser's `String.length`, which
//! counts UTF-16 code units: `"😀"` is one char here but length 2 there, so
//! it fails a two-character minimum that the browser would accept.

use crate::foundation::ValidationError;

crate::validator! {
    /// At least `min` chars long.
    ///
    /// Counts chars, not UTF-16 code units as a browser does; astral
    /// characters such as emoji count once.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MinLength { min: usize } for str;
    rule(self, input) { input.chars().count() >= self.min }
    error(self, input) { ValidationError::min_length("", self.min, input.chars().count()) }
    new(min: usize) { Self { min } }
    fn min_length(min: usize);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;
    use rstest::rstest;

    #[rstest]
    #[case("", false)]
    #[case("A", false)]
    #[case("Al", true)]
    #[case("Ada Lovelace", true)]
    fn name_minimum(#[case] input: &str, #[case] ok: bool) {
        assert_eq!(min_length(2).validate(input).is_ok(), ok);
    }

    #[test]
    fn min_length_error_carries_counts() {
        let error = min_length(20).validate("Hire me").unwrap_err();
        assert_eq!(error.code, "min_length");
        assert_eq!(error.param("min"), Some("20"));
        assert_eq!(error.param("actual"), Some("7"));
    }

    #[test]
    fn message_boundary() {
        let nineteen = "a".repeat(19);
        let twenty = "a".repeat(20);
        assert!(min_length(20).validate(nineteen.as_str()).is_err());
        assert!(min_length(20).validate(twenty.as_str()).is_ok());
    }

    #[test]
    fn counts_chars_not_bytes_or_utf16_units() {
        // 4 chars, 5 bytes
        assert!(min_length(4).validate("Zo\u{eb}e").is_ok());
        assert!(min_length(5).validate("Zo\u{eb}e").is_err());
        // one char, two UTF-16 units
        assert!(min_length(2).validate("\u{1F600}").is_err());
    }
}
