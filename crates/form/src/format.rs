//! As-you-type phone masking.

use jobform_validator::validators::extract_digits;

/// Most digits a masked number can hold.
pub const PHONE_DIGITS: usize = 10;

/// Masks a phone number as `(XXX) XXX-XXXX`.
///
/// Non-digits are dropped, digits past the tenth are cut off and partial
/// numbers are masked as far as they go, so the mask can be applied on every
/// keystroke.
///
/// ```
/// use jobform::format_phone;
///
/// assert_eq!(format_phone("5551234567"), "(555) 123-4567");
/// assert_eq!(format_phone("555-12"), "(555) 12");
/// assert_eq!(format_phone("555123456789"), "(555) 123-4567");
/// assert_eq!(format_phone(""), "");
/// ```
#[must_use]
pub fn format_phone(input: &str) -> String {
    let digits = extract_digits(input);
    let digits = &digits[..digits.len().min(PHONE_DIGITS)];

    let mut masked = String::with_capacity(14);
    for (i, digit) in digits.char_indices() {
        match i {
            0 => masked.push('('),
            3 => masked.push_str(") "),
            6 => masked.push('-'),
            _ => {}
        }
        masked.push(digit);
    }
    masked
}

/// The phone mask as a value, for callers that hold formatters generically.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PhoneFormatter;

impl PhoneFormatter {
    /// See [`format_phone`].
    #[must_use]
    pub fn format(self, input: &str) -> String {
        format_phone(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "")]
    #[case("5", "(5")]
    #[case("555", "(555")]
    #[case("5551", "(555) 1")]
    #[case("555123", "(555) 123")]
    #[case("5551234", "(555) 123-4")]
    #[case("5551234567", "(555) 123-4567")]
    #[case("55512345678", "(555) 123-4567")]
    #[case("(555) 123-4567", "(555) 123-4567")]
    #[case("555.123.4567 ext", "(555) 123-4567")]
    #[case("abc", "")]
    fn masks_progressively(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(format_phone(input), expected);
        assert_eq!(PhoneFormatter.format(input), expected);
    }

    proptest! {
        #[test]
        fn idempotent_over_own_digits(input in "[0-9 ()\\-.a-z]{0,20}") {
            let once = format_phone(&input);
            let twice = format_phone(&extract_digits(&once));
            prop_assert_eq!(&once, &twice);
            prop_assert_eq!(format_phone(&once), once);
        }

        #[test]
        fn keeps_leading_digits(digits in "[0-9]{0,15}") {
            let masked = format_phone(&digits);
            let kept = extract_digits(&masked);
            prop_assert!(kept.len() <= PHONE_DIGITS);
            prop_assert!(digits.starts_with(&kept));
        }
    }
}
