//! Macros for creating validators with minimal boilerplate.
//!
//! [`validator!`] generates a validator struct, its `Validate`
//! implementation, a constructor and an optional factory function.
//!
//! ```
//! use jobform_validator::validator;
//! use jobform_validator::foundation::{Validate, ValidationError};
//!
//! validator! {
//!     pub MaxWords { max: usize } for str;
//!     rule(self, input) { input.split_whitespace().count() <= self.max }
//!     error(self, input) { ValidationError::new("max_words", "Too many words") }
//!     new(max: usize) { Self { max } }
//!     fn max_words(max: usize);
//! }
//!
//! assert!(max_words(2).validate("Ada Lovelace").is_ok());
//! assert!(max_words(2).validate("Augusta Ada King").is_err());
//! ```

/// Creates a complete validator: struct definition, `Validate` implementation,
/// constructor, and factory function.
///
/// `#[derive(Debug, Clone)]` is always applied. Add extra derives via `#[derive(...)]`.
///
/// # Variants
///
/// **Infallible constructor**:
/// ```rust,ignore
/// validator! {
///     #[derive(Copy, PartialEq, Eq, Hash)]
///     pub MinLength { min: usize } for str;
///     rule(self, input) { input.chars().count() >= self.min }
///     error(self, input) { ValidationError::min_length("", self.min, input.chars().count()) }
///     new(min: usize) { Self { min } }
///     fn min_length(min: usize);
/// }
/// ```
///
/// **Fallible constructor** (the type after `->` is the error type):
/// ```rust,ignore
/// validator! {
///     pub MatchesRegex { pattern: regex::Regex } for str;
///     rule(self, input) { self.pattern.is_match(input) }
///     error(self, input) { ValidationError::invalid_format("", "regex") }
///     new(pattern: &str) -> RuleError { /* ... */ }
///     fn matches_regex(pattern: &str);
/// }
/// ```
#[macro_export]
macro_rules! validator {
    (@struct $(#[$meta:meta])* $vis:vis $name:ident { $($field:ident: $fty:ty),+ }) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }
    };

    (@validate $name:ident, $input:ty, $this:ident, $inp:ident, $rule:block, $einp:ident, $err:block) => {
        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(
                &$this,
                $inp: &Self::Input,
            ) -> ::core::result::Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    return Ok(());
                }
                let $einp = $inp;
                Err($err)
            }
        }
    };

    // Fields with an infallible constructor, optional factory
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($this:ident, $inp:ident) $rule:block
        error($ethis:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
        $(fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);)?
    ) => {
        $crate::validator!(@struct $(#[$meta])* $vis $name { $($field: $fty),+ });

        #[allow(clippy::new_without_default)]
        impl $name {
            /// Creates the validator.
            #[must_use]
            pub fn new($($narg: $naty),*) -> Self $new_body
        }

        $crate::validator!(@validate $name, $input, $this, $inp, $rule, $einp, $err);

        $(
            #[must_use]
            $vis fn $factory($($farg: $faty),*) -> $name {
                $name::new($($farg),*)
            }
        )?
    };

    // Fields with a fallible constructor; the type after `->` is its error
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($this:ident, $inp:ident) $rule:block
        error($ethis:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) -> $ety:ty $new_body:block
        $(fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);)?
    ) => {
        $crate::validator!(@struct $(#[$meta])* $vis $name { $($field: $fty),+ });

        impl $name {
            /// Creates the validator, failing if its configuration is invalid.
            pub fn new($($narg: $naty),*) -> ::core::result::Result<Self, $ety> $new_body
        }

        $crate::validator!(@validate $name, $input, $this, $inp, $rule, $einp, $err);

        $(
            $vis fn $factory($($farg: $faty),*) -> ::core::result::Result<$name, $ety> {
                $name::new($($farg),*)
            }
        )?
    };
}
