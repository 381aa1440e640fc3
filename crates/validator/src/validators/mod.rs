//! Built-in validators
//!
//! - **Length**: [`MinLength`]
//! - **Content**: [`MatchesRegex`], [`Email`]
//! - **Phone**: [`Phone`] digit-count check
//!
//! ```
//! use jobform_validator::prelude::*;
//!
//! assert!(min_length(2).validate("Ada").is_ok());
//! assert!(email().validate("ada@example.com").is_ok());
//! assert!(phone_digits(10).validate("(555) 123-4567").is_ok());
//! ```

pub mod content;
pub mod length;
pub mod phone;

pub use content::{EMAIL_PATTERN, Email, MatchesRegex, email, is_valid_email, matches_regex};
pub use length::{MinLength, min_length};
pub use phone::{Phone, extract_digits, phone_digits};
