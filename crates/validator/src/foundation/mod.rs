//! Core validation types and traits
//!
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Errors**: [`ValidationError`], [`RuleError`]
//!
//! Validators are generic over their input type; [`ValidateExt`] attaches
//! the user-facing message:
//!
//! ```
//! use jobform_validator::prelude::*;
//!
//! let validator = min_length(20).with_message("Please enter a message (minimum 20 characters)");
//! assert!(validator.validate("a long enough cover note").is_ok());
//! assert_eq!(validator.validate("hi").unwrap_err().code, "min_length");
//! ```

pub mod error;
pub mod traits;

pub use error::{RuleError, ValidationError};
pub use traits::{Validate, ValidateExt};
