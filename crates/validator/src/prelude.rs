//! Prelude module for convenient imports.
//!
//! `use jobform_validator::prelude::*;` brings in the traits, error types,
//! built-in validators, the message combinator and the tagged [`Rule`].

pub use crate::foundation::{RuleError, Validate, ValidateExt, ValidationError};

#[allow(clippy::wildcard_imports)]
pub use crate::validators::*;

pub use crate::combinators::{WithMessage, with_message};

pub use crate::rule::Rule;
