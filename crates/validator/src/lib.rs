//! # jobform-validator
//!
//! String validators behind the jobform field rules.
//!
//! ## Quick Start
//!
//! ```
//! use jobform_validator::prelude::*;
//!
//! let name = min_length(2).with_message("Please enter your full name (minimum 2 characters)");
//! assert!(name.validate("Ada").is_ok());
//! assert!(name.validate("A").is_err());
//! ```
//!
//! ## Rules
//!
//! Field rules are stored as data in the tagged [`Rule`](rule::Rule) enum.
//! Each variant delegates to one built-in validator:
//!
//! - [`MinLength`](validators::MinLength): char count
//! - [`MatchesRegex`](validators::MatchesRegex), [`Email`](validators::Email): pattern match
//! - [`Phone`](validators::Phone): exact ASCII digit count

// ValidationError is the fundamental error type for all validators;
// boxing it would add indirection to every validation call.
#![allow(clippy::result_large_err)]

pub mod combinators;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod rule;
pub mod validators;
