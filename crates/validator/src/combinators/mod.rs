//! Validator combinators
//!
//! - [`WithMessage`]: replace the user-facing message of a failure

pub mod message;

pub use message::{WithMessage, with_message};
