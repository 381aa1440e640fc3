//! # jobform
//!
//! Validation and submission core for a job-application form with four
//! fields: name, email, phone and message.
//!
//! - [`FieldValidator`] applies a field's rule to its trimmed value.
//! - [`format_phone`] masks phone input as `(XXX) XXX-XXXX` while typing.
//! - [`FormModel`] holds values and validity without touching any display.
//! - [`FormController`] wires the model to a [`DisplaySink`] and runs the
//!   simulated submission cycle: delay, success message, delay, reset.
//!
//! ```
//! use jobform::{FieldId, FormModel};
//!
//! let mut form = FormModel::new();
//! form.set_value(FieldId::Name, "Ada Lovelace");
//! form.set_value(FieldId::Email, "ada@example");
//! form.set_value(FieldId::Phone, "555 123 4567");
//! form.set_value(FieldId::Message, "Keen to work on the analytical engine.");
//!
//! let errors = form.validate_all();
//! assert_eq!(errors.len(), 1);
//! assert_eq!(errors[0].field, FieldId::Email);
//! assert_eq!(form.field(FieldId::Phone).value(), "(555) 123-4567");
//! ```

pub mod config;
pub mod controller;
pub mod error;
pub mod field;
pub mod format;
pub mod model;
pub mod payload;
pub mod sink;

pub use config::FormConfig;
pub use controller::{FormController, SubmissionHandle, SubmissionState, SubmitOutcome};
pub use error::{ConfigError, FieldInvalid, SubmitError};
pub use field::{FieldId, FieldState, FieldStatus, FieldValidator};
pub use format::{PhoneFormatter, format_phone};
pub use model::FormModel;
pub use payload::SubmissionPayload;
pub use sink::DisplaySink;
