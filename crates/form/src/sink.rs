//! The presentation boundary.
//!
//! The form core never touches a UI directly. Everything a user sees goes
//! through a [`DisplaySink`] supplied by the presentation layer: a DOM
//! binding, a terminal UI, or a recorder in tests.

use crate::controller::SubmissionState;
use crate::field::FieldId;
use crate::payload::SubmissionPayload;

/// Renders validation and submission state.
///
/// Calls arrive on the thread that drives the controller or on the runtime
/// worker that runs a submission cycle, never concurrently.
///
/// Every call is made while the controller holds its state lock, which is
/// not reentrant. An implementation must not call back into the
/// [`FormController`](crate::FormController) from a callback; a binding whose
/// `set_value` fires an input event has to queue that event instead.
pub trait DisplaySink {
    /// Mark `field` as valid: success style and icon, no error text.
    fn show_valid(&mut self, field: FieldId);

    /// Mark `field` as invalid and show `message` with the error icon.
    fn show_invalid(&mut self, field: FieldId, message: &str);

    /// Clear the value and any validation styling of `field`.
    fn clear_field(&mut self, field: FieldId);

    /// Replace the text shown in `field`, e.g. with a masked phone number.
    fn set_value(&mut self, field: FieldId, value: &str);

    /// Move focus to `field` and scroll it into view.
    fn focus(&mut self, field: FieldId);

    /// The submission state machine moved to `state`.
    ///
    /// Typically drives the busy indicator on the submit button.
    fn state_changed(&mut self, state: SubmissionState) {
        let _ = state;
    }

    /// Show the success message for an accepted submission.
    fn show_success(&mut self, payload: &SubmissionPayload);

    /// Hide the success message.
    fn hide_success(&mut self);
}

impl<S: DisplaySink + ?Sized> DisplaySink for Box<S> {
    fn show_valid(&mut self, field: FieldId) {
        (**self).show_valid(field);
    }

    fn show_invalid(&mut self, field: FieldId, message: &str) {
        (**self).show_invalid(field, message);
    }

    fn clear_field(&mut self, field: FieldId) {
        (**self).clear_field(field);
    }

    fn set_value(&mut self, field: FieldId, value: &str) {
        (**self).set_value(field, value);
    }

    fn focus(&mut self, field: FieldId) {
        (**self).focus(field);
    }

    fn state_changed(&mut self, state: SubmissionState) {
        (**self).state_changed(state);
    }

    fn show_success(&mut self, payload: &SubmissionPayload) {
        (**self).show_success(payload);
    }

    fn hide_success(&mut self) {
        (**self).hide_success();
    }
}
