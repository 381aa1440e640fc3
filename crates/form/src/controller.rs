//! Submission state machine and event handlers.
//!
//! The [`FormController`] owns a [`FormModel`] and a [`DisplaySink`] and
//! exposes the three handlers the presentation layer calls:
//! [`on_field_change`](FormController::on_field_change),
//! [`on_submit`](FormController::on_submit) and
//! [`on_reset`](FormController::on_reset).
//!
//! An accepted submit starts a cycle on the Tokio runtime:
//!
//! ```text
//! Idle ─submit→ Validating ─all valid→ Submitting ─submit_delay→ ShowingSuccess
//!   ↑              │                                                   │
//!   └──rejected────┘                                     reset_delay   │
//!   └────────────────────────── ResettingAfterDelay ←──────────────────┘
//! ```
//!
//! Each cycle owns a [`CancellationToken`]. A new submit attempt or a reset
//! cancels the pending cycle under the state lock, and a cycle only touches
//! state after re-checking its token under the same lock, so a stale timer
//! can never reset a form that has moved on.

use std::fmt;
use std::sync::Arc;

use chrono::Utc;
use parking_lot::Mutex;
use serde::Serialize;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::config::FormConfig;
use crate::error::{ConfigError, FieldInvalid, SubmitError};
use crate::field::{FieldId, FieldState};
use crate::model::FormModel;
use crate::sink::DisplaySink;

// ---------------------------------------------------------------------------
// SubmissionState
// ---------------------------------------------------------------------------

/// Where the form is in the submission cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionState {
    /// Accepting input. A rejected submit returns here.
    #[default]
    Idle,
    /// Re-checking every field for a submit attempt.
    Validating,
    /// Accepted; waiting out the simulated network delay.
    Submitting,
    /// Success message on display.
    ShowingSuccess,
    /// Clearing the form after the success message.
    ResettingAfterDelay,
}

impl SubmissionState {
    /// True while a submission cycle is running.
    #[must_use]
    pub fn is_pending(self) -> bool {
        matches!(self, Self::Submitting | Self::ShowingSuccess)
    }
}

impl fmt::Display for SubmissionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Idle => "idle",
            Self::Validating => "validating",
            Self::Submitting => "submitting",
            Self::ShowingSuccess => "showing_success",
            Self::ResettingAfterDelay => "resetting_after_delay",
        })
    }
}

// ---------------------------------------------------------------------------
// SubmitOutcome
// ---------------------------------------------------------------------------

/// Result of [`FormController::on_submit`].
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Every field passed; a submission cycle is running.
    Accepted(SubmissionHandle),
    /// At least one field failed; nothing was submitted.
    Rejected {
        /// The field that received focus.
        first_invalid: FieldId,
        /// Every failure, in document order.
        errors: Vec<FieldInvalid>,
    },
}

impl SubmitOutcome {
    /// True for [`SubmitOutcome::Accepted`].
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    /// The running cycle, if the submit was accepted.
    #[must_use]
    pub fn into_handle(self) -> Option<SubmissionHandle> {
        match self {
            Self::Accepted(handle) => Some(handle),
            Self::Rejected { .. } => None,
        }
    }
}

/// A running submission cycle.
#[derive(Debug)]
pub struct SubmissionHandle {
    cycle: u64,
    task: JoinHandle<()>,
}

impl SubmissionHandle {
    /// Sequence number of the cycle, unique per controller.
    #[must_use]
    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    /// True once the cycle has reset the form or been cancelled.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Waits until the cycle resets the form or is cancelled.
    pub async fn finished(self) {
        if let Err(error) = self.task.await {
            tracing::warn!(cycle = self.cycle, error = %error, "submission cycle task failed");
        }
    }
}

// ---------------------------------------------------------------------------
// FormController
// ---------------------------------------------------------------------------

struct Shared<S> {
    model: FormModel,
    sink: S,
    state: SubmissionState,
    pending: Option<PendingCycle>,
    next_cycle: u64,
}

struct PendingCycle {
    id: u64,
    cancel: CancellationToken,
}

impl<S: DisplaySink> Shared<S> {
    fn transition(&mut self, state: SubmissionState) {
        if self.state != state {
            tracing::trace!(from = %self.state, to = %state, "submission state changed");
            self.state = state;
            self.sink.state_changed(state);
        }
    }

    fn validate_and_render(&mut self, field: FieldId) -> Result<(), FieldInvalid> {
        let outcome = self.model.validate_field(field);
        match &outcome {
            Ok(()) => self.sink.show_valid(field),
            Err(invalid) => self.sink.show_invalid(field, &invalid.message),
        }
        tracing::debug!(field = %field, valid = outcome.is_ok(), "field validated");
        outcome
    }

    /// Cancels the pending cycle, if any.
    ///
    /// Returns true if the cancelled cycle had its success message up; the
    /// caller decides how it goes away.
    fn cancel_pending(&mut self) -> bool {
        let Some(pending) = self.pending.take() else {
            return false;
        };
        pending.cancel.cancel();
        tracing::debug!(cycle = pending.id, state = %self.state, "pending submission cycle cancelled");
        self.state == SubmissionState::ShowingSuccess
    }

    fn clear_form(&mut self) {
        self.model.reset();
        for field in FieldId::ALL {
            self.sink.clear_field(field);
        }
        self.sink.hide_success();
    }
}

/// Drives a job-application form.
///
/// Cheap to clone; clones share the same form. Handlers are synchronous and
/// may be called from any thread, but [`on_submit`](Self::on_submit) needs a
/// Tokio runtime to spawn the submission cycle on.
///
/// Sink callbacks run under the controller's lock. A sink must not call
/// back into the controller, e.g. from an input event fired by
/// [`DisplaySink::set_value`].
///
/// # Examples
///
/// ```rust,ignore
/// let controller = FormController::new(FormConfig::default(), my_sink)?;
/// controller.on_field_change(FieldId::Name, "Ada Lovelace");
/// match controller.on_submit()? {
///     SubmitOutcome::Accepted(handle) => handle.finished().await,
///     SubmitOutcome::Rejected { first_invalid, .. } => println!("fix {first_invalid}"),
/// }
/// ```
pub struct FormController<S> {
    config: FormConfig,
    shared: Arc<Mutex<Shared<S>>>,
}

impl<S> Clone for FormController<S> {
    fn clone(&self) -> Self {
        Self {
            config: self.config,
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<S> fmt::Debug for FormController<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormController")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<S> FormController<S>
where
    S: DisplaySink + Send + 'static,
{
    /// A controller for an empty form with the standard rules.
    pub fn new(config: FormConfig, sink: S) -> Result<Self, ConfigError> {
        Self::with_model(config, FormModel::new(), sink)
    }

    /// A controller for `model`, e.g. one with custom validators.
    pub fn with_model(config: FormConfig, model: FormModel, sink: S) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            shared: Arc::new(Mutex::new(Shared {
                model,
                sink,
                state: SubmissionState::Idle,
                pending: None,
                next_cycle: 1,
            })),
        })
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    /// Current submission state.
    #[must_use]
    pub fn state(&self) -> SubmissionState {
        self.shared.lock().state
    }

    /// Snapshot of `field`.
    #[must_use]
    pub fn field(&self, field: FieldId) -> FieldState {
        self.shared.lock().model.field(field).clone()
    }

    /// True if every field passed its last validation.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.shared.lock().model.is_valid()
    }

    /// Runs `f` with the display sink, e.g. to read back what was rendered.
    ///
    /// `f` runs under the controller's lock, which is not reentrant: calling
    /// back into this controller from `f` deadlocks.
    pub fn with_sink<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        f(&self.shared.lock().sink)
    }

    /// The user edited `field`; `raw_value` is the new content.
    ///
    /// Phone input is masked first and the masked value is written back to
    /// the sink, then the stored value is validated and rendered.
    pub fn on_field_change(&self, field: FieldId, raw_value: &str) -> Result<(), FieldInvalid> {
        let mut shared = self.shared.lock();
        let shared = &mut *shared;

        let stored = shared.model.set_value(field, raw_value);
        if stored != raw_value {
            shared.sink.set_value(field, stored);
        }
        shared.validate_and_render(field)
    }

    /// The user pressed submit.
    ///
    /// Cancels any pending cycle, re-validates every field, then either
    /// focuses the first invalid field or starts a new submission cycle.
    ///
    /// Fails with [`SubmitError::NoRuntime`], leaving the form untouched,
    /// when called outside a Tokio runtime.
    pub fn on_submit(&self) -> Result<SubmitOutcome, SubmitError> {
        let runtime = Handle::try_current().map_err(|_| SubmitError::NoRuntime)?;
        let mut shared = self.shared.lock();

        if shared.cancel_pending() {
            shared.sink.hide_success();
        }
        shared.transition(SubmissionState::Validating);

        let mut errors = Vec::new();
        for field in FieldId::ALL {
            if let Err(invalid) = shared.validate_and_render(field) {
                errors.push(invalid);
            }
        }

        if let Some(first) = errors.first() {
            let first_invalid = first.field;
            shared.sink.focus(first_invalid);
            shared.transition(SubmissionState::Idle);
            tracing::info!(
                first_invalid = %first_invalid,
                errors = errors.len(),
                "submission rejected"
            );
            return Ok(SubmitOutcome::Rejected {
                first_invalid,
                errors,
            });
        }

        let cycle = shared.next_cycle;
        shared.next_cycle += 1;
        let cancel = CancellationToken::new();
        shared.pending = Some(PendingCycle {
            id: cycle,
            cancel: cancel.clone(),
        });
        shared.transition(SubmissionState::Submitting);
        drop(shared);

        tracing::info!(cycle, "submission accepted");
        let task = runtime.spawn(run_cycle(Arc::clone(&self.shared), self.config, cycle, cancel));
        Ok(SubmitOutcome::Accepted(SubmissionHandle { cycle, task }))
    }

    /// The user pressed reset: cancel any pending cycle and clear the form.
    pub fn on_reset(&self) {
        let mut shared = self.shared.lock();
        shared.cancel_pending();
        shared.clear_form();
        shared.transition(SubmissionState::Idle);
        tracing::info!("form reset");
    }
}

async fn run_cycle<S>(
    shared: Arc<Mutex<Shared<S>>>,
    config: FormConfig,
    cycle: u64,
    cancel: CancellationToken,
) where
    S: DisplaySink + Send + 'static,
{
    tokio::select! {
        () = tokio::time::sleep(config.submit_delay) => {}
        () = cancel.cancelled() => return,
    }

    {
        let mut guard = shared.lock();
        // Cancelled between the timer firing and taking the lock
        if cancel.is_cancelled() {
            return;
        }
        let payload = guard.model.payload(Utc::now());
        guard.transition(SubmissionState::ShowingSuccess);
        match serde_json::to_string(&payload) {
            Ok(json) => tracing::info!(cycle, payload = %json, "form submitted successfully"),
            Err(error) => tracing::warn!(cycle, error = %error, "could not serialize submission payload"),
        }
        guard.sink.show_success(&payload);
    }

    tokio::select! {
        () = tokio::time::sleep(config.reset_delay) => {}
        () = cancel.cancelled() => return,
    }

    let mut guard = shared.lock();
    if cancel.is_cancelled() {
        return;
    }
    guard.pending = None;
    guard.transition(SubmissionState::ResettingAfterDelay);
    guard.clear_form();
    guard.transition(SubmissionState::Idle);
    tracing::info!(cycle, "form reset after successful submission");
}
