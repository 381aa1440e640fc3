//! Shared fixtures for controller integration tests.

#![allow(dead_code)]

use jobform::{DisplaySink, FieldId, FormConfig, FormController, SubmissionPayload, SubmissionState};

/// One call made on the display sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkEvent {
    Valid(FieldId),
    Invalid(FieldId, String),
    Cleared(FieldId),
    Value(FieldId, String),
    Focus(FieldId),
    State(SubmissionState),
    Success(SubmissionPayload),
    HideSuccess,
}

/// Records every sink call in order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub events: Vec<SinkEvent>,
}

impl DisplaySink for RecordingSink {
    fn show_valid(&mut self, field: FieldId) {
        self.events.push(SinkEvent::Valid(field));
    }

    fn show_invalid(&mut self, field: FieldId, message: &str) {
        self.events.push(SinkEvent::Invalid(field, message.to_string()));
    }

    fn clear_field(&mut self, field: FieldId) {
        self.events.push(SinkEvent::Cleared(field));
    }

    fn set_value(&mut self, field: FieldId, value: &str) {
        self.events.push(SinkEvent::Value(field, value.to_string()));
    }

    fn focus(&mut self, field: FieldId) {
        self.events.push(SinkEvent::Focus(field));
    }

    fn state_changed(&mut self, state: SubmissionState) {
        self.events.push(SinkEvent::State(state));
    }

    fn show_success(&mut self, payload: &SubmissionPayload) {
        self.events.push(SinkEvent::Success(payload.clone()));
    }

    fn hide_success(&mut self) {
        self.events.push(SinkEvent::HideSuccess);
    }
}

pub const VALID_NAME: &str = "  Ada Lovelace  ";
pub const VALID_EMAIL: &str = "ada@example.com";
pub const VALID_PHONE: &str = "5551234567";
pub const VALID_MESSAGE: &str = "I would love to work on the analytical engine.";

pub fn controller() -> FormController<RecordingSink> {
    jobform_log::init_test();
    FormController::new(FormConfig::default(), RecordingSink::default())
        .expect("default config is valid")
}

/// Fills every field with a valid value.
pub fn fill_valid(controller: &FormController<RecordingSink>) {
    for (field, value) in [
        (FieldId::Name, VALID_NAME),
        (FieldId::Email, VALID_EMAIL),
        (FieldId::Phone, VALID_PHONE),
        (FieldId::Message, VALID_MESSAGE),
    ] {
        controller
            .on_field_change(field, value)
            .expect("fixture value is valid");
    }
}

pub fn events(controller: &FormController<RecordingSink>) -> Vec<SinkEvent> {
    controller.with_sink(|sink| sink.events.clone())
}

pub fn successes(controller: &FormController<RecordingSink>) -> Vec<SubmissionPayload> {
    events(controller)
        .into_iter()
        .filter_map(|event| match event {
            SinkEvent::Success(payload) => Some(payload),
            _ => None,
        })
        .collect()
}

pub fn states(controller: &FormController<RecordingSink>) -> Vec<SubmissionState> {
    events(controller)
        .into_iter()
        .filter_map(|event| match event {
            SinkEvent::State(state) => Some(state),
            _ => None,
        })
        .collect()
}

/// Advances paused time in 100 ms steps, yielding between each so the
/// spawned cycle processes its timer wakes.
pub async fn advance_stepwise(total: std::time::Duration) {
    // Let freshly spawned cycles register their first timer
    for _ in 0..4 {
        tokio::task::yield_now().await;
    }
    let step = std::time::Duration::from_millis(100);
    let steps = total.as_millis() / step.as_millis();
    for _ in 0..steps {
        tokio::time::advance(step).await;
        tokio::task::yield_now().await;
    }
    for _ in 0..4 {
        tokio::task::yield_now().await;
    }
}

/// How many times the success message was hidden in `events`.
pub fn hides(events: &[SinkEvent]) -> usize {
    events
        .iter()
        .filter(|event| matches!(event, SinkEvent::HideSuccess))
        .count()
}
