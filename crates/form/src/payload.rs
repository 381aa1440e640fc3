//! The record produced by an accepted submission.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};

/// Trimmed field values plus the moment the submission completed.
///
/// Informational only: it is logged and handed to the display sink, never
/// stored or sent anywhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionPayload {
    /// Trimmed name.
    pub name: String,
    /// Trimmed email.
    pub email: String,
    /// Trimmed phone, as masked on screen.
    pub phone: String,
    /// Trimmed message.
    pub message: String,
    /// Completion time, serialized as ISO-8601 with milliseconds.
    #[serde(serialize_with = "iso_millis")]
    pub timestamp: DateTime<Utc>,
}

impl SubmissionPayload {
    /// `timestamp` as `YYYY-MM-DDTHH:MM:SS.sssZ`.
    #[must_use]
    pub fn timestamp_iso(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

fn iso_millis<S: Serializer>(timestamp: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&timestamp.to_rfc3339_opts(SecondsFormat::Millis, true))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn serializes_with_millisecond_timestamp() {
        let payload = SubmissionPayload {
            name: "Ada Lovelace".to_owned(),
            email: "ada@example.com".to_owned(),
            phone: "(555) 123-4567".to_owned(),
            message: "I would love to join the analytical engine team.".to_owned(),
            timestamp: Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap(),
        };

        assert_eq!(payload.timestamp_iso(), "2024-05-01T12:30:00.000Z");
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "name": "Ada Lovelace",
                "email": "ada@example.com",
                "phone": "(555) 123-4567",
                "message": "I would love to join the analytical engine team.",
                "timestamp": "2024-05-01T12:30:00.000Z",
            })
        );
    }
}
