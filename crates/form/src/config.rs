//! Timing configuration of the submission cycle.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Delays of the simulated submission.
///
/// Serialized with millisecond fields:
///
/// ```
/// use std::time::Duration;
/// use jobform::FormConfig;
///
/// let config: FormConfig = serde_json::from_str(r#"{"submit_delay_ms": 10, "reset_delay_ms": 20}"#).unwrap();
/// assert_eq!(config.submit_delay, Duration::from_millis(10));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Time between an accepted submit and the success message. Default: 1.5s
    #[serde(rename = "submit_delay_ms", with = "millis")]
    pub submit_delay: Duration,
    /// Time the success message stays up before the form resets. Default: 3s
    #[serde(rename = "reset_delay_ms", with = "millis")]
    pub reset_delay: Duration,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            submit_delay: Duration::from_millis(1500),
            reset_delay: Duration::from_millis(3000),
        }
    }
}

impl FormConfig {
    /// Sets the submit delay.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_submit_delay(mut self, delay: Duration) -> Self {
        self.submit_delay = delay;
        self
    }

    /// Sets the reset delay.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_reset_delay(mut self, delay: Duration) -> Self {
        self.reset_delay = delay;
        self
    }

    /// Validate the config, returning an error if a delay is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.submit_delay.is_zero() {
            return Err(ConfigError::ZeroDelay("submit_delay"));
        }
        if self.reset_delay.is_zero() {
            return Err(ConfigError::ZeroDelay("reset_delay"));
        }
        Ok(())
    }
}

mod millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub(super) fn serialize<S: Serializer>(delay: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(u64::try_from(delay.as_millis()).unwrap_or(u64::MAX))
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults() {
        let config = FormConfig::default();
        assert_eq!(config.submit_delay, Duration::from_millis(1500));
        assert_eq!(config.reset_delay, Duration::from_secs(3));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_delays_rejected() {
        let config = FormConfig::default().with_submit_delay(Duration::ZERO);
        assert_eq!(config.validate(), Err(ConfigError::ZeroDelay("submit_delay")));

        let config = FormConfig::default().with_reset_delay(Duration::ZERO);
        assert_eq!(
            config.validate().unwrap_err().to_string(),
            "reset_delay must be greater than zero"
        );
    }

    #[test]
    fn serde_uses_milliseconds() {
        let config = FormConfig::default().with_submit_delay(Duration::from_millis(250));
        assert_eq!(
            serde_json::to_value(config).unwrap(),
            json!({ "submit_delay_ms": 250, "reset_delay_ms": 3000 })
        );

        let partial: FormConfig = serde_json::from_value(json!({ "reset_delay_ms": 10 })).unwrap();
        assert_eq!(partial.submit_delay, Duration::from_millis(1500));
        assert_eq!(partial.reset_delay, Duration::from_millis(10));
    }
}
