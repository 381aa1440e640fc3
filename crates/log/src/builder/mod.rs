//! Logger builder implementation

use tracing_subscriber::{EnvFilter, Layer, Registry, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Config, DisplayConfig, Format};
use crate::error::{LogError, LogResult};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync + 'static>;

/// Applies the display toggles to a fmt layer and boxes it.
///
/// `without_time` and `with_test_writer` change the layer's type, so every
/// combination is boxed separately.
macro_rules! boxed_fmt_layer {
    ($layer:expr, $display:expr, $test_writer:expr) => {{
        let display: &DisplayConfig = $display;
        let layer = $layer
            .with_ansi(display.colors)
            .with_target(display.target)
            .with_file(display.source)
            .with_line_number(display.source);
        match (display.time, $test_writer) {
            (true, false) => layer.boxed(),
            (false, false) => layer.without_time().boxed(),
            (true, true) => layer.with_test_writer().boxed(),
            (false, true) => layer.without_time().with_test_writer().boxed(),
        }
    }};
}

/// Logger builder
#[derive(Debug)]
pub struct LoggerBuilder {
    config: Config,
}

impl LoggerBuilder {
    /// Create builder from config
    #[must_use]
    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    /// Build and install the global subscriber.
    ///
    /// # Errors
    ///
    /// - the filter string cannot be parsed
    /// - a global subscriber is already installed
    pub fn build(self) -> LogResult<()> {
        let filter = EnvFilter::try_new(&self.config.level)
            .map_err(|e| LogError::Filter(format!("{}: {}", self.config.level, e)))?;

        Registry::default()
            .with(self.fmt_layer())
            .with(filter)
            .try_init()
            .map_err(|e| LogError::Init(e.to_string()))?;

        tracing::debug!(
            level = %self.config.level,
            format = %self.config.format,
            "logger initialized"
        );
        Ok(())
    }

    fn fmt_layer(&self) -> BoxedLayer {
        let display = &self.config.display;
        let test_writer = self.config.test_writer;
        match self.config.format {
            Format::Pretty => {
                boxed_fmt_layer!(tracing_subscriber::fmt::layer().pretty(), display, test_writer)
            }
            Format::Compact => {
                boxed_fmt_layer!(tracing_subscriber::fmt::layer().compact(), display, test_writer)
            }
            Format::Json => boxed_fmt_layer!(
                tracing_subscriber::fmt::layer().json().flatten_event(true),
                display,
                test_writer
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_filter_is_rejected() {
        let config = Config {
            level: "jobform=loud".to_string(),
            ..Config::test()
        };
        let err = LoggerBuilder::from_config(config).build().unwrap_err();
        assert!(matches!(err, LogError::Filter(ref msg) if msg.starts_with("jobform=loud")));
    }

    #[test]
    fn init_installs_global_dispatcher() {
        crate::init_test();
        assert!(tracing::dispatcher::has_been_set());
        tracing::debug!("visible through the test writer");
    }

    #[test]
    fn second_init_reports_error() {
        crate::init_test();
        let err = LoggerBuilder::from_config(Config::test()).build().unwrap_err();
        assert!(matches!(err, LogError::Init(_)));
    }
}
