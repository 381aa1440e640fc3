//! # jobform-log
//!
//! Logging setup for jobform binaries and tests, on top of `tracing` and
//! `tracing-subscriber`.
//!
//! ```rust,ignore
//! // Filter and format from JOBFORM_LOG / RUST_LOG / JOBFORM_LOG_FORMAT
//! jobform_log::init(jobform_log::Config::from_env())?;
//! tracing::info!("ready");
//! ```

pub mod builder;
pub mod config;
pub mod error;

pub use builder::LoggerBuilder;
pub use config::{Config, DisplayConfig, Format};
pub use error::{LogError, LogResult};

/// Install the global subscriber described by `config`.
pub fn init(config: Config) -> LogResult<()> {
    LoggerBuilder::from_config(config).build()
}

/// Install the test subscriber once; later calls are no-ops.
///
/// Safe to call at the top of every test.
pub fn init_test() {
    // Already installed by an earlier test in the same binary
    let _ = init(Config::test());
}
