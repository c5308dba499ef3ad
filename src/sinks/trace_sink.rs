//! # TracingSink — forwards log lines to `tracing`.
//!
//! The default sink. On Android or iOS the host installs a platform layer
//! (`tracing-android`, `tracing-oslog`); on desktop
//! [`init_tracing`](crate::init_tracing) installs a fmt subscriber.
//!
//! ## Level mapping
//! ```text
//! Verbose → TRACE   Debug → DEBUG   Info → INFO
//! Warn    → WARN    Error → ERROR   Assert → ERROR (assert = true)
//! ```

use tracing::{debug, error, info, trace, warn};

use crate::error::LoggingError;
use crate::events::LogLevel;

use super::LogSink;

/// Target used for every event written by [`TracingSink`].
pub const TRACING_TARGET: &str = "droid_logging";

/// Sink emitting one `tracing` event per log line.
///
/// The tag, platform priority and stack trace travel as structured fields.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl TracingSink {
    /// Construct a new [`TracingSink`].
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// `tracing` level a [`LogLevel`] is written at.
    pub fn tracing_level(level: LogLevel) -> tracing::Level {
        match level {
            LogLevel::Verbose => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error | LogLevel::Assert => tracing::Level::ERROR,
        }
    }
}

impl LogSink for TracingSink {
    fn write(
        &self,
        tag: &str,
        level: LogLevel,
        message: &str,
        stack_trace: Option<&str>,
    ) -> Result<(), LoggingError> {
        let priority = level.priority();
        // Macros need a constant level, hence one arm per level.
        match level {
            LogLevel::Verbose => {
                trace!(target: TRACING_TARGET, tag, priority, stack_trace, "{message}")
            }
            LogLevel::Debug => {
                debug!(target: TRACING_TARGET, tag, priority, stack_trace, "{message}")
            }
            LogLevel::Info => {
                info!(target: TRACING_TARGET, tag, priority, stack_trace, "{message}")
            }
            LogLevel::Warn => {
                warn!(target: TRACING_TARGET, tag, priority, stack_trace, "{message}")
            }
            LogLevel::Error => {
                error!(target: TRACING_TARGET, tag, priority, stack_trace, "{message}")
            }
            LogLevel::Assert => {
                error!(target: TRACING_TARGET, tag, priority, stack_trace, assert = true, "{message}")
            }
        }
        Ok(())
    }
}
