//! # Platform sink trait.
//!
//! [`LogSink`] is the final destination of a log line: logcat, `os_log`, a
//! terminal. The logger calls it only for loggable records, after the record
//! has been offered to the bus.

use crate::error::LoggingError;
use crate::events::LogLevel;

/// Writes one log line to the platform log.
///
/// ### Implementation requirements
/// - Return an error instead of panicking; the logger reports it once and
///   carries on.
/// - Do not call back into the logger from `write`.
pub trait LogSink: Send + Sync {
    /// Writes `message` (and the optional `stack_trace`) under `tag` at `level`.
    fn write(
        &self,
        tag: &str,
        level: LogLevel,
        message: &str,
        stack_trace: Option<&str>,
    ) -> Result<(), LoggingError>;
}

/// Sink that discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl LogSink for NullSink {
    fn write(&self, _: &str, _: LogLevel, _: &str, _: Option<&str>) -> Result<(), LoggingError> {
        Ok(())
    }
}
