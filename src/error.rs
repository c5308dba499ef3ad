//! Error types used by the logging shim.
//!
//! [`LoggingError`] covers everything the crate can report: invalid logger
//! tags, unparsable levels or filter directives, and sink write failures.
//!
//! Subscriber failures are **not** represented here: a subscriber that panics
//! unwinds through [`EventBus::emit`](crate::EventBus::emit) and is contained
//! by [`Logger`](crate::Logger) with `catch_unwind`.
//!
//! Like the other enums of the crate it provides `as_label` / `as_message`
//! helpers for logs.

use thiserror::Error;

/// # Errors produced by the logging shim.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoggingError {
    /// Explicit logger tag is longer than the platform allows.
    #[error("tag {tag:?} is {len} chars long; the maximum is {max}")]
    TagTooLong {
        /// The rejected tag.
        tag: String,
        /// Its length in chars.
        len: usize,
        /// The configured maximum.
        max: usize,
    },

    /// Explicit logger tag is empty.
    #[error("tag must not be empty")]
    EmptyTag,

    /// A level name or letter could not be parsed.
    #[error("unknown log level {value:?}")]
    InvalidLevel {
        /// The rejected input.
        value: String,
    },

    /// A filter directive could not be parsed.
    #[error("invalid filter directive {directive:?}")]
    InvalidDirective {
        /// The rejected directive.
        directive: String,
    },

    /// The platform sink failed to write a line.
    #[error("sink write failed: {reason}")]
    Sink {
        /// Underlying failure description.
        reason: String,
    },
}

impl LoggingError {
    /// Returns a short stable label (snake_case) for use in logs.
    ///
    /// # Example
    /// ```
    /// use droid_logging::LoggingError;
    ///
    /// let err = LoggingError::EmptyTag;
    /// assert_eq!(err.as_label(), "empty_tag");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            LoggingError::TagTooLong { .. } => "tag_too_long",
            LoggingError::EmptyTag => "empty_tag",
            LoggingError::InvalidLevel { .. } => "invalid_level",
            LoggingError::InvalidDirective { .. } => "invalid_directive",
            LoggingError::Sink { .. } => "sink_failed",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            LoggingError::TagTooLong { tag, len, max } => {
                format!("tag too long: {tag} ({len} > {max})")
            }
            LoggingError::EmptyTag => "empty tag".to_string(),
            LoggingError::InvalidLevel { value } => format!("invalid level: {value}"),
            LoggingError::InvalidDirective { directive } => {
                format!("invalid directive: {directive}")
            }
            LoggingError::Sink { reason } => format!("sink: {reason}"),
        }
    }

    /// Shorthand for a [`LoggingError::Sink`].
    pub fn sink(reason: impl Into<String>) -> Self {
        LoggingError::Sink {
            reason: reason.into(),
        }
    }
}
