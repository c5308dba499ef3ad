//! # Log records carried by the bus.
//!
//! [`LogRecord`] is the immutable value that every log call produces and that
//! [`EventBus`](crate::EventBus) hands to observers. [`LogLevel`] classifies it.
//!
//! ## Level ordering
//! ```text
//! Verbose < Debug < Info < Warn < Error < Assert
//!    V        D       I      W      E       A
//!    2        3       4      5      6       7      (platform priority)
//! ```
//!
//! ## Example
//! ```rust
//! use droid_logging::{LogLevel, LogRecord};
//!
//! let rec = LogRecord::new(LogLevel::Warn, "Network", "retrying")
//!     .with_stack_trace("timed out");
//!
//! assert_eq!(rec.level, LogLevel::Warn);
//! assert_eq!(rec.tag.as_ref(), "Network");
//! assert_eq!(rec.stack_trace.as_deref(), Some("timed out"));
//! ```

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::LoggingError;

/// Rendering used by [`LogRecord::date`]; always UTC.
const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Severity of a log record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Chatty diagnostics, normally suppressed.
    Verbose,
    /// Developer diagnostics.
    Debug,
    /// Normal operation.
    Info,
    /// Something unexpected but recoverable.
    Warn,
    /// An operation failed.
    Error,
    /// A condition that should never happen ("what a terrible failure").
    Assert,
}

impl LogLevel {
    /// All levels in ascending severity.
    pub const ALL: [LogLevel; 6] = [
        LogLevel::Verbose,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
        LogLevel::Assert,
    ];

    /// Platform priority number (`android/log.h` numbering).
    pub const fn priority(self) -> i32 {
        match self {
            LogLevel::Verbose => 2,
            LogLevel::Debug => 3,
            LogLevel::Info => 4,
            LogLevel::Warn => 5,
            LogLevel::Error => 6,
            LogLevel::Assert => 7,
        }
    }

    /// Inverse of [`priority`](Self::priority).
    pub fn from_priority(priority: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.priority() == priority)
    }

    /// One-letter code used by logcat output and tag properties.
    pub const fn as_char(self) -> char {
        match self {
            LogLevel::Verbose => 'V',
            LogLevel::Debug => 'D',
            LogLevel::Info => 'I',
            LogLevel::Warn => 'W',
            LogLevel::Error => 'E',
            LogLevel::Assert => 'A',
        }
    }

    /// Lowercase name, stable for logs and serialization.
    pub const fn as_str(self) -> &'static str {
        match self {
            LogLevel::Verbose => "verbose",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Assert => "assert",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = LoggingError;

    /// Accepts full names (`"warn"`, `"warning"`, `"wtf"`) and one-letter codes,
    /// case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let level = match s.trim().to_ascii_lowercase().as_str() {
            "v" | "verbose" | "trace" => LogLevel::Verbose,
            "d" | "debug" => LogLevel::Debug,
            "i" | "info" => LogLevel::Info,
            "w" | "warn" | "warning" => LogLevel::Warn,
            "e" | "error" => LogLevel::Error,
            "a" | "assert" | "wtf" => LogLevel::Assert,
            _ => {
                return Err(LoggingError::InvalidLevel {
                    value: s.to_string(),
                })
            }
        };
        Ok(level)
    }
}

/// Immutable log record.
///
/// Built once at the call site and never mutated afterwards. Text fields are
/// `Arc<str>` so a record is cheap to clone into async observers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogRecord {
    /// Severity.
    pub level: LogLevel,
    /// Tag of the logger that produced the record.
    pub tag: Arc<str>,
    /// Rendered message.
    pub message: Arc<str>,
    /// Error chain rendered as text, if the call carried an error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack_trace: Option<Arc<str>>,
    /// Wall-clock creation time (UTC).
    pub timestamp: DateTime<Utc>,
}

impl LogRecord {
    /// Creates a record stamped with the current time.
    pub fn new(level: LogLevel, tag: impl Into<Arc<str>>, message: impl Into<Arc<str>>) -> Self {
        Self {
            level,
            tag: tag.into(),
            message: message.into(),
            stack_trace: None,
            timestamp: Utc::now(),
        }
    }

    /// Attaches a stack trace.
    #[inline]
    pub fn with_stack_trace(mut self, trace: impl Into<Arc<str>>) -> Self {
        self.stack_trace = Some(trace.into());
        self
    }

    /// Overrides the timestamp.
    #[inline]
    pub fn with_timestamp(mut self, at: DateTime<Utc>) -> Self {
        self.timestamp = at;
        self
    }

    /// Milliseconds since the Unix epoch.
    #[inline]
    pub fn timestamp_millis(&self) -> i64 {
        self.timestamp.timestamp_millis()
    }

    /// Timestamp rendered as `YYYY-MM-dd HH:mm:ss.SSS` (UTC).
    pub fn date(&self) -> String {
        self.timestamp.format(DATE_FORMAT).to_string()
    }
}

impl fmt::Display for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}/{}: {}",
            self.date(),
            self.level.as_char(),
            self.tag,
            self.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_levels_are_ordered_by_severity() {
        for pair in LogLevel::ALL.windows(2) {
            assert!(pair[0] < pair[1], "{:?} should be below {:?}", pair[0], pair[1]);
            assert!(pair[0].priority() < pair[1].priority());
        }
    }

    #[test]
    fn test_priority_round_trip_and_unknown() {
        for level in LogLevel::ALL {
            assert_eq!(LogLevel::from_priority(level.priority()), Some(level));
        }
        assert_eq!(LogLevel::from_priority(-1), None);
        assert_eq!(LogLevel::from_priority(8), None);
    }

    #[test]
    fn test_parse_names_and_letters() {
        assert_eq!("V".parse::<LogLevel>().unwrap(), LogLevel::Verbose);
        assert_eq!("debug".parse::<LogLevel>().unwrap(), LogLevel::Debug);
        assert_eq!(" Warning ".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert_eq!("WTF".parse::<LogLevel>().unwrap(), LogLevel::Assert);

        let err = "loud".parse::<LogLevel>().unwrap_err();
        assert_eq!(err.as_label(), "invalid_level");
    }

    #[test]
    fn test_date_is_utc_with_millis() {
        let at = Utc.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap()
            + chrono::Duration::milliseconds(42);
        let rec = LogRecord::new(LogLevel::Info, "App", "hi").with_timestamp(at);

        assert_eq!(rec.date(), "2024-03-09 07:05:01.042");
        assert_eq!(rec.to_string(), "2024-03-09 07:05:01.042 I/App: hi");
        assert_eq!(rec.timestamp_millis(), at.timestamp_millis());
    }

    #[test]
    fn test_serializes_camel_case_and_skips_missing_trace() {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let rec = LogRecord::new(LogLevel::Error, "Db", "down").with_timestamp(at);

        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json["level"], "error");
        assert_eq!(json["tag"], "Db");
        assert!(json.get("stackTrace").is_none());

        let json = serde_json::to_value(rec.with_stack_trace("boom")).unwrap();
        assert_eq!(json["stackTrace"], "boom");
    }
}
