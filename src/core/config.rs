//! # Logging configuration.
//!
//! Provides [`Config`], centralized settings for a
//! [`LoggingContext`](crate::LoggingContext) and the loggers it creates.
//!
//! ## Sentinel values
//! - `max_tag_len = 0` → tags are not length-checked or truncated
//! - `broadcast_capacity = 0` → clamped to 1 by the bridge

use crate::events::LogLevel;

/// Platform limit on logger tag length.
pub const MAX_TAG_LEN: usize = 23;

/// Tag used when the logger reports its own failures.
pub const FALLBACK_TAG: &str = "DroidLogging";

/// Configuration for a logging context.
///
/// ## Field semantics
/// - `max_tag_len`: longest accepted/derived tag in chars (`0` = unlimited)
/// - `always_emit_from`: records at or above this level reach the bus even
///   when the filter suppresses them for the platform log
/// - `fallback_tag`: tag for "emit failed" reports
/// - `broadcast_capacity`: ring buffer size of a bridge built by the context
#[derive(Clone, Debug)]
pub struct Config {
    /// Maximum tag length in chars.
    ///
    /// Derived tags are truncated to it; explicit tags longer than it are rejected.
    pub max_tag_len: usize,

    /// Lowest level that is offered to observers regardless of the filter.
    pub always_emit_from: LogLevel,

    /// Tag under which the logger reports subscriber failures.
    pub fallback_tag: String,

    /// Capacity of the broadcast bridge ring buffer.
    pub broadcast_capacity: usize,
}

impl Config {
    /// Returns the tag length limit as an `Option`.
    ///
    /// - `None` → unlimited
    /// - `Some(n)` → at most `n` chars
    #[inline]
    pub fn tag_limit(&self) -> Option<usize> {
        if self.max_tag_len == 0 {
            None
        } else {
            Some(self.max_tag_len)
        }
    }

    /// True if `level` is offered to observers even when not loggable.
    #[inline]
    pub fn always_emits(&self, level: LogLevel) -> bool {
        level >= self.always_emit_from
    }

    /// Returns a broadcast capacity clamped to a minimum of 1.
    #[inline]
    pub fn broadcast_capacity_clamped(&self) -> usize {
        self.broadcast_capacity.max(1)
    }
}

impl Default for Config {
    /// Default configuration:
    ///
    /// - `max_tag_len = 23` (platform limit)
    /// - `always_emit_from = Info`
    /// - `fallback_tag = "DroidLogging"`
    /// - `broadcast_capacity = 1024`
    fn default() -> Self {
        Self {
            max_tag_len: MAX_TAG_LEN,
            always_emit_from: LogLevel::Info,
            fallback_tag: FALLBACK_TAG.to_string(),
            broadcast_capacity: 1024,
        }
    }
}
