//! # Level filters: "is this tag enabled at this level?"
//!
//! [`LevelFilter`] is the predicate the logger consults before formatting or
//! writing anything. Any `Fn(&str, LogLevel) -> bool` closure is a filter, so
//! hosts can plug in the platform's own check (`__android_log_is_loggable`).
//!
//! [`TagLevelFilter`] is the built-in implementation: a default minimum level
//! plus per-tag overrides, with `S` fully silencing a tag, like Android's
//! `log.tag.<TAG>` properties.
//!
//! ## Directive syntax
//! ```text
//! directives := directive ("," directive)*
//! directive  := LEVEL            default minimum level
//!             | TAG "=" LEVEL    override for one tag
//!             | TAG "=" "S"      silence one tag
//! LEVEL      := V | D | I | W | E | A | verbose | debug | info | warn | error | assert
//! ```
//!
//! ## Example
//! ```rust
//! use droid_logging::{LevelFilter, LogLevel, TagLevelFilter};
//!
//! let filter: TagLevelFilter = "W,Network=V,Chatty=S".parse().unwrap();
//!
//! assert!(filter.is_loggable("Network", LogLevel::Verbose));
//! assert!(!filter.is_loggable("Db", LogLevel::Info));
//! assert!(!filter.is_loggable("Chatty", LogLevel::Assert));
//! ```

use std::collections::HashMap;
use std::str::FromStr;

use crate::error::LoggingError;
use crate::events::LogLevel;

/// Predicate deciding whether a tag logs at a given level.
pub trait LevelFilter: Send + Sync {
    /// Returns `true` if a record with `tag` and `level` should be written.
    fn is_loggable(&self, tag: &str, level: LogLevel) -> bool;
}

impl<F> LevelFilter for F
where
    F: Fn(&str, LogLevel) -> bool + Send + Sync,
{
    fn is_loggable(&self, tag: &str, level: LogLevel) -> bool {
        self(tag, level)
    }
}

/// Threshold for one tag: a minimum level, or fully silenced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TagThreshold {
    /// Log at this level and above.
    AtLeast(LogLevel),
    /// Log nothing for this tag.
    Suppress,
}

impl TagThreshold {
    fn allows(self, level: LogLevel) -> bool {
        match self {
            TagThreshold::AtLeast(min) => level >= min,
            TagThreshold::Suppress => false,
        }
    }
}

impl FromStr for TagThreshold {
    type Err = LoggingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t.eq_ignore_ascii_case("s") || t.eq_ignore_ascii_case("suppress") {
            return Ok(TagThreshold::Suppress);
        }
        t.parse().map(TagThreshold::AtLeast)
    }
}

/// Default level plus per-tag overrides.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagLevelFilter {
    default: LogLevel,
    overrides: HashMap<String, TagThreshold>,
}

impl TagLevelFilter {
    /// Creates a filter with a default minimum level and no overrides.
    pub fn new(default: LogLevel) -> Self {
        Self {
            default,
            overrides: HashMap::new(),
        }
    }

    /// Sets the minimum level for one tag.
    pub fn with_tag(mut self, tag: impl Into<String>, min: LogLevel) -> Self {
        self.overrides.insert(tag.into(), TagThreshold::AtLeast(min));
        self
    }

    /// Silences one tag entirely.
    pub fn suppress(mut self, tag: impl Into<String>) -> Self {
        self.overrides.insert(tag.into(), TagThreshold::Suppress);
        self
    }

    /// Default minimum level for tags without an override.
    pub fn default_level(&self) -> LogLevel {
        self.default
    }

    /// Effective threshold for `tag`.
    pub fn threshold(&self, tag: &str) -> TagThreshold {
        self.overrides
            .get(tag)
            .copied()
            .unwrap_or(TagThreshold::AtLeast(self.default))
    }
}

impl Default for TagLevelFilter {
    /// Platform default: `Info` and above.
    fn default() -> Self {
        Self::new(LogLevel::Info)
    }
}

impl LevelFilter for TagLevelFilter {
    fn is_loggable(&self, tag: &str, level: LogLevel) -> bool {
        self.threshold(tag).allows(level)
    }
}

impl FromStr for TagLevelFilter {
    type Err = LoggingError;

    /// Parses a comma-separated directive list; see the module docs.
    ///
    /// Later directives win. Empty directives are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut filter = TagLevelFilter::default();
        for raw in s.split(',') {
            let directive = raw.trim();
            if directive.is_empty() {
                continue;
            }
            let invalid = || LoggingError::InvalidDirective {
                directive: directive.to_string(),
            };

            match directive.split_once('=') {
                Some((tag, level)) => {
                    let tag = tag.trim();
                    if tag.is_empty() {
                        return Err(invalid());
                    }
                    let threshold = level.parse::<TagThreshold>().map_err(|_| invalid())?;
                    filter.overrides.insert(tag.to_string(), threshold);
                }
                None => {
                    filter.default = directive.parse().map_err(|_| invalid())?;
                }
            }
        }
        Ok(filter)
    }
}
