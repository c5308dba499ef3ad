//! # Tagged logger façade.
//!
//! [`Logger`] is what application code holds: a tag plus a handle to the
//! [`LoggingContext`] that owns the bus, filter and sink.
//!
//! ## Call flow
//! ```text
//! logger.warn_with(|| expensive())
//!   ├─► loggable = filter.is_loggable(tag, Warn)      (Assert: always true)
//!   ├─► observe  = loggable || (Warn >= always_emit_from && bus has subscribers)
//!   ├─► neither? ──► return (closure never runs)
//!   ├─► message  = expensive().to_string()
//!   ├─► observe? ──► bus.emit(LogRecord)   inside catch_unwind
//!   │                  └─ panic ─► sink.write(fallback_tag, Error, "Emit log record failed")
//!   └─► loggable? ─► sink.write(tag, Warn, message)
//!                      └─ error ─► sink.write(tag, Error, "Regular logging failed")
//! ```
//!
//! ## Method families
//! | Call                         | Message                      | Stack trace        |
//! |------------------------------|------------------------------|--------------------|
//! | `info(msg)`                  | any `Display` (`format_args!` stays lazy) | none  |
//! | `info_err(msg, &err)`        | any `Display`                | error source chain |
//! | `info_with(\|\| msg)`        | closure, run only if needed  | none               |
//! | `wtf*`                       | always emitted and written   | optional           |

use std::error::Error;
use std::fmt::{self, Display};
use std::sync::Arc;

use crate::core::LoggingContext;
use crate::error::LoggingError;
use crate::events::LogLevel;

use super::tag::{tag_for, validate_tag};

/// Tagged handle for writing log lines.
///
/// Cheap to clone; all clones share the context.
#[derive(Clone)]
pub struct Logger {
    tag: Arc<str>,
    ctx: LoggingContext,
}

macro_rules! level_methods {
    ($($level:ident => $plain:ident, $err:ident, $with:ident;)+) => {
        $(
            #[doc = concat!("Logs `message` at [`LogLevel::", stringify!($level), "`].")]
            #[inline]
            pub fn $plain(&self, message: impl Display) {
                self.log(LogLevel::$level, message);
            }

            #[doc = concat!("Logs `message` at [`LogLevel::", stringify!($level), "`] with `err`'s source chain as stack trace.")]
            #[inline]
            pub fn $err(&self, message: impl Display, err: &(dyn Error + 'static)) {
                self.log_err(LogLevel::$level, message, err);
            }

            #[doc = concat!("Logs at [`LogLevel::", stringify!($level), "`], building the message only if it will be used.")]
            #[inline]
            pub fn $with<M, F>(&self, message: F)
            where
                F: FnOnce() -> M,
                M: Display,
            {
                self.log_with(LogLevel::$level, message);
            }
        )+
    };
}

impl Logger {
    /// Creates a logger whose tag is derived from `T`'s type name.
    pub fn for_type<T: ?Sized>(ctx: &LoggingContext) -> Self {
        Self {
            tag: tag_for::<T>(ctx.config().tag_limit()).into(),
            ctx: ctx.clone(),
        }
    }

    /// Creates a logger with an explicit tag.
    ///
    /// Fails with [`LoggingError::TagTooLong`] or [`LoggingError::EmptyTag`].
    pub fn named(ctx: &LoggingContext, tag: &str) -> Result<Self, LoggingError> {
        Ok(Self {
            tag: validate_tag(tag, ctx.config().tag_limit())?,
            ctx: ctx.clone(),
        })
    }

    pub(crate) fn from_parts(tag: Arc<str>, ctx: LoggingContext) -> Self {
        Self { tag, ctx }
    }

    /// The logger's tag.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The context this logger writes through.
    pub fn context(&self) -> &LoggingContext {
        &self.ctx
    }

    /// True if a line at `level` would reach the platform sink.
    pub fn is_loggable(&self, level: LogLevel) -> bool {
        self.ctx.is_loggable(&self.tag, level)
    }

    /// Logs `message` at `level`.
    pub fn log(&self, level: LogLevel, message: impl Display) {
        self.ctx
            .dispatch(&self.tag, level, || (message.to_string(), None));
    }

    /// Logs `message` at `level` with `err`'s source chain as stack trace.
    pub fn log_err(&self, level: LogLevel, message: impl Display, err: &(dyn Error + 'static)) {
        self.ctx.dispatch(&self.tag, level, || {
            (message.to_string(), Some(error_chain(err)))
        });
    }

    /// Logs at `level`, running `message` only if the line will be observed
    /// or written.
    pub fn log_with<M, F>(&self, level: LogLevel, message: F)
    where
        F: FnOnce() -> M,
        M: Display,
    {
        self.ctx
            .dispatch(&self.tag, level, || (message().to_string(), None));
    }

    level_methods! {
        Verbose => verbose, verbose_err, verbose_with;
        Debug => debug, debug_err, debug_with;
        Info => info, info_err, info_with;
        Warn => warn, warn_err, warn_with;
        Error => error, error_err, error_with;
    }

    /// Reports a condition that should never happen.
    ///
    /// Always emitted and always written, whatever the filter says.
    pub fn wtf(&self, message: impl Display) {
        self.log(LogLevel::Assert, message);
    }

    /// Like [`wtf`](Self::wtf), with `err`'s source chain as stack trace.
    pub fn wtf_err(&self, message: impl Display, err: &(dyn Error + 'static)) {
        self.log_err(LogLevel::Assert, message, err);
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger").field("tag", &self.tag).finish()
    }
}

/// Renders an error and its `source()` chain, one cause per line.
///
/// ```text
/// request failed
/// caused by: io error
/// caused by: connection reset
/// ```
pub fn error_chain(err: &(dyn Error + 'static)) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        out.push_str("\ncaused by: ");
        out.push_str(&cause.to_string());
        source = cause.source();
    }
    out
}
