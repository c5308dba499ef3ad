//! # LoggingContext: the explicitly owned logging hub.
//!
//! One context owns one [`EventBus<LogRecord>`], one [`LevelFilter`], one
//! [`LogSink`] and the [`Config`]. Whoever sets up logging builds it once and
//! hands clones to producers (loggers) and consumers (subscribers).
//!
//! ## Architecture
//! ```text
//!  LoggingContext (Arc)
//!  ├─ Config
//!  ├─ LevelFilter ◄──────── is_loggable(tag, level)
//!  ├─ LogSink     ◄──────── write(tag, level, message, stack_trace)
//!  └─ EventBus<LogRecord> ─► subscribers (closures, Subscribe objects, bridge)
//!         ▲
//!         └── emit ◄── Logger (tag) ◄── application code
//! ```

use std::any::Any;
use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

use crate::error::LoggingError;
use crate::events::{EventBus, LogLevel, LogRecord, SubscriptionId};
use crate::logger::{truncate_chars, Logger, Tagged};
use crate::policies::LevelFilter;
use crate::sinks::{LogSink, TRACING_TARGET};
use crate::subscribers::Subscribe;

use super::builder::LoggingContextBuilder;
use super::config::Config;

pub(super) struct Inner {
    pub(super) cfg: Config,
    pub(super) bus: EventBus<LogRecord>,
    pub(super) filter: Arc<dyn LevelFilter>,
    pub(super) sink: Arc<dyn LogSink>,
}

/// Shared logging hub. Cheap to clone.
#[derive(Clone)]
pub struct LoggingContext {
    inner: Arc<Inner>,
}

impl LoggingContext {
    /// Returns a builder for configuring the context.
    pub fn builder(cfg: Config) -> LoggingContextBuilder {
        LoggingContextBuilder::new(cfg)
    }

    /// Creates a context with the default filter (`Info`+) and the
    /// [`TracingSink`](crate::TracingSink).
    pub fn new(cfg: Config) -> Self {
        Self::builder(cfg).build()
    }

    pub(super) fn from_inner(inner: Inner) -> Self {
        Self {
            inner: Arc::new(inner),
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &Config {
        &self.inner.cfg
    }

    /// The record bus.
    pub fn bus(&self) -> &EventBus<LogRecord> {
        &self.inner.bus
    }

    /// True if `tag` logs at `level` on the platform sink.
    ///
    /// [`LogLevel::Assert`] is always loggable.
    pub fn is_loggable(&self, tag: &str, level: LogLevel) -> bool {
        level == LogLevel::Assert || self.inner.filter.is_loggable(tag, level)
    }

    /// Logger tagged after `T`.
    pub fn logger<T: ?Sized>(&self) -> Logger {
        Logger::for_type::<T>(self)
    }

    /// Logger with an explicit, validated tag.
    pub fn logger_named(&self, tag: &str) -> Result<Logger, LoggingError> {
        Logger::named(self, tag)
    }

    /// Logger tagged with `owner.logger_tag()`, truncated to the tag limit.
    ///
    /// An empty tag falls back to the one derived from `T`.
    pub fn logger_for<T: Tagged + ?Sized>(&self, owner: &T) -> Logger {
        let limit = self.inner.cfg.tag_limit();
        let tag = owner.logger_tag();
        if tag.is_empty() {
            return Logger::for_type::<T>(self);
        }
        Logger::from_parts(Arc::from(truncate_chars(&tag, limit)), self.clone())
    }

    /// Registers a record observer. See [`EventBus::subscribe`].
    pub fn subscribe<F>(&self, handler: F) -> SubscriptionId
    where
        F: Fn(&LogRecord) + Send + Sync + 'static,
    {
        self.inner.bus.subscribe(handler)
    }

    /// Registers a [`Subscribe`] object. See [`EventBus::subscribe_arc`].
    pub fn subscribe_arc(&self, subscriber: Arc<dyn Subscribe<LogRecord>>) -> SubscriptionId {
        self.inner.bus.subscribe_arc(subscriber)
    }

    /// Removes a registration. Unknown ids are ignored.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.inner.bus.unsubscribe(id)
    }

    /// Creates a [`BroadcastBridge`](crate::BroadcastBridge) sized by
    /// `broadcast_capacity` and subscribes it.
    #[cfg(feature = "broadcast")]
    pub fn attach_broadcast(&self) -> (crate::subscribers::BroadcastBridge, SubscriptionId) {
        let bridge =
            crate::subscribers::BroadcastBridge::new(self.inner.cfg.broadcast_capacity_clamped());
        let id = self.subscribe_arc(Arc::new(bridge.clone()));
        (bridge, id)
    }

    /// Emits a record straight onto the bus, bypassing the filter and sink.
    ///
    /// Subscriber panics propagate to the caller.
    pub fn emit_record(
        &self,
        level: LogLevel,
        tag: &str,
        message: &str,
        stack_trace: Option<&str>,
    ) {
        self.inner
            .bus
            .emit(build_record(level, Arc::from(tag), message, stack_trace));
    }

    /// One log call: decide, build, emit, write.
    pub(crate) fn dispatch<B>(&self, tag: &Arc<str>, level: LogLevel, build: B)
    where
        B: FnOnce() -> (String, Option<String>),
    {
        let loggable = self.is_loggable(tag, level);
        let observe = loggable
            || (self.inner.cfg.always_emits(level) && self.inner.bus.has_subscribers());
        if !observe {
            return;
        }

        let (message, stack_trace) = build();
        self.emit_guarded(tag, level, &message, stack_trace.as_deref());
        if loggable {
            self.write_guarded(tag, level, &message, stack_trace.as_deref());
        }
    }

    fn emit_guarded(&self, tag: &Arc<str>, level: LogLevel, message: &str, trace: Option<&str>) {
        let record = build_record(level, Arc::clone(tag), message, trace);
        let outcome = catch_unwind(AssertUnwindSafe(|| self.inner.bus.emit(record)));
        if let Err(panic_err) = outcome {
            let info = panic_message(&*panic_err);
            if let Err(err) = self.write_contained(
                &self.inner.cfg.fallback_tag,
                LogLevel::Error,
                "Emit log record failed",
                Some(&info),
            ) {
                tracing::warn!(
                    target: TRACING_TARGET,
                    %tag,
                    error = %err,
                    panic = %info,
                    "emit failure report dropped"
                );
            }
        }
    }

    fn write_guarded(&self, tag: &str, level: LogLevel, message: &str, trace: Option<&str>) {
        if let Err(err) = self.write_contained(tag, level, message, trace) {
            if let Err(report_err) = self.write_contained(
                tag,
                LogLevel::Error,
                "Regular logging failed",
                Some(&err.to_string()),
            ) {
                tracing::warn!(
                    target: TRACING_TARGET,
                    tag,
                    error = %err,
                    report_error = %report_err,
                    "sink failure report dropped"
                );
            }
        }
    }

    /// Sink write with panics turned into [`LoggingError::Sink`].
    fn write_contained(
        &self,
        tag: &str,
        level: LogLevel,
        message: &str,
        trace: Option<&str>,
    ) -> Result<(), LoggingError> {
        let sink = &self.inner.sink;
        match catch_unwind(AssertUnwindSafe(|| sink.write(tag, level, message, trace))) {
            Ok(res) => res,
            Err(panic_err) => Err(LoggingError::sink(panic_message(&*panic_err))),
        }
    }
}

impl fmt::Debug for LoggingContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggingContext")
            .field("config", &self.inner.cfg)
            .field("bus", &self.inner.bus)
            .finish()
    }
}

fn build_record(level: LogLevel, tag: Arc<str>, message: &str, trace: Option<&str>) -> LogRecord {
    let record = LogRecord::new(level, tag, message);
    match trace {
        Some(t) => record.with_stack_trace(t),
        None => record,
    }
}

fn panic_message(any: &(dyn Any + Send)) -> String {
    if let Some(msg) = any.downcast_ref::<&'static str>() {
        (*msg).to_string()
    } else if let Some(msg) = any.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}
