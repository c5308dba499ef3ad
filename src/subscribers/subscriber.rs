//! # Subscriber trait.
//!
//! Provides [`Subscribe`], an extension point for plugging named observers
//! into an [`EventBus`](crate::EventBus). Plain closures work too
//! ([`EventBus::subscribe`](crate::EventBus::subscribe)); implement the trait
//! when the observer carries state or deserves a readable name.
//!
//! ## Rules
//! - `on_event` runs synchronously on the emitting thread, after the bus lock
//!   has been released.
//! - Keep it short: a slow subscriber delays the log call that emitted.
//! - A panic unwinds into the emitter; [`Logger`](crate::Logger) contains it
//!   and reports it through the sink.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use droid_logging::{EventBus, LogLevel, LogRecord, Subscribe};
//!
//! #[derive(Default)]
//! struct ErrorCounter(AtomicUsize);
//!
//! impl Subscribe<LogRecord> for ErrorCounter {
//!     fn on_event(&self, rec: &LogRecord) {
//!         if rec.level >= LogLevel::Error {
//!             self.0.fetch_add(1, Ordering::Relaxed);
//!         }
//!     }
//!
//!     fn name(&self) -> &'static str { "error-counter" }
//! }
//!
//! let bus = EventBus::<LogRecord>::new();
//! let counter = Arc::new(ErrorCounter::default());
//! bus.subscribe_arc(counter.clone());
//! bus.emit(LogRecord::new(LogLevel::Error, "Db", "down"));
//! assert_eq!(counter.0.load(Ordering::Relaxed), 1);
//! ```

/// Observer of values emitted on an [`EventBus`](crate::EventBus).
pub trait Subscribe<T>: Send + Sync + 'static {
    /// Handles one emitted value.
    fn on_event(&self, event: &T);

    /// Returns the subscriber name used in diagnostics.
    ///
    /// The default uses `type_name::<Self>()`, which can be verbose - override it when possible.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
