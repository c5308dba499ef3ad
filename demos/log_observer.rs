//! # Example: log_observer
//!
//! Demonstrates wiring a logging context with observers.
//!
//! Shows how to:
//! - Build a [`LoggingContext`] with a per-tag filter.
//! - Attach the built-in [`LogWriter`] and a closure observer.
//! - Use eager, lazy and error-carrying log calls.
//!
//! ## Flow
//! ```text
//! Logger("Sync") ──► LoggingContext
//!     ├─► EventBus ──► LogWriter (stdout)
//!     │            └─► closure (error counter)
//!     └─► TracingSink ──► fmt subscriber (RUST_LOG)
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example log_observer --features logging
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use droid_logging::{
    init_tracing, Config, LogLevel, LogRecord, LogWriter, LoggingContext, Subscribe, TagLevelFilter,
};

#[derive(Debug)]
struct Offline;

impl std::fmt::Display for Offline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("network unreachable")
    }
}

impl std::error::Error for Offline {}

struct SyncWorker;

fn main() {
    init_tracing();

    let filter: TagLevelFilter = "I,SyncWorker=D".parse().expect("valid directives");
    let ctx = LoggingContext::builder(Config::default())
        .with_filter(filter)
        .with_subscribers(vec![Arc::new(LogWriter::new()) as Arc<dyn Subscribe<LogRecord>>])
        .build();

    let errors = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&errors);
    let id = ctx.subscribe(move |rec| {
        if rec.level >= LogLevel::Error {
            counter.fetch_add(1, Ordering::Relaxed);
        }
    });

    let log = ctx.logger::<SyncWorker>();
    log.debug("starting sync");
    log.verbose_with(|| format!("{} pending items", 128)); // filtered, never formatted
    log.error_err("sync failed", &Offline);
    log.wtf("sync state corrupted");

    ctx.unsubscribe(id);
    println!("errors observed: {}", errors.load(Ordering::Relaxed));
}
