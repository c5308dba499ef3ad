//! # droid-logging
//!
//! **droid-logging** is a thin platform-logging shim: tagged loggers that
//! format lazily, write to the platform log, and broadcast every record to
//! in-process observers.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!     ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//!     │    Logger    │   │    Logger    │   │    Logger    │
//!     │ (tag "Net")  │   │ (tag "Db")   │   │ (tag "Ui")   │
//!     └──────┬───────┘   └──────┬───────┘   └──────┬───────┘
//!            ▼                  ▼                  ▼
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  LoggingContext (explicitly owned, cheap to clone)                │
//! │  - LevelFilter  (is_loggable(tag, level))                         │
//! │  - LogSink      (platform log: tracing → logcat / os_log / tty)   │
//! │  - EventBus<LogRecord>                                            │
//! └──────┬──────────────────────────────────────────────┬─────────────┘
//!        │ emit (snapshot, caller's thread)             │ write
//!        ▼                                              ▼
//! ┌──────────────────────────────────┐          ┌───────────────┐
//! │ subscribers, registration order  │          │   LogSink     │
//! │  closure │ Subscribe │ Bridge ───┼──► tokio │               │
//! └──────────────────────────────────┘  broadcast└───────────────┘
//! ```
//!
//! ### One log call
//! ```text
//! logger.debug_with(|| format!(..))
//!   ├─► loggable? (filter)          observed? (level ≥ always_emit_from && subscribers)
//!   ├─► neither ─► return, closure never runs
//!   ├─► emit LogRecord ─► panic contained, reported under "DroidLogging"
//!   └─► loggable ─► sink.write ─► error reported once as "Regular logging failed"
//! ```
//!
//! ## Features
//! | Area              | Description                                               | Key types / traits                         |
//! |-------------------|-----------------------------------------------------------|--------------------------------------------|
//! | **Bus**           | Synchronous snapshot-delivery pub/sub with token identity.| [`EventBus`], [`SubscriptionId`]           |
//! | **Records**       | Immutable, serializable log records.                      | [`LogRecord`], [`LogLevel`]                |
//! | **Loggers**       | Tagged façade with eager, error and lazy methods.         | [`Logger`], [`Tagged`]                     |
//! | **Policies**      | Per-tag level filtering.                                  | [`LevelFilter`], [`TagLevelFilter`]        |
//! | **Sinks**         | Platform log writers.                                     | [`LogSink`], [`TracingSink`]               |
//! | **Errors**        | Typed errors for tags, parsing and sinks.                 | [`LoggingError`]                           |
//! | **Configuration** | Centralized settings.                                     | [`Config`]                                 |
//!
//! ## Optional features
//! - `broadcast` _(default)_: exports [`BroadcastBridge`] for async observers.
//! - `logging`: exports a simple built-in [`LogWriter`] _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use std::sync::{Arc, Mutex};
//! use droid_logging::{Config, LogLevel, LoggingContext, NullSink, TagLevelFilter};
//!
//! let ctx = LoggingContext::builder(Config::default())
//!     .with_filter(TagLevelFilter::new(LogLevel::Debug))
//!     .with_sink(NullSink)
//!     .build();
//!
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let store = Arc::clone(&seen);
//! ctx.subscribe(move |rec| store.lock().unwrap().push(rec.message.to_string()));
//!
//! struct Downloader;
//! let log = ctx.logger::<Downloader>();
//! log.debug_with(|| format!("fetched {} bytes", 512));
//! log.verbose_with(|| -> String { unreachable!("verbose is filtered out") });
//!
//! assert_eq!(log.tag(), "Downloader");
//! assert_eq!(*seen.lock().unwrap(), vec!["fetched 512 bytes".to_string()]);
//! ```

mod core;
mod error;
mod events;
mod logger;
mod policies;
mod sinks;
mod subscribers;
mod telemetry;

// ---- Public re-exports ----

pub use crate::core::{Config, LoggingContext, LoggingContextBuilder, FALLBACK_TAG, MAX_TAG_LEN};
pub use error::LoggingError;
pub use events::{EventBus, LogLevel, LogRecord, Subscription, SubscriptionId};
pub use logger::{error_chain, tag_for, tag_from_type_name, validate_tag, Logger, Tagged};
pub use policies::{LevelFilter, TagLevelFilter, TagThreshold};
pub use sinks::{LogSink, NullSink, TracingSink, TRACING_TARGET};
pub use subscribers::Subscribe;
pub use telemetry::{init_tracing, DEFAULT_DIRECTIVES};

// Optional: forward records into a tokio broadcast channel.
// Enabled by default; disable with `default-features = false`.
#[cfg(feature = "broadcast")]
pub use subscribers::BroadcastBridge;

// Optional: expose a simple built-in record printer (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use subscribers::LogWriter;
