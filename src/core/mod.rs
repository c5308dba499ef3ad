//! Logging core: configuration and the context that wires bus, filter and sink.
//!
//! The public API from this module is [`LoggingContext`] (with its builder)
//! and [`Config`].
//!
//! Internal modules:
//! - [`config`]: settings and defaults;
//! - [`context`]: dispatch of one log call (filter, lazy build, guarded emit, guarded write);
//! - [`builder`]: assembles a context from optional components.

mod builder;
mod config;
mod context;

pub use builder::LoggingContextBuilder;
pub use config::{Config, FALLBACK_TAG, MAX_TAG_LEN};
pub use context::LoggingContext;
