//! Platform sinks: where loggable lines are written.
//!
//! - [`LogSink`] trait implemented by every sink.
//! - [`TracingSink`] default sink, forwards to `tracing`.
//! - [`NullSink`] discards everything.

mod sink;
mod trace_sink;

pub use sink::{LogSink, NullSink};
pub use trace_sink::{TracingSink, TRACING_TARGET};
