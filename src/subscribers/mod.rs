//! # Record subscribers.
//!
//! This module provides the [`Subscribe`] trait and built-in implementations
//! for observing records broadcast through the [`EventBus`](crate::EventBus).
//!
//! ## Architecture
//! ```text
//! Record flow:
//!   Logger ── emit(LogRecord) ──► EventBus ──► every subscriber, in order
//!                                                 │
//!                                   ┌─────────────┼──────────────┐
//!                                   ▼             ▼              ▼
//!                               LogWriter   BroadcastBridge    Custom
//!                              (stdout)     (tokio channel)
//! ```

#[cfg(feature = "broadcast")]
mod bridge;
#[cfg(feature = "logging")]
mod log;
mod subscriber;

#[cfg(feature = "broadcast")]
pub use bridge::BroadcastBridge;
#[cfg(feature = "logging")]
pub use log::LogWriter;
pub use subscriber::Subscribe;
