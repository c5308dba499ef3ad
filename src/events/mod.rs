//! Log records and the bus that carries them.
//!
//! ## Contents
//! - [`LogLevel`], [`LogRecord`] record classification and payload
//! - [`EventBus`] synchronous snapshot-delivery pub/sub
//! - [`SubscriptionId`], [`Subscription`] registration tokens and guards
//!
//! ## Quick reference
//! - **Publishers**: [`Logger`](crate::Logger) via
//!   [`LoggingContext::emit_record`](crate::LoggingContext::emit_record).
//! - **Consumers**: closures and [`Subscribe`](crate::Subscribe) objects.

mod bus;
mod record;

pub use bus::{EventBus, Subscription, SubscriptionId};
pub use record::{LogLevel, LogRecord};
