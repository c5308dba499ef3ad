//! # Broadcast bridge for async observers.
//!
//! [`BroadcastBridge`] is a [`Subscribe`] implementation that forwards every
//! record into a [`tokio::sync::broadcast`] channel, so async tasks can
//! observe log traffic without running inside the emitting call.
//!
//! ## Architecture
//! ```text
//! Logger ── emit ──► EventBus ──► BroadcastBridge ──► broadcast chan ──┬──► rx 1 (task)
//!                    (sync)        (on_event clones)  (ring buffer)     └──► rx N (task)
//! ```
//!
//! ## Rules
//! - `on_event()` clones the record into the channel and returns; the emitting
//!   logger never waits on a receiver.
//! - With no live receiver the clone is discarded; nothing is buffered for
//!   receivers created later.
//! - A receiver that falls `capacity` records behind gets `RecvError::Lagged(n)`
//!   and resumes at the oldest record still held.
//! - Receivers see `RecvError::Closed` once the bridge is unsubscribed and every
//!   clone of it is dropped.

use tokio::sync::broadcast;

use crate::events::LogRecord;
use crate::subscribers::Subscribe;

/// Subscriber that republishes records on a broadcast channel.
///
/// Cheap to clone (internally holds an `Arc`-backed sender).
#[derive(Clone, Debug)]
pub struct BroadcastBridge {
    tx: broadcast::Sender<LogRecord>,
}

impl BroadcastBridge {
    /// Creates a bridge with the given channel capacity.
    ///
    /// The minimum capacity is 1 (clamped).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let (tx, _rx) = broadcast::channel::<LogRecord>(capacity);
        Self { tx }
    }

    /// Creates a new receiver that will observe subsequent records.
    ///
    /// - Each call creates an **independent** receiver.
    /// - A receiver only gets records **sent after** it subscribes.
    pub fn receiver(&self) -> broadcast::Receiver<LogRecord> {
        self.tx.subscribe()
    }

    /// Number of live receivers.
    pub fn receiver_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Subscribe<LogRecord> for BroadcastBridge {
    fn on_event(&self, rec: &LogRecord) {
        let _ = self.tx.send(rec.clone());
    }

    fn name(&self) -> &'static str {
        "BroadcastBridge"
    }
}
