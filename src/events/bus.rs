//! # Synchronous in-process event bus.
//!
//! [`EventBus`] delivers every emitted value to every registered subscriber,
//! on the caller's thread, in registration order.
//!
//! ## Architecture
//! ```text
//! Producers (any thread):                 Subscribers (registration order):
//!   Logger A ──┐                            ┌──► handler #1 (&T)
//!   Logger B ──┼──► emit(T) ── snapshot ────┼──► handler #2 (&T)
//!   Logger N ──┘       (lock held only      └──► handler #N (&T)
//!                       to clone the list)
//! ```
//!
//! ## Rules
//! - **Snapshot delivery**: `emit()` clones the current list under the lock and
//!   releases it before calling anyone. Concurrent `subscribe`/`unsubscribe`
//!   only affect later emits.
//! - **Re-entrancy**: a handler may subscribe or unsubscribe on the same bus.
//! - **Token identity**: `subscribe()` returns a [`SubscriptionId`];
//!   `unsubscribe(id)` removes exactly that registration. The same closure
//!   registered twice is delivered twice and needs two unsubscribes.
//! - **No isolation**: a panicking handler unwinds out of `emit()`; handlers
//!   after it in the snapshot are skipped for that call. Callers that must not
//!   fail (like [`Logger`](crate::Logger)) wrap `emit()` in `catch_unwind`.
//!
//! ## Example
//! ```rust
//! use std::sync::{Arc, Mutex};
//! use droid_logging::EventBus;
//!
//! let bus = EventBus::<u32>::new();
//! let seen = Arc::new(Mutex::new(Vec::new()));
//!
//! let sink = Arc::clone(&seen);
//! let id = bus.subscribe(move |v: &u32| sink.lock().unwrap().push(*v));
//!
//! bus.emit(5);
//! assert!(bus.unsubscribe(id));
//! bus.emit(7);
//!
//! assert_eq!(*seen.lock().unwrap(), vec![5]);
//! ```

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::{Arc, Mutex, MutexGuard, Weak};

use crate::subscribers::Subscribe;

/// Global counter for subscription tokens; unique across all buses.
static SUBSCRIPTION_SEQ: AtomicU64 = AtomicU64::new(1);

/// Opaque handle identifying one registration on a bus.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    fn next() -> Self {
        Self(SUBSCRIPTION_SEQ.fetch_add(1, AtomicOrdering::Relaxed))
    }

    /// Raw numeric value (for logs).
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sub#{}", self.0)
    }
}

type Callback<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// One registration.
struct Entry<T> {
    id: SubscriptionId,
    name: &'static str,
    callback: Callback<T>,
}

impl<T> Clone for Entry<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            name: self.name,
            callback: Arc::clone(&self.callback),
        }
    }
}

/// Copy-on-write list; emit clones the `Arc`, mutations replace it.
struct Registry<T> {
    entries: Arc<[Entry<T>]>,
}

impl<T> Registry<T> {
    fn replace(&mut self, entries: Vec<Entry<T>>) {
        self.entries = entries.into();
    }
}

/// In-process publish/subscribe primitive.
///
/// ### Properties
/// - **Synchronous**: handlers run on the thread calling `emit()`.
/// - **Ordered**: delivery order equals registration order at snapshot time.
/// - **Thread-safe**: all methods take `&self`; share it with `Arc`.
pub struct EventBus<T> {
    state: Arc<Mutex<Registry<T>>>,
}

impl<T> EventBus<T> {
    /// Creates an empty bus.
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(Registry {
                entries: Arc::from(Vec::new()),
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Registry<T>> {
        lock_registry(&self.state)
    }

    fn push(&self, name: &'static str, callback: Callback<T>) -> SubscriptionId {
        let id = SubscriptionId::next();
        let mut reg = self.lock();
        let mut next = Vec::with_capacity(reg.entries.len() + 1);
        next.extend(reg.entries.iter().cloned());
        next.push(Entry { id, name, callback });
        reg.replace(next);
        id
    }

    /// Appends `handler` to the subscriber list.
    ///
    /// Registering the same closure twice yields two independent registrations.
    pub fn subscribe<F>(&self, handler: F) -> SubscriptionId
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        self.push(std::any::type_name::<F>(), Arc::new(handler))
    }

    /// Appends a [`Subscribe`] object to the subscriber list.
    pub fn subscribe_arc(&self, subscriber: Arc<dyn Subscribe<T>>) -> SubscriptionId
    where
        T: 'static,
    {
        let name = subscriber.name();
        self.push(name, Arc::new(move |ev: &T| subscriber.on_event(ev)))
    }

    /// Like [`subscribe`](Self::subscribe), but the registration lives as long
    /// as the returned guard.
    pub fn subscribe_scoped<F>(&self, handler: F) -> Subscription<T>
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let id = self.subscribe(handler);
        Subscription {
            id,
            state: Arc::downgrade(&self.state),
        }
    }

    /// Removes the registration identified by `id`.
    ///
    /// Returns `false` (and changes nothing) if `id` is not registered here.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        remove_entry(&self.state, id)
    }

    /// Removes every registration.
    pub fn clear(&self) {
        self.lock().replace(Vec::new());
    }

    /// Delivers `value` to every subscriber of the current snapshot, in order.
    ///
    /// ### Panics
    /// Propagates a panic raised by any handler; handlers after the panicking
    /// one are not invoked for this value.
    pub fn emit(&self, value: T) {
        let snapshot = Arc::clone(&self.lock().entries);
        for entry in snapshot.iter() {
            (entry.callback)(&value);
        }
    }

    /// Number of registrations.
    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    /// True if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True if at least one subscriber would receive the next emit.
    #[inline]
    pub fn has_subscribers(&self) -> bool {
        !self.is_empty()
    }

    /// Names of the registered subscribers, in delivery order.
    ///
    /// Closures report their type name; [`Subscribe`] objects their `name()`.
    pub fn subscriber_names(&self) -> Vec<&'static str> {
        self.lock().entries.iter().map(|e| e.name).collect()
    }
}

impl<T> Default for EventBus<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for EventBus<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.len())
            .finish()
    }
}

/// Registration guard returned by [`EventBus::subscribe_scoped`].
///
/// Unsubscribes on drop. Holds only a weak reference, so it never keeps the
/// bus alive.
#[must_use = "dropping the guard unsubscribes immediately"]
pub struct Subscription<T> {
    id: SubscriptionId,
    state: Weak<Mutex<Registry<T>>>,
}

impl<T> Subscription<T> {
    /// Token of the guarded registration.
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// Keeps the registration for the bus's lifetime and returns its token.
    pub fn detach(mut self) -> SubscriptionId {
        self.state = Weak::new();
        self.id
    }
}

impl<T> Drop for Subscription<T> {
    fn drop(&mut self) {
        if let Some(state) = self.state.upgrade() {
            let _ = remove_entry(&state, self.id);
        }
    }
}

impl<T> fmt::Debug for Subscription<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

fn lock_registry<T>(state: &Mutex<Registry<T>>) -> MutexGuard<'_, Registry<T>> {
    // The list is swapped in one assignment, so a poisoned lock still guards a
    // consistent value.
    match state.lock() {
        Ok(g) => g,
        Err(poisoned) => poisoned.into_inner(),
    }
}

fn remove_entry<T>(state: &Mutex<Registry<T>>, id: SubscriptionId) -> bool {
    let mut reg = lock_registry(state);
    if !reg.entries.iter().any(|e| e.id == id) {
        return false;
    }
    let next: Vec<Entry<T>> = reg.entries.iter().filter(|e| e.id != id).cloned().collect();
    reg.replace(next);
    true
}
