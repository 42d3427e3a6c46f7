//! Same-process publish/subscribe.
//!
//! [`EventBus`] is an observer list owned by whoever creates it (typically a
//! record store). Listeners run synchronously on the publishing thread, in
//! subscription order. A [`Subscription`] removes its listener when it is
//! unsubscribed or dropped; call [`Subscription::detach`] to keep a listener
//! for the lifetime of the bus.
//!
//! # Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use vais_core::events::EventBus;
//!
//! let bus: EventBus<String> = EventBus::new("vais:demo");
//! let seen = Arc::new(AtomicUsize::new(0));
//!
//! let counter = seen.clone();
//! let sub = bus.subscribe(move |_| {
//!     counter.fetch_add(1, Ordering::SeqCst);
//! });
//!
//! bus.publish(&"hello".to_string());
//! assert_eq!(seen.load(Ordering::SeqCst), 1);
//!
//! drop(sub);
//! bus.publish(&"ignored".to_string());
//! assert_eq!(seen.load(Ordering::SeqCst), 1);
//! ```

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

type Listener<T> = Arc<dyn Fn(&T) + Send + Sync>;

// ============================================================================
// EventBus
// ============================================================================

/// Observer list for values of type `T`.
///
/// Cheap to clone; clones share the same listeners.
pub struct EventBus<T> {
    inner: Arc<BusInner<T>>,
}

struct BusInner<T> {
    topic: String,
    next_id: AtomicU64,
    listeners: Mutex<Vec<(u64, Listener<T>)>>,
}

impl<T> BusInner<T> {
    fn listeners(&self) -> MutexGuard<'_, Vec<(u64, Listener<T>)>> {
        // A panicking listener never runs under this lock, so the list is intact.
        self.listeners.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn remove(&self, id: u64) -> bool {
        let mut listeners = self.listeners();
        let before = listeners.len();
        listeners.retain(|(listener_id, _)| *listener_id != id);
        listeners.len() != before
    }
}

impl<T: 'static> EventBus<T> {
    /// Create a bus for the named topic (e.g. `vais:mastery-updated`).
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(BusInner {
                topic: topic.into(),
                next_id: AtomicU64::new(1),
                listeners: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Topic name this bus was created with.
    pub fn topic(&self) -> &str {
        &self.inner.topic
    }

    /// Register a listener.
    ///
    /// The listener stays registered until the returned [`Subscription`] is
    /// unsubscribed or dropped.
    pub fn subscribe<F>(&self, listener: F) -> Subscription<T>
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        self.inner.listeners().push((id, Arc::new(listener)));
        tracing::trace!(topic = %self.inner.topic, id, "listener subscribed");
        Subscription {
            bus: Arc::downgrade(&self.inner),
            id: Some(id),
        }
    }

    /// Deliver `event` to every live listener and return how many were called.
    ///
    /// The listener list is snapshotted first, so listeners may subscribe or
    /// unsubscribe while being notified.
    pub fn publish(&self, event: &T) -> usize {
        let snapshot: Vec<Listener<T>> = self
            .inner
            .listeners()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();

        for listener in &snapshot {
            listener(event);
        }

        tracing::debug!(
            topic = %self.inner.topic,
            listeners = snapshot.len(),
            "event published"
        );
        snapshot.len()
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.inner.listeners().len()
    }
}

impl<T> Clone for EventBus<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T> fmt::Debug for EventBus<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("topic", &self.inner.topic)
            .field("listeners", &self.inner.listeners().len())
            .finish()
    }
}

// ============================================================================
// Subscription
// ============================================================================

/// Handle returned by [`EventBus::subscribe`].
///
/// Dropping the handle unsubscribes the listener.
#[must_use = "dropping a Subscription unsubscribes its listener"]
pub struct Subscription<T> {
    bus: Weak<BusInner<T>>,
    id: Option<u64>,
}

impl<T> Subscription<T> {
    /// Remove the listener now.
    ///
    /// Returns `false` if the bus is gone or the listener was already removed.
    pub fn unsubscribe(mut self) -> bool {
        self.release()
    }

    /// Keep the listener registered for as long as the bus lives.
    pub fn detach(mut self) {
        self.id = None;
    }

    fn release(&mut self) -> bool {
        match (self.id.take(), self.bus.upgrade()) {
            (Some(id), Some(bus)) => bus.remove(id),
            _ => false,
        }
    }
}

impl<T> Drop for Subscription<T> {
    fn drop(&mut self) {
        self.release();
    }
}

impl<T> fmt::Debug for Subscription<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("bus_alive", &(self.bus.strong_count() > 0))
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    fn recorder() -> (Arc<Mutex<Vec<u32>>>, impl Fn(&u32) + Send + Sync + 'static) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        (seen, move |value: &u32| sink.lock().unwrap().push(*value))
    }

    #[test]
    fn test_publish_reaches_all_listeners_in_order() {
        let bus: EventBus<u32> = EventBus::new("test");
        let order = Arc::new(Mutex::new(Vec::new()));

        let first = order.clone();
        let _a = bus.subscribe(move |v| first.lock().unwrap().push(("a", *v)));
        let second = order.clone();
        let _b = bus.subscribe(move |v| second.lock().unwrap().push(("b", *v)));

        assert_eq!(bus.publish(&3), 2);
        assert_eq!(*order.lock().unwrap(), vec![("a", 3), ("b", 3)]);
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let bus: EventBus<u32> = EventBus::new("test");
        let (seen, listener) = recorder();
        let sub = bus.subscribe(listener);

        bus.publish(&1);
        assert!(sub.unsubscribe());
        bus.publish(&2);

        assert_eq!(*seen.lock().unwrap(), vec![1]);
        assert_eq!(bus.listener_count(), 0);
    }

    #[test]
    fn test_drop_unsubscribes() {
        let bus: EventBus<u32> = EventBus::new("test");
        let (seen, listener) = recorder();
        {
            let _sub = bus.subscribe(listener);
            bus.publish(&1);
        }
        bus.publish(&2);
        assert_eq!(*seen.lock().unwrap(), vec![1]);
    }

    #[test]
    fn test_detach_keeps_listener() {
        let bus: EventBus<u32> = EventBus::new("test");
        let (seen, listener) = recorder();
        bus.subscribe(listener).detach();

        bus.publish(&5);
        assert_eq!(*seen.lock().unwrap(), vec![5]);
        assert_eq!(bus.listener_count(), 1);
    }

    #[test]
    fn test_clone_shares_listeners() {
        let bus: EventBus<u32> = EventBus::new("shared");
        let other = bus.clone();
        let (seen, listener) = recorder();
        let _sub = bus.subscribe(listener);

        assert_eq!(other.publish(&9), 1);
        assert_eq!(*seen.lock().unwrap(), vec![9]);
        assert_eq!(other.topic(), "shared");
    }

    #[test]
    fn test_unsubscribe_after_bus_dropped() {
        let bus: EventBus<u32> = EventBus::new("gone");
        let sub = bus.subscribe(|_| {});
        drop(bus);
        assert!(!sub.unsubscribe());
    }

    #[test]
    fn test_listener_may_unsubscribe_during_publish() {
        let bus: EventBus<u32> = EventBus::new("reentrant");
        let slot: Arc<Mutex<Option<Subscription<u32>>>> = Arc::new(Mutex::new(None));
        let calls = Arc::new(AtomicUsize::new(0));

        let slot_in = slot.clone();
        let calls_in = calls.clone();
        let sub = bus.subscribe(move |_| {
            calls_in.fetch_add(1, Ordering::SeqCst);
            if let Some(own) = slot_in.lock().unwrap().take() {
                own.unsubscribe();
            }
        });
        *slot.lock().unwrap() = Some(sub);

        bus.publish(&1);
        bus.publish(&2);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_debug_output() {
        let bus: EventBus<u32> = EventBus::new("vais:debug");
        let debug = format!("{bus:?}");
        assert!(debug.contains("vais:debug"));
    }

    fn _assert_send_sync<T: Send + Sync>() {}
    #[test]
    fn test_bus_send_sync() {
        _assert_send_sync::<EventBus<String>>();
        _assert_send_sync::<Subscription<String>>();
    }
}
