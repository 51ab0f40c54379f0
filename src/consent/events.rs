//! Cross-component notification channel.
//!
//! A synchronous in-process publish/subscribe bus so that any number of
//! interested parties (analytics bootstrap, open UI surfaces) learn about
//! consent changes without polling and without referencing each other.
//!
//! Delivery is best-effort: if nothing is subscribed when an event fires,
//! the event is lost. That is acceptable here because every interested
//! party also re-reads the store on its own initialization, so a missed
//! notification only delays a reaction until the next natural read.
//!
//! Handlers are snapshotted before dispatch, so a handler may publish from
//! inside a callback without deadlocking the bus. There is deliberately no
//! recursion guard: a handler that saves consent in response to
//! `ConsentChanged` will recurse until it stops saving.

use std::sync::{Arc, Mutex, Weak};
use tracing::debug;

/// Events broadcast on the bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConsentEvent {
    /// A consent decision was saved or reset
    ConsentChanged,
    /// Some surface (footer link, help page) asked for the settings panel
    OpenSettings,
}

impl ConsentEvent {
    /// The well-known event name, matching what the site dispatches in the
    /// browser.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConsentEvent::ConsentChanged => "cookieConsentChanged",
            ConsentEvent::OpenSettings => "openCookieSettings",
        }
    }
}

/// A subscriber callback stored as a strong `Arc` in the guard, handed to
/// the bus as `Weak`.
type HandlerArc = Arc<dyn Fn(ConsentEvent) + Send + Sync>;
type HandlerWeak = Weak<dyn Fn(ConsentEvent) + Send + Sync>;

struct Entry {
    event: ConsentEvent,
    handler: HandlerWeak,
}

/// Synchronous in-process publish/subscribe bus.
///
/// Cloning an `EventBus` creates a new handle to the same subscriber list.
/// Dead subscribers (dropped [`Subscription`] guards) are pruned lazily
/// during `publish`.
#[derive(Clone, Default)]
pub struct EventBus {
    inner: Arc<Mutex<Vec<Entry>>>,
}

impl EventBus {
    /// Create a bus with no subscribers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe a handler to one event kind.
    ///
    /// Returns a [`Subscription`] guard. Dropping the guard (or calling
    /// [`Subscription::unsubscribe`]) detaches the handler; it will not be
    /// called afterwards, though its entry may linger in the list until the
    /// next `publish` prunes it.
    pub fn subscribe(
        &self,
        event: ConsentEvent,
        handler: impl Fn(ConsentEvent) + Send + Sync + 'static,
    ) -> Subscription {
        let strong: HandlerArc = Arc::new(handler);
        let weak = Arc::downgrade(&strong);
        self.inner
            .lock()
            .expect("event bus lock poisoned")
            .push(Entry {
                event,
                handler: weak,
            });
        Subscription {
            _guard: Some(strong),
        }
    }

    /// Publish an event to all live subscribers of that kind.
    ///
    /// Handlers run synchronously on the calling thread, in subscription
    /// order, after the subscriber list lock is released.
    pub fn publish(&self, event: ConsentEvent) {
        // Collect live handlers first (to avoid holding the lock during calls).
        let handlers: Vec<HandlerArc> = {
            let mut entries = self.inner.lock().expect("event bus lock poisoned");
            entries.retain(|entry| entry.handler.strong_count() > 0);
            entries
                .iter()
                .filter(|entry| entry.event == event)
                .filter_map(|entry| entry.handler.upgrade())
                .collect()
        };

        debug!(
            "Publishing '{}' to {} subscriber(s)",
            event.as_str(),
            handlers.len()
        );

        for handler in handlers {
            handler(event);
        }
    }

    /// Number of currently registered subscribers (including dead ones
    /// not yet pruned).
    pub fn subscriber_count(&self) -> usize {
        self.inner.lock().expect("event bus lock poisoned").len()
    }
}

/// Guard returned by [`EventBus::subscribe`]; dropping it detaches the
/// handler.
pub struct Subscription {
    _guard: Option<HandlerArc>,
}

impl Subscription {
    /// Explicitly detach the handler.
    pub fn unsubscribe(mut self) {
        self._guard = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    // ==================== Delivery Tests ====================

    #[test]
    fn test_publish_reaches_subscriber() {
        let bus = EventBus::new();
        let calls = Arc::new(AtomicUsize::new(0));

        let calls_clone = Arc::clone(&calls);
        let _sub = bus.subscribe(ConsentEvent::ConsentChanged, move |_| {
            calls_clone.fetch_add(1, Ordering::SeqCst);
        });

        bus.publish(ConsentEvent::ConsentChanged);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_publish_filters_by_event_kind() {
        let bus = EventBus::new();
        let calls = Arc::new(AtomicUsize::new(0));

        let calls_clone = Arc::clone(&calls);
        let _sub = bus.subscribe(ConsentEvent::OpenSettings, move |_| {
            calls_clone.fetch_add(1, Ordering::SeqCst);
        });

        bus.publish(ConsentEvent::ConsentChanged);
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        bus.publish(ConsentEvent::OpenSettings);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_publish_with_no_subscribers_is_lost() {
        let bus = EventBus::new();
        // No panic, no queueing
        bus.publish(ConsentEvent::ConsentChanged);
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn test_multiple_subscribers_called_in_order() {
        let bus = EventBus::new();
        let order = Arc::new(Mutex::new(Vec::new()));

        let order_a = Arc::clone(&order);
        let _sub_a = bus.subscribe(ConsentEvent::ConsentChanged, move |_| {
            order_a.lock().unwrap().push("a");
        });
        let order_b = Arc::clone(&order);
        let _sub_b = bus.subscribe(ConsentEvent::ConsentChanged, move |_| {
            order_b.lock().unwrap().push("b");
        });

        bus.publish(ConsentEvent::ConsentChanged);
        assert_eq!(*order.lock().unwrap(), vec!["a", "b"]);
    }

    // ==================== Unsubscribe Tests ====================

    #[test]
    fn test_dropped_guard_detaches_handler() {
        let bus = EventBus::new();
        let calls = Arc::new(AtomicUsize::new(0));

        let calls_clone = Arc::clone(&calls);
        let sub = bus.subscribe(ConsentEvent::ConsentChanged, move |_| {
            calls_clone.fetch_add(1, Ordering::SeqCst);
        });
        drop(sub);

        bus.publish(ConsentEvent::ConsentChanged);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        // Pruned during publish
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn test_explicit_unsubscribe() {
        let bus = EventBus::new();
        let calls = Arc::new(AtomicUsize::new(0));

        let calls_clone = Arc::clone(&calls);
        let sub = bus.subscribe(ConsentEvent::ConsentChanged, move |_| {
            calls_clone.fetch_add(1, Ordering::SeqCst);
        });
        sub.unsubscribe();

        bus.publish(ConsentEvent::ConsentChanged);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    // ==================== Re-entrancy Tests ====================

    #[test]
    fn test_handler_may_publish_without_deadlock() {
        let bus = EventBus::new();
        let settings_opened = Arc::new(AtomicUsize::new(0));

        let bus_clone = bus.clone();
        let _sub_a = bus.subscribe(ConsentEvent::ConsentChanged, move |_| {
            bus_clone.publish(ConsentEvent::OpenSettings);
        });

        let opened_clone = Arc::clone(&settings_opened);
        let _sub_b = bus.subscribe(ConsentEvent::OpenSettings, move |_| {
            opened_clone.fetch_add(1, Ordering::SeqCst);
        });

        bus.publish(ConsentEvent::ConsentChanged);
        assert_eq!(settings_opened.load(Ordering::SeqCst), 1);
    }

    // ==================== Handle Tests ====================

    #[test]
    fn test_cloned_bus_shares_subscribers() {
        let bus = EventBus::new();
        let clone = bus.clone();
        let calls = Arc::new(AtomicUsize::new(0));

        let calls_clone = Arc::clone(&calls);
        let _sub = clone.subscribe(ConsentEvent::ConsentChanged, move |_| {
            calls_clone.fetch_add(1, Ordering::SeqCst);
        });

        bus.publish(ConsentEvent::ConsentChanged);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_event_wire_names() {
        assert_eq!(
            ConsentEvent::ConsentChanged.as_str(),
            "cookieConsentChanged"
        );
        assert_eq!(ConsentEvent::OpenSettings.as_str(), "openCookieSettings");
    }
}
