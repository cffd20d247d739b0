//! Event subscriptions.
//!
//! The SDK pushes navigation, analytics and experience events to every
//! registered listener. `EventHub` is the listener registry plugin
//! implementations share; `Subscription` is the handle a registration returns.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, Weak};

use serde_json::Value;

use super::types::EventCategory;

/// Listener for a repeating SDK event
pub type EventHandler = Box<dyn Fn(Value) + Send + Sync>;

struct Listener {
    id: u64,
    category: EventCategory,
    handler: Arc<EventHandler>,
}

#[derive(Default)]
struct HubInner {
    listeners: Mutex<Vec<Listener>>,
    next_id: AtomicU64,
}

impl HubInner {
    fn lock(&self) -> MutexGuard<'_, Vec<Listener>> {
        self.listeners
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Registry of event listeners, grouped by category
#[derive(Clone, Default)]
pub struct EventHub {
    inner: Arc<HubInner>,
}

impl EventHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener. It stays installed until the returned handle is cancelled.
    pub fn subscribe(&self, category: EventCategory, handler: EventHandler) -> Subscription {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        self.inner.lock().push(Listener {
            id,
            category,
            handler: Arc::new(handler),
        });
        log::debug!("Subscribed listener #{} to {}", id, category);

        Subscription {
            id,
            category,
            hub: Arc::downgrade(&self.inner),
        }
    }

    /// Deliver an event to every current listener of `category`, in subscription order.
    ///
    /// Returns the number of listeners reached.
    pub fn emit(&self, category: EventCategory, data: Value) -> usize {
        // Handlers run outside the lock so they may subscribe or emit themselves
        let handlers: Vec<Arc<EventHandler>> = self
            .inner
            .lock()
            .iter()
            .filter(|l| l.category == category)
            .map(|l| Arc::clone(&l.handler))
            .collect();

        log::trace!("Emitting {} to {} listener(s)", category, handlers.len());
        for handler in &handlers {
            handler(data.clone());
        }
        handlers.len()
    }

    /// Number of listeners installed for `category`
    pub fn listener_count(&self, category: EventCategory) -> usize {
        self.inner
            .lock()
            .iter()
            .filter(|l| l.category == category)
            .count()
    }
}

/// Handle to an installed listener.
///
/// Dropping the handle leaves the listener installed; call [`Subscription::cancel`]
/// to remove it.
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    category: EventCategory,
    hub: Weak<HubInner>,
}

impl Subscription {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn category(&self) -> EventCategory {
        self.category
    }

    /// Remove the listener. Returns false if it was already gone.
    pub fn cancel(self) -> bool {
        let Some(hub) = self.hub.upgrade() else {
            return false;
        };
        let mut listeners = hub.lock();
        let before = listeners.len();
        listeners.retain(|l| l.id != self.id);
        before != listeners.len()
    }
}
