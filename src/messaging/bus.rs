use crossbeam_channel::{unbounded, Receiver, Sender};
use parking_lot::RwLock;
/// Event bus for fan-out delivery of wizard notifications
///
/// External listeners subscribe and receive every published event on their
/// own channel. Publishing never blocks: delivery uses `try_send` and a
/// closed or full subscriber channel is skipped silently.
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use super::events::WizardEvent;

/// Subscriber ID for tracking subscriptions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(usize);

struct BusInner {
    subscribers: RwLock<Vec<(SubscriberId, Sender<WizardEvent>)>>,
    next_id: AtomicUsize,
}

/// Event bus for broadcasting wizard events to subscribers
pub struct EventBus {
    inner: Arc<BusInner>,
}

impl EventBus {
    /// Create a new event bus
    pub fn new() -> Self {
        Self {
            inner: Arc::new(BusInner {
                subscribers: RwLock::new(Vec::new()),
                next_id: AtomicUsize::new(0),
            }),
        }
    }

    /// Subscribe to events, returns a receiver and subscription ID
    pub fn subscribe(&self) -> (Receiver<WizardEvent>, SubscriberId) {
        let (tx, rx) = unbounded();
        let id = SubscriberId(self.inner.next_id.fetch_add(1, Ordering::Relaxed));
        self.inner.subscribers.write().push((id, tx));
        (rx, id)
    }

    /// Unsubscribe from events
    pub fn unsubscribe(&self, id: SubscriberId) {
        self.inner.subscribers.write().retain(|(sid, _)| *sid != id);
    }

    /// Publish an event to all subscribers, fire-and-forget
    pub fn publish(&self, event: WizardEvent) {
        let subscribers = self.inner.subscribers.read();
        tracing::trace!(
            "publishing '{}' to {} subscriber(s)",
            event.name(),
            subscribers.len()
        );

        for (_, sender) in subscribers.iter() {
            // A closed subscriber channel just drops the event
            let _ = sender.try_send(event.clone());
        }
    }

    /// Get number of active subscribers
    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.read().len()
    }

    /// Clear all subscribers
    pub fn clear(&self) {
        self.inner.subscribers.write().clear();
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for EventBus {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}
