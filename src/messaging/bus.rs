/// Event bus for pub/sub messaging
///
/// Lets front-ends follow what the wizard does without owning it.
use crossbeam_channel::{unbounded, Receiver, Sender, TrySendError};
use parking_lot::RwLock;
use std::sync::Arc;

use super::events::Event;

/// Subscriber ID for tracking subscriptions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(usize);

#[derive(Default)]
struct Subscribers {
    senders: Vec<(SubscriberId, Sender<Event>)>,
    next_id: usize,
}

/// Event bus for broadcasting events to subscribers
///
/// Clones share the same subscriber list.
#[derive(Clone, Default)]
pub struct EventBus {
    inner: Arc<RwLock<Subscribers>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to events, returns a receiver and subscription ID
    pub fn subscribe(&self) -> (Receiver<Event>, SubscriberId) {
        let (tx, rx) = unbounded();

        let mut inner = self.inner.write();
        let id = SubscriberId(inner.next_id);
        inner.next_id += 1;
        inner.senders.push((id, tx));

        (rx, id)
    }

    pub fn unsubscribe(&self, id: SubscriberId) {
        self.inner.write().senders.retain(|(sid, _)| *sid != id);
    }

    /// Publish an event to all subscribers
    ///
    /// Subscribers whose receiver was dropped are removed.
    pub fn publish(&self, event: Event) {
        tracing::trace!("Publishing event: {}", event.description());

        self.inner.write().senders.retain(|(id, sender)| {
            match sender.try_send(event.clone()) {
                Err(TrySendError::Disconnected(_)) => {
                    tracing::debug!("Removing closed subscriber {:?}", id);
                    false
                }
                // Unbounded channels are never full
                Ok(()) | Err(TrySendError::Full(_)) => true,
            }
        });
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.read().senders.len()
    }

    pub fn clear(&self) {
        self.inner.write().senders.clear();
    }

    /// Take every event already queued on a receiver, without blocking
    pub fn drain(rx: &Receiver<Event>) -> Vec<Event> {
        rx.try_iter().collect()
    }
}
