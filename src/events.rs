//! Consent change notifications.
//!
//! Other components on the page (analytics loaders, tag managers) observe
//! consent through a broadcast channel rather than a shared global. Delivery
//! is synchronous, in-process and best-effort: there is no persistence or
//! replay, so a subscriber registered after an event fires never sees it,
//! and no ordering between subscribers is promised.

use crate::consent::record::ConsentRecord;
use tokio::sync::broadcast;

/// Default capacity of the consent event channel.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 16;

/// A handle for receiving consent notifications.
///
/// Dropping the receiver unsubscribes.
pub type Subscription = broadcast::Receiver<ConsentEvent>;

/// Events published on the consent bus.
#[derive(Debug, Clone)]
pub enum ConsentEvent {
    /// Consent has been newly saved, or a previously stored valid record was
    /// found at startup.
    Applied { record: ConsentRecord },
}

/// Publish/subscribe channel carrying [`ConsentEvent`]s.
#[derive(Debug)]
pub struct ConsentBus {
    tx: broadcast::Sender<ConsentEvent>,
}

impl Default for ConsentBus {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CHANNEL_CAPACITY)
    }
}

impl ConsentBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let (tx, _rx) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Registers a new subscriber. It will only see events published after
    /// this call.
    pub fn subscribe(&self) -> Subscription {
        self.tx.subscribe()
    }

    /// Delivers `event` to all current subscribers.
    pub fn publish(&self, event: ConsentEvent) {
        // broadcast::Sender::send() fails only when there are 0 receivers.
        // That's fine: if nobody listens, we can ignore the error.
        let _ = self.tx.send(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::broadcast::error::TryRecvError;

    #[test]
    fn subscriber_receives_published_event() {
        let bus = ConsentBus::new();
        let mut sub = bus.subscribe();

        bus.publish(ConsentEvent::Applied {
            record: ConsentRecord::defaults(),
        });

        let ConsentEvent::Applied { record } = sub.try_recv().unwrap();
        assert_eq!(record, ConsentRecord::defaults());
        assert!(matches!(sub.try_recv(), Err(TryRecvError::Empty)));
    }

    #[test]
    fn publish_without_subscribers_is_a_no_op() {
        let bus = ConsentBus::new();
        bus.publish(ConsentEvent::Applied {
            record: ConsentRecord::defaults(),
        });
    }

    #[test]
    fn late_subscriber_never_sees_earlier_events() {
        let bus = ConsentBus::new();
        bus.publish(ConsentEvent::Applied {
            record: ConsentRecord::defaults(),
        });

        let mut late = bus.subscribe();
        assert!(matches!(late.try_recv(), Err(TryRecvError::Empty)));
    }

    #[test]
    fn every_subscriber_gets_its_own_copy() {
        let bus = ConsentBus::new();
        let mut a = bus.subscribe();
        let mut b = bus.subscribe();

        let record = ConsentRecord {
            analytics: true,
            ..ConsentRecord::defaults()
        };
        bus.publish(ConsentEvent::Applied {
            record: record.clone(),
        });

        let ConsentEvent::Applied { record: got_a } = a.try_recv().unwrap();
        let ConsentEvent::Applied { record: got_b } = b.try_recv().unwrap();
        assert_eq!(got_a, record);
        assert_eq!(got_b, record);
    }

    #[test]
    fn dropped_receiver_unsubscribes() {
        let bus = ConsentBus::new();
        let sub = bus.subscribe();
        drop(sub);

        // Only checks this does not panic or error out.
        bus.publish(ConsentEvent::Applied {
            record: ConsentRecord::defaults(),
        });
    }
}
