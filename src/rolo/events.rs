//! ModelEvent and the EventBus that carries it to front ends.
//!
//! The bus is a `tokio::sync::broadcast` channel owned by the model. Publishing is
//! fire-and-forget: a bus with no subscribers drops the event, and a subscriber that
//! falls behind sees `RecvError::Lagged` / `TryRecvError::Lagged`. Payloads are snapshots
//! taken at commit time, so a subscriber should treat the latest event it holds as the
//! current state and never try to replay a backlog.

use crate::model::{Group, Person};
use serde::Serialize;
use tokio::sync::broadcast;
use tracing::trace;

pub const DEFAULT_EVENT_CAPACITY: usize = 64;

/// Notifications published after the model commits a change.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", content = "data")]
pub enum ModelEvent {
    /// Persons or groups changed. Carries the refreshed displayed list.
    #[serde(rename = "address_book_changed")]
    AddressBookChanged {
        displayed: Vec<Person>,
        groups: Vec<Group>,
    },

    /// Only the filter changed; the authoritative data did not.
    #[serde(rename = "filter_changed")]
    FilterChanged { displayed: Vec<Person> },
}

impl ModelEvent {
    pub fn displayed(&self) -> &[Person] {
        match self {
            ModelEvent::AddressBookChanged { displayed, .. } => displayed,
            ModelEvent::FilterChanged { displayed } => displayed,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            ModelEvent::AddressBookChanged { .. } => "address_book_changed",
            ModelEvent::FilterChanged { .. } => "filter_changed",
        }
    }
}

#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<ModelEvent>,
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_EVENT_CAPACITY)
    }
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ModelEvent> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: ModelEvent) {
        let kind = event.kind();
        match self.sender.send(event) {
            Ok(receivers) => trace!(event = kind, receivers, "published model event"),
            Err(_) => trace!(event = kind, "no subscribers for model event"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::person;
    use tokio::sync::broadcast::error::TryRecvError;

    #[test]
    fn test_publish_without_subscribers_is_fine() {
        let bus = EventBus::default();
        bus.publish(ModelEvent::FilterChanged { displayed: vec![] });
    }

    #[test]
    fn test_subscriber_receives_snapshot() {
        let bus = EventBus::new(4);
        let mut rx = bus.subscribe();
        bus.publish(ModelEvent::FilterChanged {
            displayed: vec![person("Alice")],
        });
        let event = rx.try_recv().unwrap();
        assert_eq!(event.displayed(), &[person("Alice")]);
        assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));
    }

    #[test]
    fn test_slow_subscriber_lags() {
        let bus = EventBus::new(1);
        let mut rx = bus.subscribe();
        for _ in 0..3 {
            bus.publish(ModelEvent::FilterChanged { displayed: vec![] });
        }
        assert!(matches!(rx.try_recv(), Err(TryRecvError::Lagged(_))));
        assert!(rx.try_recv().is_ok());
    }

    #[test]
    fn test_event_json_shape() {
        let event = ModelEvent::FilterChanged { displayed: vec![] };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "filter_changed");
        assert!(json["data"]["displayed"].is_array());
    }
}
