//! Synchronous event bus.
//!
//! The host publishes while it changes state, and every matching subscriber
//! runs before `publish` returns, in the order it subscribed. A bus created
//! with [`EventBus::with_history`] also keeps the most recent events.

use std::collections::VecDeque;
use std::fmt;

use parking_lot::{Mutex, RwLock};
use uuid::Uuid;

use super::events::{AppEvent, EventCategory};

/// Handle returned by [`EventBus::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(Uuid);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sub-{}", self.0.as_simple())
    }
}

/// Which events a subscriber wants
#[derive(Debug, Clone, Default)]
pub enum EventFilter {
    #[default]
    All,
    /// Any event in one of these categories
    Categories(Vec<EventCategory>),
}

impl EventFilter {
    pub fn matches(&self, event: &AppEvent) -> bool {
        match self {
            EventFilter::All => true,
            EventFilter::Categories(categories) => categories.contains(&event.category()),
        }
    }
}

type Handler = Box<dyn Fn(&AppEvent) + Send + Sync>;

struct Subscriber {
    id: SubscriptionId,
    filter: EventFilter,
    handler: Handler,
}

/// Most recent events, oldest first
struct EventLog {
    events: VecDeque<AppEvent>,
    capacity: usize,
}

impl EventLog {
    fn record(&mut self, event: &AppEvent) {
        if self.capacity == 0 {
            return;
        }
        if self.events.len() == self.capacity {
            self.events.pop_front();
        }
        self.events.push_back(event.clone());
    }
}

/// Distributes guide, stroke and symmetry events of one session
pub struct EventBus {
    subscribers: RwLock<Vec<Subscriber>>,
    log: Option<Mutex<EventLog>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            subscribers: RwLock::new(Vec::new()),
            log: None,
        }
    }

    /// A bus that keeps the last `capacity` published events
    pub fn with_history(capacity: usize) -> Self {
        Self {
            log: Some(Mutex::new(EventLog {
                events: VecDeque::with_capacity(capacity),
                capacity,
            })),
            ..Self::new()
        }
    }

    /// Run `handler` for every future event matching `filter`
    ///
    /// Handlers run on the publishing thread with the subscriber list
    /// locked, so they must not subscribe or unsubscribe on this bus.
    pub fn subscribe<F>(&self, filter: EventFilter, handler: F) -> SubscriptionId
    where
        F: Fn(&AppEvent) + Send + Sync + 'static,
    {
        let id = SubscriptionId(Uuid::new_v4());
        self.subscribers.write().push(Subscriber {
            id,
            filter,
            handler: Box::new(handler),
        });
        tracing::debug!("Subscription {} added", id);
        id
    }

    /// Returns true if the subscription existed
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.subscribers.write();
        let before = subscribers.len();
        subscribers.retain(|s| s.id != id);
        let removed = subscribers.len() < before;
        if removed {
            tracing::debug!("Subscription {} removed", id);
        }
        removed
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.read().len()
    }

    /// Deliver `event` and return how many subscribers received it
    pub fn publish(&self, event: AppEvent) -> usize {
        if let Some(log) = &self.log {
            log.lock().record(&event);
        }

        let mut delivered = 0;
        for subscriber in self.subscribers.read().iter() {
            if subscriber.filter.matches(&event) {
                (subscriber.handler)(&event);
                delivered += 1;
            }
        }
        delivered
    }

    /// Recorded events, oldest first; empty without history
    pub fn history(&self) -> Vec<AppEvent> {
        self.log
            .as_ref()
            .map(|log| log.lock().events.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn clear_history(&self) {
        if let Some(log) = &self.log {
            log.lock().events.clear();
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.subscriber_count())
            .field("history", &self.log.as_ref().map(|log| log.lock().capacity))
            .finish()
    }
}
