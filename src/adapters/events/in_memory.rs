//! In-memory event bus implementation for testing.
//!
//! Provides synchronous, deterministic event capture for unit tests.
//! Uses `.expect()` on lock operations; acceptable for test code, not
//! for production.

use async_trait::async_trait;
use std::sync::RwLock;

use crate::domain::foundation::{DomainError, EventEnvelope};
use crate::ports::EventPublisher;

/// In-memory event bus for tests.
///
/// # Example
///
/// ```ignore
/// let bus = Arc::new(InMemoryEventBus::new());
/// bus.publish(envelope).await?;
/// assert_eq!(bus.event_count(), 1);
/// assert!(bus.has_event("registration.approved"));
/// ```
#[derive(Default)]
pub struct InMemoryEventBus {
    published: RwLock<Vec<EventEnvelope>>,
}

impl InMemoryEventBus {
    /// Creates a new empty event bus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all published events (for test assertions).
    pub fn published_events(&self) -> Vec<EventEnvelope> {
        self.published
            .read()
            .expect("InMemoryEventBus: published lock poisoned")
            .clone()
    }

    /// Returns events of a specific type.
    pub fn events_of_type(&self, event_type: &str) -> Vec<EventEnvelope> {
        self.published_events()
            .into_iter()
            .filter(|e| e.event_type == event_type)
            .collect()
    }

    /// Returns count of published events.
    pub fn event_count(&self) -> usize {
        self.published
            .read()
            .expect("InMemoryEventBus: published lock poisoned")
            .len()
    }

    /// Checks if a specific event type was published.
    pub fn has_event(&self, event_type: &str) -> bool {
        self.published_events()
            .iter()
            .any(|e| e.event_type == event_type)
    }

    /// Clears all published events (for test isolation).
    pub fn clear(&self) {
        self.published
            .write()
            .expect("InMemoryEventBus: published write lock poisoned")
            .clear();
    }
}

#[async_trait]
impl EventPublisher for InMemoryEventBus {
    async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError> {
        self.published
            .write()
            .expect("InMemoryEventBus: published write lock poisoned")
            .push(event);
        Ok(())
    }

    async fn publish_all(&self, events: Vec<EventEnvelope>) -> Result<(), DomainError> {
        for event in events {
            self.publish(event).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn publish_captures_events() {
        let bus = InMemoryEventBus::new();
        bus.publish(EventEnvelope::new(
            "registration.enrolled",
            "reg-1",
            "Registration",
            json!({}),
        ))
        .await
        .unwrap();

        assert_eq!(bus.event_count(), 1);
        assert!(bus.has_event("registration.enrolled"));
        assert!(!bus.has_event("registration.approved"));
    }

    #[tokio::test]
    async fn events_of_type_filters() {
        let bus = InMemoryEventBus::new();
        bus.publish_all(vec![
            EventEnvelope::new("a", "1", "T", json!({})),
            EventEnvelope::new("b", "2", "T", json!({})),
            EventEnvelope::new("a", "3", "T", json!({})),
        ])
        .await
        .unwrap();

        assert_eq!(bus.events_of_type("a").len(), 2);
    }

    #[tokio::test]
    async fn clear_empties_the_bus() {
        let bus = InMemoryEventBus::new();
        bus.publish(EventEnvelope::new("a", "1", "T", json!({})))
            .await
            .unwrap();
        bus.clear();
        assert_eq!(bus.event_count(), 0);
    }
}
