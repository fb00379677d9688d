//! Event publisher port.

use crate::domain::foundation::{DomainError, EventEnvelope};
use async_trait::async_trait;

/// Port for publishing domain events.
///
/// Command handlers publish one envelope per state change after the
/// mutation has been persisted. Publication failures are surfaced to the
/// caller; handlers do not roll back the mutation.
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Publish a single event.
    async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError>;

    /// Publish a batch of events in order.
    async fn publish_all(&self, events: Vec<EventEnvelope>) -> Result<(), DomainError>;
}
