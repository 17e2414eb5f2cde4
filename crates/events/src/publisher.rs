//! Event publisher trait.

use crate::message::DeploymentCreatedMessage;
use async_trait::async_trait;
use sshbox_common::Result;

/// Trait for durably handing creation events to the event bus.
///
/// Implementations own broker connection, partitioning, and delivery
/// guarantees below the publish call. The orchestrator makes a single
/// attempt; retries belong to the implementation, not the caller.
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Publish a message to the given topic.
    ///
    /// # Errors
    /// Returns an error if the message could not be handed to the bus. The
    /// caller must treat a failed publish as "announcement lost", not
    /// "creation undone".
    async fn publish(&self, topic: &str, message: &DeploymentCreatedMessage) -> Result<()>;
}
