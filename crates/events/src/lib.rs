//! Creation events and the event-bus publisher for sshbox.
//!
//! This crate provides:
//! - `DeploymentCreatedMessage`, the wire-format record announcing a
//!   sandbox creation
//! - `EventPublisher` trait for handing messages to the event bus
//! - A REST implementation posting records to an event-bus HTTP proxy

pub mod message;
pub mod publisher;
pub mod rest;

// Re-export main types
pub use message::{DeploymentCreatedMessage, DEPLOYMENT_CREATED_TOPIC};
pub use publisher::EventPublisher;
pub use rest::RestEventPublisher;
