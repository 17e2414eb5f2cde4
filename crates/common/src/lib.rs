//! Common types and utilities shared across the sshbox provisioning service.
//!
//! This crate provides:
//! - Core domain types (SandboxId, DeploymentKind, Sandbox)
//! - The inbound creation request and its validation rules
//! - Error handling types
//! - Configuration structures

pub mod config;
pub mod error;
pub mod request;
pub mod types;

// Re-export commonly used items
pub use error::{Error, Result};
pub use request::CreateSandboxRequest;
pub use types::{DeploymentKind, Sandbox, SandboxId};
