//! Domain types used throughout the sshbox provisioning service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a provisioned sandbox.
///
/// Generated as a UUIDv7, so identifiers sort by creation time while
/// remaining collision-resistant under concurrent provisioning.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SandboxId(String);

impl SandboxId {
    /// Create a new time-sortable sandbox ID.
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Create a sandbox ID from a string.
    pub fn from_string(id: String) -> Self {
        Self(id)
    }

    /// Get the inner string representation.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SandboxId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SandboxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for SandboxId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<SandboxId> for String {
    fn from(id: SandboxId) -> String {
        id.0
    }
}

/// Discriminator identifying the kind of deployment an entity or event
/// describes. This service only provisions sandboxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeploymentKind {
    /// An ephemeral SSH-reachable sandbox.
    Sandbox,
}

impl fmt::Display for DeploymentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeploymentKind::Sandbox => write!(f, "sandbox"),
        }
    }
}

/// A provisioned sandbox, as returned to the caller and projected into the
/// creation event.
///
/// Constructed exactly once per successful provisioning call and never
/// mutated afterwards. Deletion is out of scope for this service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sandbox {
    /// Unique, time-sortable identifier
    pub id: SandboxId,
    /// Deployment kind discriminator (always `sandbox`)
    pub deployment_type: DeploymentKind,
    /// Owning account, original case as supplied by the caller
    pub account_id: String,
    /// Creation timestamp (UTC)
    pub created_at: DateTime<Utc>,
    /// User-chosen deployment name
    pub deployment_name: String,
    /// External node port the sandbox's SSH daemon is reachable on
    pub ssh_port: u16,
}
