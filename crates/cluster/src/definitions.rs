//! Models for sandbox workload and network-exposure definitions.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Container port the sandbox's SSH daemon listens on. Fixed by the sandbox
/// image, not user-configurable.
pub const SSH_CONTAINER_PORT: u16 = 22;

/// Transport protocol for the SSH port.
pub const SSH_PROTOCOL: &str = "TCP";

/// Label key binding a workload's pod template to its exposure selector.
pub const MATCH_LABEL_KEY: &str = "matchname";

/// Describes a single-replica sandbox workload running one SSH-reachable
/// container.
///
/// The match labels are generated once per workload and applied to both the
/// selector and the pod template, so the paired exposure can select exactly
/// this workload's pods and no others.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkloadDefinition {
    /// Resource name (the user-chosen deployment name)
    pub name: String,
    /// Generated globally-unique container name
    pub container_name: String,
    /// Container image to run
    pub image: String,
    /// Replica count (fixed at 1 for sandboxes)
    pub replicas: u32,
    /// Generated unique match labels shared with the paired exposure
    pub match_labels: HashMap<String, String>,
    /// Container port (always 22)
    pub container_port: u16,
    /// Transport protocol (always TCP)
    pub protocol: String,
}

impl WorkloadDefinition {
    /// Labels applied to the workload's pod template. The paired exposure's
    /// selector must equal these exactly.
    pub fn pod_labels(&self) -> &HashMap<String, String> {
        &self.match_labels
    }
}

/// Describes a node-port service exposing a workload's SSH port externally.
///
/// Only ever constructed from an already-built `WorkloadDefinition`, since
/// its selector is cloned from that workload's pod labels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExposureDefinition {
    /// Generated service resource name
    pub name: String,
    /// Service port (always 22)
    pub port: u16,
    /// Container port the service routes to (always 22)
    pub target_port: u16,
    /// External node port requested by the caller
    pub node_port: u16,
    /// Transport protocol (always TCP)
    pub protocol: String,
    /// Pod selector, equal to the paired workload's pod labels
    pub selector: HashMap<String, String>,
}
