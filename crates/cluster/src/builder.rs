//! Pure translation of a creation request into cluster resource definitions.
//!
//! No I/O happens here. The only non-determinism is the UUIDv7 generator
//! used for unique container names, service names, and match-label values;
//! these must stay collision-resistant under many builds per second, so a
//! counter or the deployment name itself is never used.

use crate::definitions::{
    ExposureDefinition, WorkloadDefinition, MATCH_LABEL_KEY, SSH_CONTAINER_PORT, SSH_PROTOCOL,
};
use sshbox_common::CreateSandboxRequest;
use std::collections::HashMap;
use uuid::Uuid;

/// Generate a unique, lowercase suffix for resource names and label values.
fn unique_suffix() -> String {
    Uuid::now_v7().simple().to_string()
}

/// Build the workload definition for a sandbox creation request.
///
/// The workload runs a single replica of the configured sandbox image with
/// a freshly generated container name, exposes port 22/TCP, and carries a
/// freshly generated match label on its pod template.
pub fn build_workload(request: &CreateSandboxRequest, image: &str) -> WorkloadDefinition {
    let mut match_labels = HashMap::new();
    match_labels.insert(MATCH_LABEL_KEY.to_string(), unique_suffix());

    WorkloadDefinition {
        name: request.deployment_name.clone(),
        container_name: format!("ubuntu-sshd-{}", unique_suffix()),
        image: image.to_string(),
        replicas: 1,
        match_labels,
        container_port: SSH_CONTAINER_PORT,
        protocol: SSH_PROTOCOL.to_string(),
    }
}

/// Build the node-port exposure definition for an already-built workload.
///
/// The selector is cloned from the workload's pod labels; this is the
/// binding invariant between the two definitions.
pub fn build_exposure(
    request: &CreateSandboxRequest,
    workload: &WorkloadDefinition,
) -> ExposureDefinition {
    ExposureDefinition {
        name: format!("ssh-{}", unique_suffix()),
        port: SSH_CONTAINER_PORT,
        target_port: SSH_CONTAINER_PORT,
        node_port: request.ssh_override_port,
        protocol: SSH_PROTOCOL.to_string(),
        selector: workload.pod_labels().clone(),
    }
}
