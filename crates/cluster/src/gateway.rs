//! Cluster gateway trait.

use crate::definitions::{ExposureDefinition, WorkloadDefinition};
use async_trait::async_trait;
use sshbox_common::Result;

/// Trait for materializing resource definitions on the cluster.
///
/// This abstraction keeps the orchestrator independent of the cluster API
/// transport; implementations own connection, credentials, and any
/// transport-level retries.
#[async_trait]
pub trait ClusterGateway: Send + Sync {
    /// Create the sandbox workload in the given namespace.
    ///
    /// # Errors
    /// Returns an error if the cluster rejects or fails to create the
    /// workload.
    async fn create_workload(
        &self,
        definition: &WorkloadDefinition,
        namespace: &str,
    ) -> Result<()>;

    /// Create the network exposure in the given namespace.
    ///
    /// Must only be called after the paired workload has been created; the
    /// exposure's selector references labels chosen for that workload.
    ///
    /// # Errors
    /// Returns an error if the cluster rejects or fails to create the
    /// exposure.
    async fn create_exposure(
        &self,
        definition: &ExposureDefinition,
        namespace: &str,
    ) -> Result<()>;
}
