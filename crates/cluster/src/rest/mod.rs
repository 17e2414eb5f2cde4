//! REST implementation of the cluster gateway.
//!
//! Speaks the cluster's HTTP API directly: workload definitions become
//! `apps/v1` Deployment manifests, exposure definitions become `v1` Service
//! manifests, both posted to the namespace-scoped collection endpoints.

mod client;
pub mod manifest;

pub use client::RestClusterGateway;
