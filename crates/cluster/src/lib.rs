//! Cluster resource definitions and the orchestration gateway for sshbox.
//!
//! This crate provides:
//! - `WorkloadDefinition` / `ExposureDefinition` models describing a sandbox
//!   workload and its node-port exposure
//! - The pure `builder` module that translates a creation request into the
//!   two definitions
//! - `ClusterGateway` trait for submitting definitions to the cluster
//! - A REST implementation speaking the cluster's HTTP API

pub mod builder;
pub mod definitions;
pub mod gateway;
pub mod rest;

// Re-export main types
pub use definitions::{ExposureDefinition, WorkloadDefinition};
pub use gateway::ClusterGateway;
pub use rest::RestClusterGateway;
