//! Error types for the sshbox provisioning service.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the sshbox provisioning service.
#[derive(Error, Debug)]
pub enum Error {
    /// The creation request was malformed or out of range.
    #[error("invalid request: {0}")]
    Validation(String),

    /// The cluster rejected or failed to create the workload.
    #[error("workload creation failed: {0}")]
    WorkloadCreationFailed(String),

    /// The cluster rejected or failed to create the network exposure.
    #[error("exposure creation failed: {0}")]
    ExposureCreationFailed(String),

    /// The cluster API could not be reached at all.
    #[error("cluster unavailable: {0}")]
    ClusterUnavailable(String),

    /// The creation event could not be handed to the event bus.
    ///
    /// The cluster resources exist when this is returned; the creation is
    /// unannounced, not undone.
    #[error("event publish failed: {0}")]
    EventPublishFailed(String),

    /// Invalid configuration provided.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internal error (unexpected condition).
    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Check if this error is the caller's fault (maps to a 4xx response
    /// at the HTTP boundary).
    pub fn is_client_fault(&self) -> bool {
        matches!(self, Error::Validation(_))
    }

    /// Check if this error left cluster resources behind despite the call
    /// failing. Reconciliation must not rely on the event stream for these.
    pub fn resources_may_exist(&self) -> bool {
        matches!(
            self,
            Error::ExposureCreationFailed(_) | Error::EventPublishFailed(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Validation("deployment name is empty".to_string());
        assert_eq!(err.to_string(), "invalid request: deployment name is empty");
    }

    #[test]
    fn test_is_client_fault() {
        assert!(Error::Validation("bad port".to_string()).is_client_fault());
        assert!(!Error::WorkloadCreationFailed("quota".to_string()).is_client_fault());
        assert!(!Error::EventPublishFailed("broker down".to_string()).is_client_fault());
    }

    #[test]
    fn test_resources_may_exist() {
        assert!(Error::EventPublishFailed("broker down".to_string()).resources_may_exist());
        assert!(Error::ExposureCreationFailed("port in use".to_string()).resources_may_exist());
        assert!(!Error::WorkloadCreationFailed("quota".to_string()).resources_may_exist());
        assert!(!Error::Validation("bad name".to_string()).resources_may_exist());
    }
}
