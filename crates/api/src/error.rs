//! Error-kind to response-code mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use sshbox_common::Error;

/// Wrapper turning core errors into HTTP responses.
pub struct ApiError(pub Error);

impl ApiError {
    /// Stable machine-readable kind for the response body.
    fn kind(&self) -> &'static str {
        match &self.0 {
            Error::Validation(_) => "validation",
            Error::WorkloadCreationFailed(_) => "workload_creation_failed",
            Error::ExposureCreationFailed(_) => "exposure_creation_failed",
            Error::ClusterUnavailable(_) => "cluster_unavailable",
            Error::EventPublishFailed(_) => "event_publish_failed",
            Error::InvalidConfig(_) => "invalid_config",
            Error::Serialization(_) => "serialization",
            Error::Internal(_) => "internal",
        }
    }

    /// Explicit error-kind to status-code table.
    ///
    /// Client faults map to 400. Cluster-mutation faults map to 502 since
    /// the upstream cluster rejected or failed the request. Everything
    /// else, including a lost announcement after a successful creation, is
    /// a plain 500.
    fn status(&self) -> StatusCode {
        match &self.0 {
            Error::Validation(_) => StatusCode::BAD_REQUEST,
            Error::WorkloadCreationFailed(_)
            | Error::ExposureCreationFailed(_)
            | Error::ClusterUnavailable(_) => StatusCode::BAD_GATEWAY,
            Error::EventPublishFailed(_)
            | Error::InvalidConfig(_)
            | Error::Serialization(_)
            | Error::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(serde_json::json!({
            "error": self.kind(),
            "message": self.0.to_string(),
        }));
        (status, body).into_response()
    }
}
