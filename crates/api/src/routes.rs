//! Request handlers.

use crate::error::ApiError;
use crate::AppState;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Json};
use sshbox_common::{CreateSandboxRequest, Error};

/// Header carrying the authenticated account id.
///
/// Authentication itself happens upstream of this service; by the time a
/// request arrives here the header holds a verified, opaque account id.
pub const ACCOUNT_ID_HEADER: &str = "x-account-id";

/// `POST /v1/sandboxes` - provision a sandbox for the calling account.
pub async fn create_sandbox(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<CreateSandboxRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let account_id = headers
        .get(ACCOUNT_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .ok_or_else(|| {
            ApiError(Error::Validation(format!(
                "missing {} header",
                ACCOUNT_ID_HEADER
            )))
        })?;

    let sandbox = state
        .provisioner
        .create_sandbox(request, account_id)
        .await?;

    Ok((StatusCode::CREATED, Json(sandbox)))
}

/// `GET /health` - health check.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "sshbox-api"
    }))
}
