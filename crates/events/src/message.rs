//! Wire-format record describing a sandbox creation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sshbox_common::{DeploymentKind, Error, Result, Sandbox};

/// Topic the creation event is published to.
pub const DEPLOYMENT_CREATED_TOPIC: &str = "deployment.created";

/// Event announcing that a deployment was created.
///
/// The entity's fields travel in `deployment_object` as a generic key-value
/// mapping rather than a typed structure, so the event schema stays
/// decoupled from the entity's concrete shape. The envelope fields
/// (discriminator, account, timestamp) are copied from the entity and must
/// match it exactly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentCreatedMessage {
    /// Deployment kind discriminator
    pub deployment_type: DeploymentKind,
    /// Owning account, original case
    pub account_id: String,
    /// Creation timestamp (UTC)
    pub created_at: DateTime<Utc>,
    /// Generic projection of the created entity's fields
    pub deployment_object: Map<String, Value>,
}

impl DeploymentCreatedMessage {
    /// Project a sandbox entity into a creation event.
    pub fn from_sandbox(sandbox: &Sandbox) -> Result<Self> {
        let deployment_object = match serde_json::to_value(sandbox)? {
            Value::Object(map) => map,
            other => {
                return Err(Error::Internal(format!(
                    "sandbox serialized to {:?} instead of an object",
                    other
                )))
            }
        };

        Ok(Self {
            deployment_type: sandbox.deployment_type,
            account_id: sandbox.account_id.clone(),
            created_at: sandbox.created_at,
            deployment_object,
        })
    }
}
