//! Inbound creation request and its validation rules.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Lowest node port the cluster allocates for external exposure.
pub const NODE_PORT_MIN: u16 = 30000;
/// Highest node port the cluster allocates for external exposure.
pub const NODE_PORT_MAX: u16 = 32767;

/// Longest deployment name the cluster accepts (DNS label limit).
const MAX_NAME_LEN: usize = 63;

/// Request to provision a new sandbox.
///
/// Supplied by the caller; immutable. `validate` enforces the cluster's
/// naming rules and the node-port range before any cluster call is made.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSandboxRequest {
    /// User-chosen deployment name (must be a valid cluster resource name)
    pub deployment_name: String,
    /// External node port the sandbox's SSH daemon should be exposed on
    pub ssh_override_port: u16,
}

impl CreateSandboxRequest {
    /// Validate the request fields.
    ///
    /// The deployment name must be a DNS label: non-empty, at most 63
    /// characters, lowercase alphanumeric or `-`, starting and ending with
    /// an alphanumeric. The SSH port must fall in the cluster's node-port
    /// range.
    pub fn validate(&self) -> Result<()> {
        let name = &self.deployment_name;
        if name.is_empty() {
            return Err(Error::Validation("deployment name is empty".into()));
        }
        if name.len() > MAX_NAME_LEN {
            return Err(Error::Validation(format!(
                "deployment name exceeds {} characters",
                MAX_NAME_LEN
            )));
        }
        if !name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            return Err(Error::Validation(format!(
                "deployment name '{}' contains characters outside [a-z0-9-]",
                name
            )));
        }
        if name.starts_with('-') || name.ends_with('-') {
            return Err(Error::Validation(format!(
                "deployment name '{}' must start and end with an alphanumeric",
                name
            )));
        }
        if !(NODE_PORT_MIN..=NODE_PORT_MAX).contains(&self.ssh_override_port) {
            return Err(Error::Validation(format!(
                "ssh port {} outside node-port range {}-{}",
                self.ssh_override_port, NODE_PORT_MIN, NODE_PORT_MAX
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, port: u16) -> CreateSandboxRequest {
        CreateSandboxRequest {
            deployment_name: name.to_string(),
            ssh_override_port: port,
        }
    }

    #[test]
    fn test_valid_request() {
        assert!(request("box1", 31001).validate().is_ok());
        assert!(request("a", NODE_PORT_MIN).validate().is_ok());
        assert!(request("my-sandbox-2", NODE_PORT_MAX).validate().is_ok());
    }

    #[test]
    fn test_empty_name_rejected() {
        assert!(request("", 31001).validate().is_err());
    }

    #[test]
    fn test_invalid_characters_rejected() {
        assert!(request("Box1", 31001).validate().is_err());
        assert!(request("box_1", 31001).validate().is_err());
        assert!(request("box.1", 31001).validate().is_err());
    }

    #[test]
    fn test_hyphen_at_edges_rejected() {
        assert!(request("-box", 31001).validate().is_err());
        assert!(request("box-", 31001).validate().is_err());
    }

    #[test]
    fn test_overlong_name_rejected() {
        let name = "a".repeat(64);
        assert!(request(&name, 31001).validate().is_err());
    }

    #[test]
    fn test_port_out_of_range_rejected() {
        assert!(request("box1", 22).validate().is_err());
        assert!(request("box1", NODE_PORT_MIN - 1).validate().is_err());
        assert!(request("box1", NODE_PORT_MAX).validate().is_ok());
    }

    #[test]
    fn test_wire_field_names() {
        let req: CreateSandboxRequest =
            serde_json::from_str(r#"{"deploymentName":"box1","sshOverridePort":31001}"#).unwrap();
        assert_eq!(req.deployment_name, "box1");
        assert_eq!(req.ssh_override_port, 31001);
    }
}
