//! Mapping from internal definitions to cluster API manifests.

use crate::definitions::{ExposureDefinition, WorkloadDefinition};
use serde_json::{json, Value};

/// Render a workload definition as an `apps/v1` Deployment manifest.
pub fn workload_manifest(definition: &WorkloadDefinition) -> Value {
    json!({
        "apiVersion": "apps/v1",
        "kind": "Deployment",
        "metadata": {
            "name": definition.name,
        },
        "spec": {
            "replicas": definition.replicas,
            "selector": {
                "matchLabels": definition.match_labels,
            },
            "template": {
                "metadata": {
                    "labels": definition.match_labels,
                },
                "spec": {
                    "containers": [
                        {
                            "name": definition.container_name,
                            "image": definition.image,
                            "ports": [
                                {
                                    "containerPort": definition.container_port,
                                    "protocol": definition.protocol,
                                }
                            ],
                        }
                    ],
                },
            },
        },
    })
}

/// Render an exposure definition as a `v1` Service manifest of type
/// NodePort.
pub fn exposure_manifest(definition: &ExposureDefinition) -> Value {
    json!({
        "apiVersion": "v1",
        "kind": "Service",
        "metadata": {
            "name": definition.name,
        },
        "spec": {
            "type": "NodePort",
            "ports": [
                {
                    "port": definition.port,
                    "targetPort": definition.target_port,
                    "nodePort": definition.node_port,
                    "protocol": definition.protocol,
                }
            ],
            "selector": definition.selector,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder;
    use sshbox_common::CreateSandboxRequest;

    fn request() -> CreateSandboxRequest {
        CreateSandboxRequest {
            deployment_name: "box1".to_string(),
            ssh_override_port: 31001,
        }
    }

    #[test]
    fn test_workload_manifest_shape() {
        let workload = builder::build_workload(&request(), "kangdroid/multiarch-sshd");
        let manifest = workload_manifest(&workload);

        assert_eq!(manifest["apiVersion"], "apps/v1");
        assert_eq!(manifest["kind"], "Deployment");
        assert_eq!(manifest["metadata"]["name"], "box1");
        assert_eq!(manifest["spec"]["replicas"], 1);

        let container = &manifest["spec"]["template"]["spec"]["containers"][0];
        assert_eq!(container["image"], "kangdroid/multiarch-sshd");
        assert_eq!(container["ports"][0]["containerPort"], 22);
        assert_eq!(container["ports"][0]["protocol"], "TCP");

        // Selector and pod-template labels carry the same match label.
        assert_eq!(
            manifest["spec"]["selector"]["matchLabels"],
            manifest["spec"]["template"]["metadata"]["labels"]
        );
    }

    #[test]
    fn test_exposure_manifest_shape() {
        let req = request();
        let workload = builder::build_workload(&req, "kangdroid/multiarch-sshd");
        let exposure = builder::build_exposure(&req, &workload);
        let manifest = exposure_manifest(&exposure);

        assert_eq!(manifest["apiVersion"], "v1");
        assert_eq!(manifest["kind"], "Service");
        assert_eq!(manifest["spec"]["type"], "NodePort");

        let port = &manifest["spec"]["ports"][0];
        assert_eq!(port["port"], 22);
        assert_eq!(port["targetPort"], 22);
        assert_eq!(port["nodePort"], 31001);
        assert_eq!(port["protocol"], "TCP");

        let workload_manifest = workload_manifest(&workload);
        assert_eq!(
            manifest["spec"]["selector"],
            workload_manifest["spec"]["template"]["metadata"]["labels"]
        );
    }
}
