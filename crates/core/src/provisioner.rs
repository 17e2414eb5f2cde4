//! Sandbox provisioning orchestrator.

use chrono::Utc;
use sshbox_cluster::{builder, ClusterGateway};
use sshbox_common::{
    CreateSandboxRequest, DeploymentKind, Error, Result, Sandbox, SandboxId,
};
use sshbox_events::{DeploymentCreatedMessage, EventPublisher, DEPLOYMENT_CREATED_TOPIC};
use std::sync::Arc;

/// Coordinates one sandbox creation from request to announced entity.
///
/// Constructed once at process start with concrete gateway and publisher
/// implementations; no runtime service lookup. Safe to share across tasks:
/// every call allocates fresh definitions and entities, so concurrent calls
/// never contend on shared state.
pub struct SandboxProvisioner {
    gateway: Arc<dyn ClusterGateway>,
    publisher: Arc<dyn EventPublisher>,
    sandbox_image: String,
}

impl SandboxProvisioner {
    /// Create a provisioner over the given gateway and publisher.
    pub fn new(
        gateway: Arc<dyn ClusterGateway>,
        publisher: Arc<dyn EventPublisher>,
        sandbox_image: impl Into<String>,
    ) -> Self {
        Self {
            gateway,
            publisher,
            sandbox_image: sandbox_image.into(),
        }
    }

    /// Provision a sandbox for `account_id`.
    ///
    /// Steps, in strict order: validate the request, build the workload and
    /// exposure definitions, create the workload, create the exposure
    /// (namespace is the lowercased account id for both), construct the
    /// entity, publish the creation event, return the entity.
    ///
    /// The workload is always created before the exposure, and the event is
    /// published only after both creations succeeded. Nothing is rolled
    /// back on failure: a failed exposure leaves the workload behind, and a
    /// failed publish leaves both resources behind unannounced. The error
    /// variant tells the caller which case occurred.
    ///
    /// # Errors
    /// `Error::Validation` for malformed requests (no cluster call is made),
    /// `Error::WorkloadCreationFailed` / `Error::ExposureCreationFailed` /
    /// `Error::ClusterUnavailable` for cluster faults, and
    /// `Error::EventPublishFailed` when the sandbox exists but the
    /// announcement was lost.
    pub async fn create_sandbox(
        &self,
        request: CreateSandboxRequest,
        account_id: &str,
    ) -> Result<Sandbox> {
        request.validate()?;

        let workload = builder::build_workload(&request, &self.sandbox_image);
        let exposure = builder::build_exposure(&request, &workload);
        // The cluster's naming rules require a lowercase namespace; the
        // entity keeps the owner's original case.
        let namespace = account_id.to_lowercase();

        tracing::info!(
            deployment_name = %request.deployment_name,
            namespace = %namespace,
            ssh_port = request.ssh_override_port,
            "Provisioning sandbox"
        );

        // Once the first mutation is issued the sequence must run to
        // completion; a dropped caller future must not strand a created
        // workload without its exposure and event. Run the mutation and
        // publish steps on a spawned task and await its handle.
        let gateway = self.gateway.clone();
        let publisher = self.publisher.clone();
        let account_id = account_id.to_string();
        let handle = tokio::spawn(async move {
            provision(gateway, publisher, request, workload, exposure, namespace, account_id).await
        });

        handle
            .await
            .map_err(|e| Error::Internal(format!("provisioning task failed: {}", e)))?
    }
}

async fn provision(
    gateway: Arc<dyn ClusterGateway>,
    publisher: Arc<dyn EventPublisher>,
    request: CreateSandboxRequest,
    workload: sshbox_cluster::WorkloadDefinition,
    exposure: sshbox_cluster::ExposureDefinition,
    namespace: String,
    account_id: String,
) -> Result<Sandbox> {
    gateway.create_workload(&workload, &namespace).await?;
    gateway.create_exposure(&exposure, &namespace).await?;

    let sandbox = Sandbox {
        id: SandboxId::new(),
        deployment_type: DeploymentKind::Sandbox,
        account_id,
        created_at: Utc::now(),
        deployment_name: request.deployment_name,
        ssh_port: request.ssh_override_port,
    };

    let message = DeploymentCreatedMessage::from_sandbox(&sandbox)?;
    publisher.publish(DEPLOYMENT_CREATED_TOPIC, &message).await?;

    tracing::info!(
        sandbox_id = %sandbox.id,
        account_id = %sandbox.account_id,
        "Sandbox provisioned"
    );
    Ok(sandbox)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use sshbox_cluster::{ExposureDefinition, WorkloadDefinition};
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Workload { namespace: String },
        Exposure { namespace: String },
        Publish { topic: String },
    }

    #[derive(Default)]
    struct CallLog {
        calls: Mutex<Vec<Call>>,
    }

    impl CallLog {
        fn record(&self, call: Call) {
            self.calls.lock().unwrap().push(call);
        }

        fn snapshot(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }
    }

    struct FakeGateway {
        log: Arc<CallLog>,
        fail_workload: bool,
    }

    #[async_trait]
    impl ClusterGateway for FakeGateway {
        async fn create_workload(
            &self,
            _definition: &WorkloadDefinition,
            namespace: &str,
        ) -> Result<()> {
            self.log.record(Call::Workload {
                namespace: namespace.to_string(),
            });
            if self.fail_workload {
                return Err(Error::WorkloadCreationFailed("quota exceeded".into()));
            }
            Ok(())
        }

        async fn create_exposure(
            &self,
            _definition: &ExposureDefinition,
            namespace: &str,
        ) -> Result<()> {
            self.log.record(Call::Exposure {
                namespace: namespace.to_string(),
            });
            Ok(())
        }
    }

    struct FakePublisher {
        log: Arc<CallLog>,
    }

    #[async_trait]
    impl EventPublisher for FakePublisher {
        async fn publish(&self, topic: &str, _message: &DeploymentCreatedMessage) -> Result<()> {
            self.log.record(Call::Publish {
                topic: topic.to_string(),
            });
            Ok(())
        }
    }

    fn provisioner(log: Arc<CallLog>, fail_workload: bool) -> SandboxProvisioner {
        SandboxProvisioner::new(
            Arc::new(FakeGateway {
                log: log.clone(),
                fail_workload,
            }),
            Arc::new(FakePublisher { log }),
            "kangdroid/multiarch-sshd",
        )
    }

    fn request() -> CreateSandboxRequest {
        CreateSandboxRequest {
            deployment_name: "box1".to_string(),
            ssh_override_port: 31001,
        }
    }

    #[tokio::test]
    async fn test_steps_run_in_order() {
        let log = Arc::new(CallLog::default());
        let provisioner = provisioner(log.clone(), false);

        provisioner.create_sandbox(request(), "UserA").await.unwrap();

        assert_eq!(
            log.snapshot(),
            vec![
                Call::Workload {
                    namespace: "usera".into()
                },
                Call::Exposure {
                    namespace: "usera".into()
                },
                Call::Publish {
                    topic: "deployment.created".into()
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_invalid_request_makes_no_calls() {
        let log = Arc::new(CallLog::default());
        let provisioner = provisioner(log.clone(), false);

        let bad = CreateSandboxRequest {
            deployment_name: "Not A Name".to_string(),
            ssh_override_port: 31001,
        };
        let result = provisioner.create_sandbox(bad, "UserA").await;

        assert!(matches!(result, Err(Error::Validation(_))));
        assert!(log.snapshot().is_empty());
    }

    #[tokio::test]
    async fn test_workload_failure_stops_sequence() {
        let log = Arc::new(CallLog::default());
        let provisioner = provisioner(log.clone(), true);

        let result = provisioner.create_sandbox(request(), "UserA").await;

        assert!(matches!(result, Err(Error::WorkloadCreationFailed(_))));
        assert_eq!(
            log.snapshot(),
            vec![Call::Workload {
                namespace: "usera".into()
            }]
        );
    }

    #[tokio::test]
    async fn test_entity_fields() {
        let log = Arc::new(CallLog::default());
        let provisioner = provisioner(log, false);

        let sandbox = provisioner.create_sandbox(request(), "UserA").await.unwrap();

        assert_eq!(sandbox.deployment_name, "box1");
        assert_eq!(sandbox.ssh_port, 31001);
        assert_eq!(sandbox.deployment_type, DeploymentKind::Sandbox);
        // Owner keeps its original case even though the namespace was
        // lowercased.
        assert_eq!(sandbox.account_id, "UserA");
    }

    #[tokio::test]
    async fn test_concurrent_calls_get_distinct_ids() {
        let log = Arc::new(CallLog::default());
        let provisioner = Arc::new(provisioner(log, false));

        let a = {
            let p = provisioner.clone();
            tokio::spawn(async move { p.create_sandbox(request(), "UserA").await })
        };
        let b = {
            let p = provisioner.clone();
            tokio::spawn(async move { p.create_sandbox(request(), "UserB").await })
        };

        let sandbox_a = a.await.unwrap().unwrap();
        let sandbox_b = b.await.unwrap().unwrap();
        assert_ne!(sandbox_a.id, sandbox_b.id);
    }
}
