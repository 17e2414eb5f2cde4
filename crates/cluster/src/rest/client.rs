use crate::definitions::{ExposureDefinition, WorkloadDefinition};
use crate::gateway::ClusterGateway;
use crate::rest::manifest;
use async_trait::async_trait;
use serde_json::Value;
use sshbox_common::config::ClusterConfig;
use sshbox_common::{Error, Result};

/// Cluster gateway speaking the cluster's HTTP API with bearer-token auth.
pub struct RestClusterGateway {
    client: reqwest::Client,
    config: ClusterConfig,
}

impl RestClusterGateway {
    /// Build a gateway from the cluster configuration.
    pub fn new(config: ClusterConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout())
            .build()
            .map_err(|e| Error::InvalidConfig(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    async fn post_manifest(&self, path: &str, manifest: &Value) -> Result<reqwest::Response> {
        let url = format!("{}{}", self.config.api_endpoint.trim_end_matches('/'), path);
        let mut request = self.client.post(&url).json(manifest);
        if let Some(token) = &self.config.bearer_token {
            request = request.bearer_auth(token);
        }

        request
            .send()
            .await
            .map_err(|e| Error::ClusterUnavailable(e.to_string()))
    }

    async fn failure_detail(response: reqwest::Response) -> String {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        format!("cluster returned {}: {}", status, body)
    }
}

#[async_trait]
impl ClusterGateway for RestClusterGateway {
    async fn create_workload(
        &self,
        definition: &WorkloadDefinition,
        namespace: &str,
    ) -> Result<()> {
        let path = format!("/apis/apps/v1/namespaces/{}/deployments", namespace);
        let manifest = manifest::workload_manifest(definition);

        tracing::debug!(
            workload = %definition.name,
            namespace = %namespace,
            "Submitting workload definition"
        );

        let response = self.post_manifest(&path, &manifest).await?;
        if !response.status().is_success() {
            return Err(Error::WorkloadCreationFailed(
                Self::failure_detail(response).await,
            ));
        }

        tracing::info!(workload = %definition.name, namespace = %namespace, "Workload created");
        Ok(())
    }

    async fn create_exposure(
        &self,
        definition: &ExposureDefinition,
        namespace: &str,
    ) -> Result<()> {
        let path = format!("/api/v1/namespaces/{}/services", namespace);
        let manifest = manifest::exposure_manifest(definition);

        tracing::debug!(
            exposure = %definition.name,
            namespace = %namespace,
            node_port = definition.node_port,
            "Submitting exposure definition"
        );

        let response = self.post_manifest(&path, &manifest).await?;
        if !response.status().is_success() {
            return Err(Error::ExposureCreationFailed(
                Self::failure_detail(response).await,
            ));
        }

        tracing::info!(exposure = %definition.name, namespace = %namespace, "Exposure created");
        Ok(())
    }
}
