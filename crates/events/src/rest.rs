//! REST implementation of the event publisher.
//!
//! Posts records to an event-bus HTTP proxy (`POST /topics/<topic>` with a
//! `records` array), the REST-proxy convention for Kafka-shaped buses.

use crate::message::DeploymentCreatedMessage;
use crate::publisher::EventPublisher;
use async_trait::async_trait;
use serde_json::json;
use sshbox_common::config::EventBusConfig;
use sshbox_common::{Error, Result};

/// Event publisher speaking the event bus's HTTP proxy.
pub struct RestEventPublisher {
    client: reqwest::Client,
    config: EventBusConfig,
}

impl RestEventPublisher {
    /// Build a publisher from the event bus configuration.
    pub fn new(config: EventBusConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout())
            .build()
            .map_err(|e| Error::InvalidConfig(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl EventPublisher for RestEventPublisher {
    async fn publish(&self, topic: &str, message: &DeploymentCreatedMessage) -> Result<()> {
        let url = format!(
            "{}/topics/{}",
            self.config.endpoint.trim_end_matches('/'),
            topic
        );
        let body = json!({ "records": [ { "value": message } ] });

        tracing::debug!(topic = %topic, account_id = %message.account_id, "Publishing event");

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::EventPublishFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            return Err(Error::EventPublishFailed(format!(
                "bus returned {}: {}",
                status, detail
            )));
        }

        tracing::info!(topic = %topic, account_id = %message.account_id, "Event published");
        Ok(())
    }
}
