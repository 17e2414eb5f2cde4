//! Configuration structures for the sshbox provisioning service.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Complete configuration for the provisioning service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Cluster API configuration
    pub cluster: ClusterConfig,
    /// Event bus configuration
    pub events: EventBusConfig,
}

/// Configuration for the HTTP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address to bind the API server on
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
        }
    }
}

fn default_listen_addr() -> String {
    "0.0.0.0:8080".to_string()
}

/// Configuration for the cluster orchestration API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusterConfig {
    /// Base URL of the cluster API server
    #[serde(default = "default_cluster_endpoint")]
    pub api_endpoint: String,
    /// Bearer token for cluster API authentication
    #[serde(default)]
    pub bearer_token: Option<String>,
    /// Container image used for sandbox workloads
    #[serde(default = "default_sandbox_image")]
    pub sandbox_image: String,
    /// Connection timeout in seconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
}

fn default_cluster_endpoint() -> String {
    "https://localhost:6443".to_string()
}

fn default_sandbox_image() -> String {
    "kangdroid/multiarch-sshd".to_string()
}

fn default_connect_timeout() -> u64 {
    10
}

/// Configuration for the event bus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventBusConfig {
    /// Base URL of the event bus REST endpoint
    #[serde(default = "default_events_endpoint")]
    pub endpoint: String,
    /// Connection timeout in seconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
}

fn default_events_endpoint() -> String {
    "http://localhost:8082".to_string()
}

impl PlatformConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::with_name(path))
            .build()?
            .try_deserialize()
    }

    /// Create a default configuration.
    pub fn default_config() -> Self {
        Self {
            server: ServerConfig::default(),
            cluster: ClusterConfig {
                api_endpoint: default_cluster_endpoint(),
                bearer_token: None,
                sandbox_image: default_sandbox_image(),
                connect_timeout_secs: default_connect_timeout(),
            },
            events: EventBusConfig {
                endpoint: default_events_endpoint(),
                connect_timeout_secs: default_connect_timeout(),
            },
        }
    }
}

impl ClusterConfig {
    /// Get the connection timeout as a Duration.
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

impl EventBusConfig {
    /// Get the connection timeout as a Duration.
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}
