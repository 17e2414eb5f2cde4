//! sshbox API server entry point.

use sshbox_api::AppState;
use sshbox_cluster::RestClusterGateway;
use sshbox_common::config::PlatformConfig;
use sshbox_core::SandboxProvisioner;
use sshbox_events::RestEventPublisher;
use std::sync::Arc;
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive("sshbox_api=info".parse()?))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting sshbox API server");

    let config_path =
        std::env::var("SSHBOX_CONFIG").unwrap_or_else(|_| "sshbox".to_string());
    let config = match PlatformConfig::from_file(&config_path) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(path = %config_path, error = %e, "Config file not loaded, using defaults");
            PlatformConfig::default_config()
        }
    };

    let addr: std::net::SocketAddr = config.server.listen_addr.parse()?;
    let sandbox_image = config.cluster.sandbox_image.clone();

    // Constructor-style composition: the provisioner gets its concrete
    // gateway and publisher here, once, at process start.
    let gateway = RestClusterGateway::new(config.cluster)?;
    let publisher = RestEventPublisher::new(config.events)?;
    let provisioner = SandboxProvisioner::new(Arc::new(gateway), Arc::new(publisher), sandbox_image);

    let state = AppState {
        provisioner: Arc::new(provisioner),
    };

    let shutdown = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for shutdown signal");
        }
        tracing::info!("Received shutdown signal");
    };

    sshbox_api::serve(state, addr, shutdown).await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}
