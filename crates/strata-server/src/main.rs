//! Strata Server - standalone key-value node.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use strata_server::{Args, Node};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "strata_server=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting Strata node");

    let config = Args::parse().into_config()?;

    tracing::info!(
        name = %config.name,
        data_dir = %config.data_dir.display(),
        listen_addr = %config.listen_addr,
        "configuration loaded"
    );

    let node = match Node::start(config).await {
        Ok(node) => node,
        Err(e) if e.is_invalid_auth_opts() => {
            tracing::error!(error = %e, "refusing to start with invalid auth options");
            return Err(e.into());
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to start node");
            return Err(e.into());
        }
    };

    tracing::info!(name = node.name(), addr = %node.local_addr(), "node ready");

    tokio::signal::ctrl_c().await?;
    tracing::info!("received shutdown signal");

    node.close().await?;
    tracing::info!("shutdown complete");
    Ok(())
}
