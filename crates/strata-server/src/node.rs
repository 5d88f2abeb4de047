//! Node startup.
//!
//! [`Node::start`] is the only way to get a running node. It checks the
//! authentication options first and acquires nothing until that check has
//! passed: a rejected configuration leaves no directory, storage handle or
//! socket behind.

use std::net::SocketAddr;
use std::path::Path;

use strata_auth::{check_auth_options, AuthTokenSpec, Bcrypt, CostBounds, ValidatedAuth};
use tokio::net::TcpListener;
use tracing::info;

use crate::config::NodeConfig;
use crate::error::Error;

/// Name of the storage tree inside the member directory.
const STORAGE_DIR: &str = "db";

/// A started node holding its storage and client listener.
pub struct Node {
    config: NodeConfig,
    auth: ValidatedAuth,
    storage: sled::Db,
    listener: TcpListener,
    local_addr: SocketAddr,
}

impl Node {
    /// Start a node, checking hash costs against bcrypt's limits.
    pub async fn start(config: NodeConfig) -> Result<Self, Error> {
        Self::start_with_bounds(config, &Bcrypt).await
    }

    /// Start a node, checking hash costs against `primitive`'s limits.
    pub async fn start_with_bounds<B>(config: NodeConfig, primitive: &B) -> Result<Self, Error>
    where
        B: CostBounds + Sync,
    {
        let auth = check_auth_options(&config.auth_token, config.bcrypt_cost, primitive)?;
        info!(name = %config.name, auth_token = %auth.spec(), "auth options validated");

        let storage = open_storage(&config.member_dir())?;
        info!(data_dir = %config.data_dir.display(), "storage opened");

        let listener = TcpListener::bind(&config.listen_addr).await.map_err(|e| {
            Error::Transport(format!("failed to bind {}: {}", config.listen_addr, e))
        })?;
        let local_addr = listener.local_addr()?;
        info!(%local_addr, "listening for clients");

        Ok(Self {
            config,
            auth,
            storage,
            listener,
            local_addr,
        })
    }

    /// This member's name.
    pub fn name(&self) -> &str {
        &self.config.name
    }

    /// The configuration the node was started with.
    pub fn config(&self) -> &NodeConfig {
        &self.config
    }

    /// The node's data directory.
    pub fn data_dir(&self) -> &Path {
        &self.config.data_dir
    }

    /// The accepted authentication token spec.
    pub fn auth(&self) -> &AuthTokenSpec {
        self.auth.spec()
    }

    /// The bound client address; useful when listening on port 0.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// The node's storage handle.
    pub fn storage(&self) -> &sled::Db {
        &self.storage
    }

    /// The client listener.
    pub fn listener(&self) -> &TcpListener {
        &self.listener
    }

    /// Flush storage and release the listener.
    pub async fn close(self) -> Result<(), Error> {
        self.storage
            .flush_async()
            .await
            .map_err(|e| Error::Storage(format!("failed to flush storage: {}", e)))?;
        drop(self.listener);
        info!(name = %self.config.name, "node closed");
        Ok(())
    }
}

fn open_storage(member_dir: &Path) -> Result<sled::Db, Error> {
    std::fs::create_dir_all(member_dir)
        .map_err(|e| Error::Storage(format!("failed to create data directory: {}", e)))?;

    sled::open(member_dir.join(STORAGE_DIR))
        .map_err(|e| Error::Storage(format!("failed to open storage: {}", e)))
}
