//! Node configuration.

use std::path::{Path, PathBuf};

use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Default node name.
pub const DEFAULT_NAME: &str = "default";

/// Default data directory.
pub const DEFAULT_DATA_DIR: &str = "./default.strata";

/// Default client listen address.
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:2379";

/// Default authentication token spec.
pub const DEFAULT_AUTH_TOKEN: &str = "simple";

/// Name of the per-member directory inside the data directory.
pub const MEMBER_DIR: &str = "member";

/// Strata node configuration.
///
/// Built once per startup attempt and never mutated afterwards; the
/// startup path only reads it. Config files may omit fields but must not
/// contain unknown ones, so a misspelled `auth_token` is an error rather
/// than a silent fallback to `simple`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NodeConfig {
    /// Human-readable name of this member.
    pub name: String,

    /// Path to the node's data directory.
    pub data_dir: PathBuf,

    /// Address to accept client connections on (e.g., "127.0.0.1:2379").
    pub listen_addr: String,

    /// Authentication token spec, e.g. "simple" or "bcrypt,cost=10".
    pub auth_token: String,

    /// Hashing cost used when `auth_token` names bcrypt without a cost.
    pub bcrypt_cost: Option<u32>,
}

impl NodeConfig {
    /// Create a new node configuration with the given data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            data_dir: data_dir.into(),
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            auth_token: DEFAULT_AUTH_TOKEN.to_string(),
            bcrypt_cost: None,
        }
    }

    /// Load a configuration from a JSON file. Missing fields take defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        serde_json::from_str(&contents).map_err(|e| {
            Error::Config(format!("invalid config file {}: {}", path.display(), e))
        })
    }

    /// Set the member name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the data directory.
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    /// Set the client listen address.
    pub fn with_listen_addr(mut self, addr: impl Into<String>) -> Self {
        self.listen_addr = addr.into();
        self
    }

    /// Set the authentication token spec.
    pub fn with_auth_token(mut self, spec: impl Into<String>) -> Self {
        self.auth_token = spec.into();
        self
    }

    /// Set the bcrypt cost.
    pub fn with_bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = Some(cost);
        self
    }

    /// Directory holding this member's storage.
    pub fn member_dir(&self) -> PathBuf {
        self.data_dir.join(MEMBER_DIR)
    }
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_DIR)
    }
}

/// Command-line arguments for the server.
#[derive(Parser, Debug)]
#[command(name = "strata-server")]
#[command(version, about = "Strata Key-Value Node", long_about = None)]
pub struct Args {
    /// Human-readable name for this member.
    #[arg(long, default_value = DEFAULT_NAME)]
    pub name: String,

    /// Path to the data directory.
    #[arg(short, long, default_value = DEFAULT_DATA_DIR)]
    pub data_dir: PathBuf,

    /// Address to accept client connections on.
    #[arg(long, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: String,

    /// Authentication token spec ("simple", "bcrypt,cost=N").
    #[arg(long, default_value = DEFAULT_AUTH_TOKEN)]
    pub auth_token: String,

    /// bcrypt cost for a bare "bcrypt" auth token.
    #[arg(long)]
    pub bcrypt_cost: Option<u32>,

    /// Path to a JSON config file. When set, the other flags are ignored.
    #[arg(long)]
    pub config_file: Option<PathBuf>,
}

impl Args {
    /// Convert command-line arguments to node configuration.
    pub fn into_config(self) -> Result<NodeConfig, Error> {
        if let Some(path) = &self.config_file {
            return NodeConfig::from_json_file(path);
        }

        Ok(NodeConfig {
            name: self.name,
            data_dir: self.data_dir,
            listen_addr: self.listen_addr,
            auth_token: self.auth_token,
            bcrypt_cost: self.bcrypt_cost,
        })
    }
}
