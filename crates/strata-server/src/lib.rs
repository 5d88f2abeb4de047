//! Strata Server library.
//!
//! Node configuration and the startup path for a Strata key-value node.
//! Embedders build a [`NodeConfig`] and call [`Node::start`]; a node with
//! invalid authentication options is refused with
//! [`strata_auth::AuthError::InvalidAuthOpts`] before anything is created
//! on disk or on the network.

pub mod config;
pub mod error;
pub mod node;

pub use config::{Args, NodeConfig};
pub use error::Error;
pub use node::Node;
