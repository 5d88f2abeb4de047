//! Server error types.

use strata_auth::AuthError;
use thiserror::Error;

/// Server errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Authentication options were rejected before startup.
    ///
    /// Carried through unchanged so callers can compare it directly.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Storage error.
    #[error("storage error: {0}")]
    Storage(String),

    /// Transport error.
    #[error("transport error: {0}")]
    Transport(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check whether startup was refused because of invalid auth options.
    pub fn is_invalid_auth_opts(&self) -> bool {
        self.as_auth().is_some_and(AuthError::is_invalid_auth_opts)
    }

    /// The authentication error, if this is one.
    pub fn as_auth(&self) -> Option<&AuthError> {
        match self {
            Error::Auth(err) => Some(err),
            _ => None,
        }
    }
}
