//! Authentication options error types.

use std::fmt;

use thiserror::Error;

/// Errors produced by the authentication options gate.
///
/// There is deliberately one kind. Callers check it with
/// [`AuthError::is_invalid_auth_opts`] or by equality; the attached
/// [`InvalidAuthCause`] is for humans.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The authentication token options are unusable.
    #[error("auth: invalid auth options: {cause}")]
    InvalidAuthOpts {
        /// What was wrong with the options.
        cause: InvalidAuthCause,
    },
}

impl AuthError {
    /// Returns true for every `InvalidAuthOpts` failure, whatever the cause.
    pub fn is_invalid_auth_opts(&self) -> bool {
        matches!(self, AuthError::InvalidAuthOpts { .. })
    }

    /// The diagnostic cause attached to this error.
    pub fn cause(&self) -> &InvalidAuthCause {
        match self {
            AuthError::InvalidAuthOpts { cause } => cause,
        }
    }
}

impl From<InvalidAuthCause> for AuthError {
    fn from(cause: InvalidAuthCause) -> Self {
        AuthError::InvalidAuthOpts { cause }
    }
}

/// Why a set of authentication options was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidAuthCause {
    /// The scheme name is not one we know.
    UnknownTokenType(String),

    /// The hashing cost is missing (empty string) or not an unsigned integer.
    InvalidCostFormat(String),

    /// The hashing cost is below the primitive's minimum.
    CostBelowMinimum {
        /// Requested cost.
        cost: u32,
        /// Smallest cost the primitive accepts.
        min: u32,
    },

    /// The hashing cost is above the primitive's maximum.
    CostAboveMaximum {
        /// Requested cost.
        cost: u32,
        /// Largest cost the primitive accepts.
        max: u32,
    },

    /// A parameter the scheme does not take.
    UnexpectedParameter(String),

    /// The token spec and the node configuration name different costs.
    ConflictingCost {
        /// Cost written in the token spec.
        spec: u32,
        /// Cost from the node configuration.
        config: u32,
    },
}

impl fmt::Display for InvalidAuthCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidAuthCause::UnknownTokenType(name) => {
                write!(f, "unknown token type {name:?}")
            }
            InvalidAuthCause::InvalidCostFormat(raw) if raw.is_empty() => {
                write!(f, "invalid cost format: missing cost")
            }
            InvalidAuthCause::InvalidCostFormat(raw) => {
                write!(f, "invalid cost format {raw:?}")
            }
            InvalidAuthCause::CostBelowMinimum { cost, min } => {
                write!(f, "cost {cost} is below the minimum of {min}")
            }
            InvalidAuthCause::CostAboveMaximum { cost, max } => {
                write!(f, "cost {cost} is above the maximum of {max}")
            }
            InvalidAuthCause::UnexpectedParameter(param) => {
                write!(f, "unexpected parameter {param:?}")
            }
            InvalidAuthCause::ConflictingCost { spec, config } => {
                write!(f, "token spec cost {spec} conflicts with configured cost {config}")
            }
        }
    }
}

/// Result type for authentication options checks.
pub type AuthResult<T> = Result<T, AuthError>;
