//! Strata Auth - authentication options gate for Strata nodes.
//!
//! A node must not touch its data directory, storage engine or listeners
//! until its authentication token options have been checked. This crate
//! holds that check:
//! - [`AuthTokenSpec`] - the parsed `--auth-token` value
//! - [`CostBounds`] / [`HashCostBounds`] - cost limits of the password hash
//! - [`validate`] / [`check_auth_options`] - the validation gate
//! - [`AuthError`] - the single `InvalidAuthOpts` failure kind
//!
//! Everything here is pure: no I/O, no logging, no shared state.
//!
//! # Usage
//!
//! ```
//! use strata_auth::{check_auth_options, Bcrypt, TokenScheme};
//!
//! let auth = check_auth_options("bcrypt,cost=12", None, &Bcrypt).unwrap();
//! assert_eq!(auth.spec().scheme(), TokenScheme::HashBased);
//!
//! let err = check_auth_options("wrong-token", None, &Bcrypt).unwrap_err();
//! assert!(err.is_invalid_auth_opts());
//! ```

pub mod error;
pub mod hash;
pub mod token;
pub mod validate;

pub use error::{AuthError, AuthResult, InvalidAuthCause};
pub use hash::{Bcrypt, CostBounds, HashCostBounds};
pub use token::{AuthTokenSpec, TokenScheme};
pub use validate::{check_auth_options, validate, validate_with, ValidatedAuth};
