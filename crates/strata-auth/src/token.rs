//! Authentication token specification parsing.
//!
//! # Format
//!
//! ```text
//! simple
//! bcrypt:12
//! bcrypt,12
//! bcrypt,cost=12
//! bcrypt:cost=12
//! ```
//!
//! The scheme is separated from its parameters by `:` or `,`, and parameters
//! from each other by `,`. Parameters a scheme does not take are rejected
//! rather than ignored.

use std::fmt;
use std::str::FromStr;

use crate::error::{AuthError, AuthResult, InvalidAuthCause};

/// Scheme name for unsigned simple tokens.
pub const SIMPLE_SCHEME: &str = "simple";

/// Scheme name for bcrypt-hashed credentials.
pub const BCRYPT_SCHEME: &str = "bcrypt";

/// Key of the cost parameter in the keyed form.
const COST_KEY: &str = "cost";

/// How client session tokens are issued and checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenScheme {
    /// Unsigned simple tokens. Takes no parameters.
    Simple,
    /// Password credentials hashed with a tunable cost.
    HashBased,
}

impl TokenScheme {
    /// The name used for this scheme in token specs.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenScheme::Simple => SIMPLE_SCHEME,
            TokenScheme::HashBased => BCRYPT_SCHEME,
        }
    }
}

impl fmt::Display for TokenScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed authentication token specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AuthTokenSpec {
    scheme: TokenScheme,
    hash_cost: Option<u32>,
}

impl AuthTokenSpec {
    /// A simple-token spec.
    pub fn simple() -> Self {
        Self {
            scheme: TokenScheme::Simple,
            hash_cost: None,
        }
    }

    /// A hash-based spec with the given cost. The cost is not range checked here.
    pub fn hash_based(cost: u32) -> Self {
        Self {
            scheme: TokenScheme::HashBased,
            hash_cost: Some(cost),
        }
    }

    /// Parse a raw token spec. A hash-based spec must carry its own cost.
    pub fn parse(raw: &str) -> AuthResult<Self> {
        Self::parse_with_default_cost(raw, None)
    }

    /// Parse a raw token spec, taking the cost from `default_cost` when a
    /// hash-based spec does not name one.
    ///
    /// If both name a cost they must agree.
    pub fn parse_with_default_cost(raw: &str, default_cost: Option<u32>) -> AuthResult<Self> {
        let raw = raw.trim();
        let (name, params) = match raw.find(|c: char| c == ':' || c == ',') {
            Some(pos) => (raw[..pos].trim(), Some(&raw[pos + 1..])),
            None => (raw, None),
        };

        match name {
            SIMPLE_SCHEME => match params {
                Some(params) => Err(unexpected(params)),
                None => Ok(Self::simple()),
            },
            BCRYPT_SCHEME => {
                let spec_cost = match params {
                    Some(params) => Some(parse_cost_params(params)?),
                    None => None,
                };
                let cost = match (spec_cost, default_cost) {
                    (Some(spec), Some(config)) if spec != config => {
                        return Err(InvalidAuthCause::ConflictingCost { spec, config }.into());
                    }
                    (Some(cost), _) | (None, Some(cost)) => cost,
                    (None, None) => {
                        return Err(InvalidAuthCause::InvalidCostFormat(String::new()).into());
                    }
                };
                Ok(Self::hash_based(cost))
            }
            other => Err(InvalidAuthCause::UnknownTokenType(other.to_string()).into()),
        }
    }

    /// The token scheme.
    pub fn scheme(&self) -> TokenScheme {
        self.scheme
    }

    /// The hashing cost. Always `None` for simple tokens.
    pub fn hash_cost(&self) -> Option<u32> {
        self.hash_cost
    }
}

impl Default for AuthTokenSpec {
    fn default() -> Self {
        Self::simple()
    }
}

impl FromStr for AuthTokenSpec {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for AuthTokenSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.scheme, self.hash_cost) {
            (TokenScheme::HashBased, Some(cost)) => {
                write!(f, "{},{}={}", self.scheme, COST_KEY, cost)
            }
            (scheme, _) => write!(f, "{}", scheme),
        }
    }
}

/// Parse the parameter list of a hash-based spec down to exactly one cost.
fn parse_cost_params(params: &str) -> AuthResult<u32> {
    let mut cost = None;

    for param in params.split(',') {
        let param = param.trim();
        let value = match param.split_once('=') {
            Some((key, value)) if key.trim() == COST_KEY => value.trim(),
            Some(_) => return Err(unexpected(param)),
            None => param,
        };

        if cost.is_some() {
            return Err(unexpected(param));
        }
        cost = Some(parse_cost(value)?);
    }

    cost.ok_or_else(|| InvalidAuthCause::InvalidCostFormat(String::new()).into())
}

/// Digits only; `u32::from_str` would also take a leading `+`.
fn parse_cost(value: &str) -> AuthResult<u32> {
    let invalid = || AuthError::from(InvalidAuthCause::InvalidCostFormat(value.to_string()));

    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    value.parse::<u32>().map_err(|_| invalid())
}

fn unexpected(param: &str) -> AuthError {
    InvalidAuthCause::UnexpectedParameter(param.to_string()).into()
}
