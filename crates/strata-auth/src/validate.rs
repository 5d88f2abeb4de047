//! Authentication options validation gate.
//!
//! A node runs this once per startup attempt, before it creates any
//! directory, storage handle or listener. The outcome is final for that
//! attempt: [`ValidatedAuth`] on success, [`AuthError::InvalidAuthOpts`]
//! otherwise. Nothing is clamped, defaulted or retried.

use crate::error::{AuthResult, InvalidAuthCause};
use crate::hash::{CostBounds, HashCostBounds};
use crate::token::{AuthTokenSpec, TokenScheme};

/// Check a parsed token spec against the hashing primitive's bounds.
///
/// Simple tokens always pass. Hash-based tokens pass when their cost lies
/// in `[min_cost, max_cost]`.
pub fn validate(spec: &AuthTokenSpec, bounds: HashCostBounds) -> AuthResult<()> {
    match spec.scheme() {
        TokenScheme::Simple => Ok(()),
        TokenScheme::HashBased => {
            let cost = spec
                .hash_cost()
                .ok_or_else(|| InvalidAuthCause::InvalidCostFormat(String::new()))?;

            if cost > bounds.max_cost() {
                return Err(InvalidAuthCause::CostAboveMaximum {
                    cost,
                    max: bounds.max_cost(),
                }
                .into());
            }
            if cost < bounds.min_cost() {
                return Err(InvalidAuthCause::CostBelowMinimum {
                    cost,
                    min: bounds.min_cost(),
                }
                .into());
            }
            Ok(())
        }
    }
}

/// [`validate`] against whatever bounds `primitive` reports.
pub fn validate_with(spec: &AuthTokenSpec, primitive: &impl CostBounds) -> AuthResult<()> {
    validate(spec, primitive.cost_bounds())
}

/// Token options that have passed the gate.
///
/// Only [`check_auth_options`] builds one, so holding a `ValidatedAuth`
/// means the check ran and succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedAuth {
    spec: AuthTokenSpec,
    bounds: HashCostBounds,
}

impl ValidatedAuth {
    /// The accepted token spec.
    pub fn spec(&self) -> &AuthTokenSpec {
        &self.spec
    }

    /// The bounds the spec was checked against.
    pub fn bounds(&self) -> HashCostBounds {
        self.bounds
    }
}

/// Parse and validate raw token options in one step.
///
/// `default_cost` is the node configuration's hashing cost, used when a
/// hash-based spec does not carry its own.
pub fn check_auth_options(
    raw: &str,
    default_cost: Option<u32>,
    primitive: &impl CostBounds,
) -> AuthResult<ValidatedAuth> {
    let spec = AuthTokenSpec::parse_with_default_cost(raw, default_cost)?;
    let bounds = primitive.cost_bounds();
    validate(&spec, bounds)?;
    Ok(ValidatedAuth { spec, bounds })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AuthError;
    use crate::hash::Bcrypt;
    use proptest::prelude::*;

    /// Stand-in primitive with narrow limits.
    struct MockHasher {
        min: u32,
        max: u32,
    }

    impl CostBounds for MockHasher {
        fn cost_bounds(&self) -> HashCostBounds {
            HashCostBounds::new(self.min, self.max)
        }
    }

    const BOUNDS: HashCostBounds = HashCostBounds::new(6, 12);

    #[test]
    fn test_simple_always_passes() {
        assert!(validate(&AuthTokenSpec::simple(), BOUNDS).is_ok());
        assert!(validate(&AuthTokenSpec::simple(), HashCostBounds::new(0, 0)).is_ok());
    }

    #[test]
    fn test_boundaries_are_inclusive() {
        assert!(validate(&AuthTokenSpec::hash_based(6), BOUNDS).is_ok());
        assert!(validate(&AuthTokenSpec::hash_based(12), BOUNDS).is_ok());
        assert!(validate(&AuthTokenSpec::hash_based(9), BOUNDS).is_ok());
    }

    #[test]
    fn test_cost_above_maximum() {
        let err = validate(&AuthTokenSpec::hash_based(13), BOUNDS).unwrap_err();
        assert!(err.is_invalid_auth_opts());
        assert_eq!(
            err.cause(),
            &InvalidAuthCause::CostAboveMaximum { cost: 13, max: 12 }
        );
    }

    #[test]
    fn test_cost_below_minimum() {
        let err = validate(&AuthTokenSpec::hash_based(5), BOUNDS).unwrap_err();
        assert!(err.is_invalid_auth_opts());
        assert_eq!(
            err.cause(),
            &InvalidAuthCause::CostBelowMinimum { cost: 5, min: 6 }
        );
    }

    #[test]
    fn test_validate_with_mock_primitive() {
        let hasher = MockHasher { min: 2, max: 3 };
        assert!(validate_with(&AuthTokenSpec::hash_based(3), &hasher).is_ok());
        assert!(validate_with(&AuthTokenSpec::hash_based(4), &hasher).is_err());
    }

    #[test]
    fn test_check_auth_options_bcrypt() {
        let auth = check_auth_options("bcrypt,cost=10", None, &Bcrypt).unwrap();
        assert_eq!(auth.spec(), &AuthTokenSpec::hash_based(10));
        assert_eq!(auth.bounds(), Bcrypt::BOUNDS);

        let over = format!("bcrypt:{}", Bcrypt::MAX_COST + 1);
        assert!(check_auth_options(&over, None, &Bcrypt)
            .unwrap_err()
            .is_invalid_auth_opts());

        let under = format!("bcrypt:{}", Bcrypt::MIN_COST - 1);
        assert!(check_auth_options(&under, None, &Bcrypt)
            .unwrap_err()
            .is_invalid_auth_opts());
    }

    #[test]
    fn test_check_auth_options_uses_configured_cost() {
        let auth = check_auth_options("bcrypt", Some(Bcrypt::DEFAULT_COST), &Bcrypt).unwrap();
        assert_eq!(auth.spec().hash_cost(), Some(Bcrypt::DEFAULT_COST));

        let err = check_auth_options("bcrypt", Some(Bcrypt::MAX_COST + 1), &Bcrypt).unwrap_err();
        assert!(matches!(
            err,
            AuthError::InvalidAuthOpts {
                cause: InvalidAuthCause::CostAboveMaximum { .. }
            }
        ));
    }

    #[test]
    fn test_check_auth_options_unknown_scheme() {
        let err = check_auth_options("wrong-token", None, &Bcrypt).unwrap_err();
        assert_eq!(
            err,
            AuthError::from(InvalidAuthCause::UnknownTokenType("wrong-token".into()))
        );
    }

    #[test]
    fn test_concurrent_checks() {
        let handles: Vec<_> = (0..8u32)
            .map(|i| {
                std::thread::spawn(move || {
                    check_auth_options(&format!("bcrypt:{}", i * 5), None, &Bcrypt).is_ok()
                })
            })
            .collect();

        let results: Vec<bool> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(
            results,
            vec![false, true, true, true, true, true, true, false]
        );
    }

    fn bounds_strategy() -> impl Strategy<Value = HashCostBounds> {
        (1u32..64, 0u32..64).prop_map(|(min, span)| HashCostBounds::new(min, min + span))
    }

    proptest! {
        #[test]
        fn prop_unknown_scheme_rejected(name in "[a-z][a-z0-9-]{0,15}") {
            prop_assume!(name != "simple" && name != "bcrypt");
            let err = check_auth_options(&name, Some(10), &Bcrypt).unwrap_err();
            prop_assert!(err.is_invalid_auth_opts());
        }

        #[test]
        fn prop_cost_above_max_rejected(bounds in bounds_strategy(), extra in 1u32..1000) {
            let spec = AuthTokenSpec::hash_based(bounds.max_cost() + extra);
            prop_assert!(validate(&spec, bounds).unwrap_err().is_invalid_auth_opts());
        }

        #[test]
        fn prop_cost_below_min_rejected(bounds in bounds_strategy(), below in 1u32..64) {
            let cost = bounds.min_cost().saturating_sub(below);
            prop_assume!(cost < bounds.min_cost());
            let spec = AuthTokenSpec::hash_based(cost);
            prop_assert!(validate(&spec, bounds).unwrap_err().is_invalid_auth_opts());
        }

        #[test]
        fn prop_cost_within_bounds_accepted(bounds in bounds_strategy(), offset in 0u32..64) {
            let span = bounds.max_cost() - bounds.min_cost();
            let cost = bounds.min_cost() + offset % (span + 1);
            prop_assert!(validate(&AuthTokenSpec::hash_based(cost), bounds).is_ok());
        }

        #[test]
        fn prop_simple_ignores_cost(bounds in bounds_strategy(), cost in any::<u32>()) {
            let auth = check_auth_options("simple", Some(cost), &bounds);
            prop_assert!(auth.is_ok());
            prop_assert_eq!(auth.unwrap().spec().hash_cost(), None);
        }
    }
}
