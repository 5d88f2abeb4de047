//! Cost limits of the password-hashing primitive.
//!
//! The gate never hashes anything itself. It only needs to know which work
//! factors the chosen primitive accepts, so that an out-of-range cost is
//! refused at startup instead of on the first login.

/// Inclusive range of hashing costs a primitive accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HashCostBounds {
    min_cost: u32,
    max_cost: u32,
}

impl HashCostBounds {
    /// Create bounds from the primitive's constants.
    ///
    /// # Panics
    ///
    /// Panics if `min_cost > max_cost`.
    pub const fn new(min_cost: u32, max_cost: u32) -> Self {
        assert!(min_cost <= max_cost, "hash cost bounds are inverted");
        Self { min_cost, max_cost }
    }

    /// Smallest accepted cost.
    pub const fn min_cost(&self) -> u32 {
        self.min_cost
    }

    /// Largest accepted cost.
    pub const fn max_cost(&self) -> u32 {
        self.max_cost
    }

    /// Check whether `cost` lies within the bounds, both ends included.
    pub const fn contains(&self, cost: u32) -> bool {
        cost >= self.min_cost && cost <= self.max_cost
    }
}

/// A hashing primitive that can report its cost limits.
pub trait CostBounds {
    /// The primitive's accepted cost range.
    fn cost_bounds(&self) -> HashCostBounds;
}

impl CostBounds for HashCostBounds {
    fn cost_bounds(&self) -> HashCostBounds {
        *self
    }
}

impl<T: CostBounds + ?Sized> CostBounds for &T {
    fn cost_bounds(&self) -> HashCostBounds {
        (**self).cost_bounds()
    }
}

/// bcrypt, the hash-based token scheme's primitive.
#[derive(Debug, Clone, Copy, Default)]
pub struct Bcrypt;

impl Bcrypt {
    /// Minimum cost accepted by bcrypt.
    pub const MIN_COST: u32 = 4;

    /// Maximum cost accepted by bcrypt.
    pub const MAX_COST: u32 = 31;

    /// Cost used when an operator asks for bcrypt without choosing one.
    pub const DEFAULT_COST: u32 = 10;

    /// bcrypt's bounds as a constant.
    pub const BOUNDS: HashCostBounds = HashCostBounds::new(Self::MIN_COST, Self::MAX_COST);
}

impl CostBounds for Bcrypt {
    fn cost_bounds(&self) -> HashCostBounds {
        Self::BOUNDS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bcrypt_bounds() {
        let bounds = Bcrypt.cost_bounds();
        assert_eq!(bounds.min_cost(), 4);
        assert_eq!(bounds.max_cost(), 31);
        assert!(bounds.contains(Bcrypt::DEFAULT_COST));
    }

    #[test]
    fn test_contains_is_inclusive() {
        let bounds = HashCostBounds::new(5, 9);
        assert!(!bounds.contains(4));
        assert!(bounds.contains(5));
        assert!(bounds.contains(9));
        assert!(!bounds.contains(10));
    }

    #[test]
    fn test_single_value_bounds() {
        let bounds = HashCostBounds::new(7, 7);
        assert!(bounds.contains(7));
        assert!(!bounds.contains(6));
        assert!(!bounds.contains(8));
    }

    #[test]
    #[should_panic(expected = "inverted")]
    fn test_inverted_bounds_panic() {
        let _ = HashCostBounds::new(10, 4);
    }

    #[test]
    fn test_reference_forwards_bounds() {
        fn bounds_of(primitive: impl CostBounds) -> HashCostBounds {
            primitive.cost_bounds()
        }

        let bounds = HashCostBounds::new(1, 2);
        assert_eq!(bounds_of(&bounds), bounds);
        assert_eq!(bounds_of(&Bcrypt), Bcrypt::BOUNDS);
    }
}
