// crates/shared-kernel/src/value_objects/step_count.rs
use std::ops::Add;

use serde::{Deserialize, Serialize};

/// Number of indices a range visits.
///
/// Stored as `u128` so the distance between any two primitive integers is exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StepCount(u128);

impl StepCount {
    pub const ZERO: Self = Self(0);

    #[inline]
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::ZERO
    }

    #[inline]
    pub const fn value(self) -> u128 {
        self.0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// `None` when the count does not fit in `usize` on this target.
    #[inline]
    pub fn to_usize(self) -> Option<usize> {
        usize::try_from(self.0).ok()
    }

    #[inline]
    pub fn exceeds(self, limit: u64) -> bool {
        self.0 > u128::from(limit)
    }
}

impl Default for StepCount {
    fn default() -> Self {
        Self::zero()
    }
}

impl Add for StepCount {
    type Output = Self;

    /// Saturates at `u128::MAX`.
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl num_traits::Zero for StepCount {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl From<u128> for StepCount {
    fn from(value: u128) -> Self {
        Self::new(value)
    }
}

impl From<StepCount> for u128 {
    fn from(value: StepCount) -> Self {
        value.0
    }
}

mod display {
    use std::fmt;

    use super::StepCount;

    impl fmt::Display for StepCount {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.value())
        }
    }
}
