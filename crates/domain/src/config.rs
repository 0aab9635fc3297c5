// crates/domain/src/config.rs
use num_traits::PrimInt;
use range_fold_shared_kernel::{IntRange, RangeFoldError, Result, StepCount};
use serde::{Deserialize, Serialize};

/// Options for [`crate::fold_with`] and [`crate::try_fold_with`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FoldConfig {
    /// Largest number of `combine` calls a single fold may make.
    pub step_limit: Option<u64>,
}

impl FoldConfig {
    #[must_use]
    pub const fn with_step_limit(mut self, limit: u64) -> Self {
        self.step_limit = Some(limit);
        self
    }

    /// # Errors
    ///
    /// Returns [`RangeFoldError::Config`] when the document is not a valid config.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// # Errors
    ///
    /// Returns [`RangeFoldError::Config`] when the document is not a valid config.
    #[cfg(feature = "yaml")]
    pub fn from_yaml_str(raw: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(raw)?)
    }

    /// Checks `range` against the step budget before any work is done.
    ///
    /// # Errors
    ///
    /// Returns [`RangeFoldError::StepLimitExceeded`] when the range is longer
    /// than `step_limit`.
    pub fn admit<I: PrimInt + std::fmt::Display>(&self, range: &IntRange<I>) -> Result<StepCount> {
        let steps = range.step_count();
        match self.step_limit {
            Some(limit) if steps.exceeds(limit) => {
                log::debug!("rejecting fold over {range}: {steps} steps, limit {limit}");
                Err(RangeFoldError::StepLimitExceeded { steps: steps.value(), limit })
            }
            _ => Ok(steps),
        }
    }
}
