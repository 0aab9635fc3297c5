//! Directional left fold over half-open integer ranges.
//!
//! `fold(combine, initial, start, end)` calls `combine(i, acc)` once for every
//! `i` from `start` toward `end`, excluding `end`. The range descends when
//! `end < start` and is empty when the bounds are equal.
//!
//! ```
//! use range_fold::fold;
//!
//! let reversed = fold(
//!     |i, mut acc: Vec<i32>| {
//!         acc.insert(0, i);
//!         acc
//!     },
//!     Vec::new(),
//!     0,
//!     3,
//! );
//! assert_eq!(reversed, [2, 1, 0]);
//! ```
#![allow(clippy::multiple_crate_versions)]

pub use range_fold_domain::{
    FoldConfig, FoldIndex, Indices, RangeFold, fold, fold_with, host, try_fold, try_fold_with,
};
pub use range_fold_shared_kernel::{
    Direction, ErrorContext, IntRange, RangeFoldError, Result, StepCount,
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
