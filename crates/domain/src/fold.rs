// crates/domain/src/fold.rs
use std::fmt;

use num_traits::PrimInt;
use range_fold_shared_kernel::{IntRange, RangeFoldError, Result};

use crate::config::FoldConfig;
use crate::indices::Indices;

/// Integer types a range can be folded over.
pub trait FoldIndex: PrimInt + fmt::Display + fmt::Debug {}

impl<I> FoldIndex for I where I: PrimInt + fmt::Display + fmt::Debug {}

/// Left fold over the indices of a directional range.
///
/// `combine` receives each index and the running accumulator, exactly once per
/// index, strictly in traversal order. `end` is never visited.
pub trait RangeFold<I: FoldIndex> {
    fn indices(&self) -> Indices<I>;

    fn foldl<T, F>(&self, initial: T, combine: F) -> T
    where
        F: FnMut(I, T) -> T;

    /// Stops at the first error from `combine` and returns it unchanged.
    ///
    /// # Errors
    ///
    /// Whatever `combine` returns.
    fn try_foldl<T, E, F>(&self, initial: T, combine: F) -> std::result::Result<T, E>
    where
        F: FnMut(I, T) -> std::result::Result<T, E>;
}

impl<I: FoldIndex> RangeFold<I> for IntRange<I> {
    #[inline]
    fn indices(&self) -> Indices<I> {
        Indices::new(*self)
    }

    fn foldl<T, F>(&self, initial: T, mut combine: F) -> T
    where
        F: FnMut(I, T) -> T,
    {
        trace_entry(self);
        self.indices().fold(initial, |acc, i| combine(i, acc))
    }

    fn try_foldl<T, E, F>(&self, initial: T, mut combine: F) -> std::result::Result<T, E>
    where
        F: FnMut(I, T) -> std::result::Result<T, E>,
    {
        trace_entry(self);
        self.indices().try_fold(initial, |acc, i| combine(i, acc))
    }
}

fn trace_entry<I: FoldIndex>(range: &IntRange<I>) {
    log::trace!("folding {range}: {} steps {}", range.step_count(), range.direction());
}

/// Folds `combine` over `start..end`, descending when `end < start`.
///
/// ```
/// use range_fold_domain::fold;
///
/// assert_eq!(fold(|i, acc| acc + i, 0, 0, 5), 10);
/// assert_eq!(fold(|i, acc| acc + i, 0, 5, 0), 15);
/// assert_eq!(fold(|i, acc| acc + i, 100, 3, 3), 100);
/// ```
pub fn fold<I, T, F>(combine: F, initial: T, start: I, end: I) -> T
where
    I: FoldIndex,
    F: FnMut(I, T) -> T,
{
    IntRange::new(start, end).foldl(initial, combine)
}

/// Like [`fold`], for a `combine` that can fail.
///
/// # Errors
///
/// The first error `combine` returns, untouched. No partial accumulator is kept.
pub fn try_fold<I, T, E, F>(combine: F, initial: T, start: I, end: I) -> std::result::Result<T, E>
where
    I: FoldIndex,
    F: FnMut(I, T) -> std::result::Result<T, E>,
{
    IntRange::new(start, end).try_foldl(initial, combine)
}

/// [`fold`] gated by a [`FoldConfig`].
///
/// # Errors
///
/// Returns [`RangeFoldError::StepLimitExceeded`] before calling `combine` when
/// the range is longer than the configured limit.
pub fn fold_with<I, T, F>(
    config: &FoldConfig,
    combine: F,
    initial: T,
    start: I,
    end: I,
) -> Result<T>
where
    I: FoldIndex,
    F: FnMut(I, T) -> T,
{
    let range = IntRange::new(start, end);
    config.admit(&range)?;
    Ok(range.foldl(initial, combine))
}

/// [`try_fold`] gated by a [`FoldConfig`].
///
/// # Errors
///
/// A rejected budget converted into `E`, or the first error from `combine`.
pub fn try_fold_with<I, T, E, F>(
    config: &FoldConfig,
    combine: F,
    initial: T,
    start: I,
    end: I,
) -> std::result::Result<T, E>
where
    I: FoldIndex,
    E: From<RangeFoldError>,
    F: FnMut(I, T) -> std::result::Result<T, E>,
{
    let range = IntRange::new(start, end);
    config.admit(&range)?;
    range.try_foldl(initial, combine)
}
