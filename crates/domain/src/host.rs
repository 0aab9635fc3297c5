// crates/domain/src/host.rs
//! Bounds arriving from hosts whose numbers are IEEE doubles.

use range_fold_shared_kernel::{IntRange, RangeFoldError, Result};

use crate::fold::{FoldIndex, RangeFold};

/// Converts a pair of doubles into an integer range of `I`.
///
/// # Errors
///
/// [`RangeFoldError::InvalidBound`] for NaN, infinities and fractional values;
/// [`RangeFoldError::OutOfRange`] when a bound does not fit in `I`.
pub fn bounds_from_f64<I: FoldIndex>(start: f64, end: f64) -> Result<IntRange<I>> {
    Ok(IntRange::new(bound_from_f64("start", start)?, bound_from_f64("end", end)?))
}

/// [`crate::fold`] over double-valued bounds.
///
/// # Errors
///
/// Same as [`bounds_from_f64`]; `combine` is not called when a bound is rejected.
pub fn fold_f64<I, T, F>(combine: F, initial: T, start: f64, end: f64) -> Result<T>
where
    I: FoldIndex,
    F: FnMut(I, T) -> T,
{
    Ok(bounds_from_f64::<I>(start, end)?.foldl(initial, combine))
}

fn bound_from_f64<I: FoldIndex>(bound: &'static str, value: f64) -> Result<I> {
    let reason = if !value.is_finite() {
        "not a finite number"
    } else if value.fract() != 0.0 {
        "not an integer"
    } else {
        return <I as num_traits::NumCast>::from(value).ok_or_else(|| {
            log::debug!("{bound} bound {value} does not fit in {}", std::any::type_name::<I>());
            RangeFoldError::OutOfRange {
                value: value.to_string(),
                target: std::any::type_name::<I>(),
            }
        });
    };
    log::debug!("rejecting {bound} bound {value}: {reason}");
    Err(RangeFoldError::InvalidBound {
        bound,
        value: value.to_string(),
        reason: reason.to_string(),
    })
}
