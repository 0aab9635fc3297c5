// crates/shared-kernel/src/value_objects/int_range.rs
use std::fmt;
use std::str::FromStr;

use num_traits::PrimInt;
use serde::{Deserialize, Serialize};

use super::{Direction, StepCount};
use crate::error::RangeFoldError;

/// End-exclusive integer range whose direction follows its bounds.
///
/// `start <= end` covers `[start, end)` ascending; `start > end` covers
/// `(end, start]` descending. Equal bounds are empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IntRange<I> {
    start: I,
    end: I,
}

impl<I> IntRange<I> {
    #[inline]
    pub const fn new(start: I, end: I) -> Self {
        Self { start, end }
    }
}

impl<I: Copy> IntRange<I> {
    #[inline]
    pub const fn start(&self) -> I {
        self.start
    }

    #[inline]
    pub const fn end(&self) -> I {
        self.end
    }
}

impl<I: PrimInt> IntRange<I> {
    #[inline]
    pub fn direction(&self) -> Direction {
        Direction::between(&self.start, &self.end)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// `|end - start|`, computed without overflow for every primitive integer.
    pub fn step_count(&self) -> StepCount {
        StepCount::new(distance(self.start, self.end))
    }

    /// Range visiting the same indices in the opposite order.
    ///
    /// Returns `None` when the new exclusive bound falls outside `I`,
    /// e.g. reversing `0u8..3`.
    pub fn reversed(&self) -> Option<Self> {
        if self.is_empty() {
            return Some(*self);
        }
        let one = I::one();
        match self.direction() {
            Direction::Ascending => {
                Some(Self::new(self.end.checked_sub(&one)?, self.start.checked_sub(&one)?))
            }
            Direction::Descending => {
                Some(Self::new(self.end.checked_add(&one)?, self.start.checked_add(&one)?))
            }
        }
    }
}

fn distance<I: PrimInt>(a: I, b: I) -> u128 {
    // Signed primitives always fit in i128; unsigned ones always fit in u128.
    if let (Some(a), Some(b)) = (a.to_i128(), b.to_i128()) {
        return a.abs_diff(b);
    }
    match (a.to_u128(), b.to_u128()) {
        (Some(a), Some(b)) => a.abs_diff(b),
        _ => unreachable!("primitive integers are representable as i128 or u128"),
    }
}

impl<I> From<std::ops::Range<I>> for IntRange<I> {
    fn from(range: std::ops::Range<I>) -> Self {
        Self::new(range.start, range.end)
    }
}

impl<I: fmt::Display> fmt::Display for IntRange<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl<I> FromStr for IntRange<I>
where
    I: FromStr,
    I::Err: fmt::Display,
{
    type Err = RangeFoldError;

    /// Parses `"<start>..<end>"`, e.g. `"5..0"` or `" -2 .. 2 "`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end) = s
            .split_once("..")
            .ok_or_else(|| RangeFoldError::invalid_bound("range", s, "expected '<start>..<end>'"))?;
        Ok(Self::new(parse_bound("start", start)?, parse_bound("end", end)?))
    }
}

fn parse_bound<I>(bound: &'static str, raw: &str) -> Result<I, RangeFoldError>
where
    I: FromStr,
    I::Err: fmt::Display,
{
    let trimmed = raw.trim();
    trimmed
        .parse()
        .map_err(|e: I::Err| RangeFoldError::invalid_bound(bound, trimmed, e.to_string()))
}
