// crates/domain/src/indices.rs
use std::iter::FusedIterator;

use num_traits::PrimInt;
use range_fold_shared_kernel::{Direction, IntRange};

/// Indices of an [`IntRange`] in traversal order, `end` excluded.
///
/// The cursor only moves while it differs from `end`, one unit toward it,
/// so it never leaves the closed interval between the bounds.
#[derive(Debug, Clone)]
pub struct Indices<I> {
    next: I,
    end: I,
    direction: Direction,
}

impl<I: PrimInt> Indices<I> {
    #[inline]
    pub fn new(range: IntRange<I>) -> Self {
        Self { next: range.start(), end: range.end(), direction: range.direction() }
    }

    #[inline]
    fn remaining(&self) -> IntRange<I> {
        IntRange::new(self.next, self.end)
    }
}

impl<I: PrimInt> Iterator for Indices<I> {
    type Item = I;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.next == self.end {
            return None;
        }
        let current = self.next;
        self.next = if self.direction.is_descending() {
            current - I::one()
        } else {
            current + I::one()
        };
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining().step_count().to_usize() {
            Some(n) => (n, Some(n)),
            None => (usize::MAX, None),
        }
    }
}

impl<I: PrimInt> FusedIterator for Indices<I> {}
