//! Half-open index ranges over a sequence.
//!
//! A `Span` is the result type of every search in this crate: the best
//! window found, or [`Span::EMPTY`] when nothing qualifies.

use std::ops::Range;

/// Contiguous run `[start, end)` over a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    /// Inclusive start index.
    pub start: usize,
    /// Exclusive end index; the span covers `start..end`.
    pub end: usize,
}

impl Span {
    /// The "no match" result.
    pub const EMPTY: Span = Span { start: 0, end: 0 };

    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start {start} past end {end}");
        Self { start, end }
    }

    /// Number of elements covered.
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span covers no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `self` should replace `best` under the longest-then-earliest order.
    #[inline]
    pub fn beats(&self, best: &Span) -> bool {
        self.len() > best.len() || (self.len() == best.len() && self.start < best.start)
    }

    /// Borrow the covered elements out of `sequence`.
    ///
    /// An empty span yields an empty slice regardless of its indices.
    pub fn slice<'a, T>(&self, sequence: &'a [T]) -> &'a [T] {
        if self.is_empty() {
            &[]
        } else {
            &sequence[self.start..self.end]
        }
    }

    pub fn as_range(&self) -> Range<usize> {
        self.start..self.end
    }
}
