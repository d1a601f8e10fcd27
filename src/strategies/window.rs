//! Two-pointer sliding window for non-negative sequences.
//!
//! The window `[left, right)` carries a running sum that always equals the
//! sum of the elements it covers. Each step includes `sequence[right]`, then
//! excludes elements from the left while the running sum exceeds the target.
//! Because no element is negative, the surviving `left` is the smallest start
//! whose run ending at `right` does not overshoot, so whenever the running sum
//! equals the target the window is the longest match ending there.
//!
//! Recording only strictly longer windows keeps the earliest of several
//! equal-length matches, since `right` only moves forward.
//!
//! Negative elements break the monotonicity this relies on; [`Windowed`]
//! rejects them with [`WindowError::NegativeElement`] instead of returning a
//! silently wrong span.

use crate::error::WindowError;
use crate::span::Span;
use crate::traits::SubarrayStrategy;
use crate::utils::require_non_negative;

/// Sliding-window strategy; non-negative sequences only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Windowed;

impl SubarrayStrategy for Windowed {
    fn name(&self) -> &'static str {
        "windowed"
    }

    fn check(&self, sequence: &[i64]) -> Result<(), WindowError> {
        require_non_negative(sequence)
    }

    fn scan(&self, sequence: &[i64], target: i64) -> Span {
        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("window_scan", len = sequence.len(), target);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let target = i128::from(target);
        let mut left = 0usize;
        let mut running: i128 = 0;
        let mut best = Span::EMPTY;

        for (right, &value) in sequence.iter().enumerate() {
            running += i128::from(value);
            while left <= right && running > target {
                running -= i128::from(sequence[left]);
                left += 1;
            }
            if running == target {
                let candidate = Span::new(left, right + 1);
                if candidate.len() > best.len() {
                    best = candidate;
                }
            }
        }

        best
    }
}

/// Longest run of a non-negative `sequence` summing to `target`.
///
/// Returns [`Span::EMPTY`] when no non-empty run matches, and
/// [`WindowError::NegativeElement`] for the first negative element found.
/// Use [`longest_prefix_sum`](crate::strategies::prefix_sum::longest_prefix_sum)
/// for signed input.
pub fn longest_window(sequence: &[i64], target: i64) -> Result<Span, WindowError> {
    Windowed.longest(sequence, target)
}
