//! Core trait for longest-target-subarray strategies.
//!
//! A strategy answers one question: which contiguous run of a sequence sums
//! exactly to a target and is longest, preferring the earliest start among
//! equal lengths? Strategies differ in which sequences they accept:
//! - [`Windowed`](crate::strategies::window::Windowed) requires every element
//!   to be non-negative, since it relies on window sums growing monotonically
//!   to the right and shrinking monotonically from the left.
//! - [`PrefixSum`](crate::strategies::prefix_sum::PrefixSum) accepts any
//!   signed sequence at the cost of an O(n) hash map.
//!
//! [`TargetEngine`](crate::TargetEngine) checks a sequence once with
//! [`check`](SubarrayStrategy::check) and then issues any number of
//! [`scan`](SubarrayStrategy::scan) calls against it.

use crate::error::WindowError;
use crate::span::Span;

/// A stateless longest-target-subarray search.
///
/// Implementations must be pure: the same `(sequence, target)` always yields
/// the same span, and no state survives between calls.
pub trait SubarrayStrategy {
    /// Short identifier used in logs and probe output.
    fn name(&self) -> &'static str;

    /// Verify that `sequence` satisfies this strategy's precondition.
    ///
    /// The default accepts every sequence.
    fn check(&self, _sequence: &[i64]) -> Result<(), WindowError> {
        Ok(())
    }

    /// Find the longest run of `sequence` summing to `target`.
    ///
    /// Requirements:
    /// - `check(sequence)` has returned `Ok` for this sequence.
    /// - Returns [`Span::EMPTY`] when no non-empty run qualifies.
    /// - Ties on length resolve to the smallest start index.
    fn scan(&self, sequence: &[i64], target: i64) -> Span;

    /// `check` followed by `scan`.
    fn longest(&self, sequence: &[i64], target: i64) -> Result<Span, WindowError> {
        self.check(sequence)?;
        Ok(self.scan(sequence, target))
    }
}
