//! Prefix-sum strategy for signed sequences.
//!
//! Let `P(k)` be the sum of the first `k` elements. A run `[j, i + 1)` sums to
//! the target exactly when `P(j) = P(i + 1) - target`, so for each end index
//! the longest match starts at the *first* position where that prefix sum was
//! seen. The map below records each prefix sum once, at its first position,
//! and is never overwritten: a later position for the same sum can only
//! shorten every run that starts there.
//!
//! Positions are stored as prefix lengths (`0..=n`), so the conceptual
//! "index -1" of the empty prefix is position 0.

use std::collections::HashMap;

use crate::span::Span;
use crate::traits::SubarrayStrategy;

/// Prefix-sum strategy; accepts any signed sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PrefixSum;

impl SubarrayStrategy for PrefixSum {
    fn name(&self) -> &'static str {
        "prefix_sum"
    }

    fn scan(&self, sequence: &[i64], target: i64) -> Span {
        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("prefix_sum_scan", len = sequence.len(), target);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let target = i128::from(target);
        let mut first_position: HashMap<i128, usize> = HashMap::with_capacity(sequence.len() + 1);
        first_position.insert(0, 0);

        let mut cumulative: i128 = 0;
        let mut best = Span::EMPTY;

        for (i, &value) in sequence.iter().enumerate() {
            cumulative += i128::from(value);
            let end = i + 1;
            // First occurrence only.
            first_position.entry(cumulative).or_insert(end);

            if let Some(&start) = first_position.get(&(cumulative - target)) {
                let candidate = Span::new(start, end);
                if !candidate.is_empty() && candidate.beats(&best) {
                    best = candidate;
                }
            }
        }

        best
    }
}

/// Longest run of `sequence` summing to `target`; negative elements allowed.
///
/// Returns [`Span::EMPTY`] when no non-empty run matches. Ties on length
/// resolve to the smallest start index.
pub fn longest_prefix_sum(sequence: &[i64], target: i64) -> Span {
    PrefixSum.scan(sequence, target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_example_prefers_longest_then_earliest() {
        // [1, -1, 5, -2], [5, -2] and [3] all qualify.
        assert_eq!(longest_prefix_sum(&[1, -1, 5, -2, 3], 3), Span::new(0, 4));
        assert_eq!(longest_prefix_sum(&[3, 1, -4, 2, -1, 6], 5), Span::new(4, 6));
        assert_eq!(longest_prefix_sum(&[-1, -1, -1], -2), Span::new(0, 2));
    }

    #[test]
    fn no_match_and_degenerate_inputs() {
        assert_eq!(longest_prefix_sum(&[1, 2, 3], 7), Span::EMPTY);
        assert_eq!(longest_prefix_sum(&[], 0), Span::EMPTY);
        assert_eq!(longest_prefix_sum(&[1], 0), Span::EMPTY);
        assert_eq!(longest_prefix_sum(&[1], 1), Span::new(0, 1));
    }

    #[test]
    fn all_zero_sequence_matches_entirely() {
        assert_eq!(longest_prefix_sum(&[0, 0, 0], 0), Span::new(0, 3));
    }

    #[test]
    fn first_occurrence_is_never_overwritten() {
        // Prefix sums: 0, 2, 0, 2, 0, 3. Sum 0 must stay at position 0;
        // overwriting it with position 4 would shrink the answer to [4, 5).
        assert_eq!(longest_prefix_sum(&[2, -2, 2, -2, 3], 3), Span::new(0, 5));
        assert_eq!(longest_prefix_sum(&[2, -2, 2, -2, 3, 0], 3), Span::new(0, 6));
    }

    #[test]
    fn extreme_values_do_not_overflow() {
        let data = [i64::MIN, i64::MIN, i64::MAX, i64::MAX];
        assert_eq!(longest_prefix_sum(&data, -2), Span::new(0, 4));
    }
}
