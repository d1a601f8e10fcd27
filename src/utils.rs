//! Sequence scans shared by the strategies and the engine.

use crate::error::WindowError;
use crate::span::Span;

/// Index and value of the first negative element, if any.
#[inline]
pub fn first_negative(sequence: &[i64]) -> Option<(usize, i64)> {
    sequence
        .iter()
        .copied()
        .enumerate()
        .find(|&(_, v)| v < 0)
}

/// Fail with [`WindowError::NegativeElement`] on the first negative element.
pub fn require_non_negative(sequence: &[i64]) -> Result<(), WindowError> {
    match first_negative(sequence) {
        Some((index, value)) => {
            #[cfg(feature = "tracing")]
            tracing::trace!(index, value, "non-negative precondition rejected sequence");
            Err(WindowError::negative_element(index, value))
        }
        None => Ok(()),
    }
}

/// Sum of the elements covered by `span`, widened so it cannot overflow.
pub fn span_sum(sequence: &[i64], span: Span) -> i128 {
    span.slice(sequence).iter().map(|&v| i128::from(v)).sum()
}

/// Quadratic reference search: every run, longest first, earliest start on
/// ties. Used to verify the linear strategies.
#[doc(hidden)]
pub fn brute_force_longest(sequence: &[i64], target: i64) -> Span {
    let target = i128::from(target);
    let mut best = Span::EMPTY;
    for start in 0..sequence.len() {
        let mut sum: i128 = 0;
        for end in start..sequence.len() {
            sum += i128::from(sequence[end]);
            let candidate = Span::new(start, end + 1);
            if sum == target && candidate.len() > best.len() {
                best = candidate;
            }
        }
    }
    best
}
