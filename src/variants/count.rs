//! Counting runs with an exact sum over non-negative sequences.
//!
//! The number of runs summing to exactly `goal` is the number summing to at
//! most `goal` minus the number summing to at most `goal - 1`. Each "at most"
//! count is one shrinking-window pass: for every right edge, every start
//! between the shrunk left edge and the right edge qualifies.

use crate::error::WindowError;
use crate::utils::require_non_negative;

/// Number of non-empty runs of a non-negative `sequence` summing to `goal`.
///
/// Fails with [`WindowError::NegativeElement`] on negative input; a negative
/// `goal` counts zero runs.
pub fn count_runs_with_sum(sequence: &[i64], goal: i64) -> Result<u64, WindowError> {
    require_non_negative(sequence)?;
    let goal = i128::from(goal);
    Ok(count_at_most(sequence, goal) - count_at_most(sequence, goal - 1))
}

fn count_at_most(sequence: &[i64], bound: i128) -> u64 {
    if bound < 0 {
        return 0;
    }

    let mut left = 0usize;
    let mut running: i128 = 0;
    let mut count = 0u64;

    for (right, &value) in sequence.iter().enumerate() {
        running += i128::from(value);
        while left <= right && running > bound {
            running -= i128::from(sequence[left]);
            left += 1;
        }
        count += (right + 1 - left) as u64;
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binary_example() {
        assert_eq!(count_runs_with_sum(&[1, 0, 1, 0, 1], 2), Ok(4));
    }

    #[test]
    fn zero_goal_counts_zero_runs() {
        assert_eq!(count_runs_with_sum(&[0, 0, 0, 0, 0], 0), Ok(15));
        assert_eq!(count_runs_with_sum(&[1, 0, 0, 1], 0), Ok(3));
    }

    #[test]
    fn degenerate_inputs() {
        assert_eq!(count_runs_with_sum(&[], 0), Ok(0));
        assert_eq!(count_runs_with_sum(&[3, 1], -1), Ok(0));
        assert_eq!(count_runs_with_sum(&[3, 1], 9), Ok(0));
    }

    #[test]
    fn rejects_negative_elements() {
        assert_eq!(
            count_runs_with_sum(&[1, -2], 1),
            Err(WindowError::NegativeElement { index: 1, value: -2 })
        );
    }

    #[test]
    fn at_most_counts_every_start() {
        // All six runs of [1, 2, 3] sum to at most 6.
        assert_eq!(count_at_most(&[1, 2, 3], 6), 6);
        assert_eq!(count_at_most(&[1, 2, 3], 2), 2);
    }
}
