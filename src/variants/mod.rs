//! Other sliding-window searches built on the same two-pointer discipline.
//!
//! - [`distinct`] : longest run with no repeats / at most `k` distinct items.
//! - [`fixed`]    : maximum-sum window of a fixed width.
//! - [`count`]    : number of runs with an exact sum (non-negative input).

pub mod count;
pub mod distinct;
pub mod fixed;

pub use count::count_runs_with_sum;
pub use distinct::{longest_at_most_k_distinct, longest_unique_run};
pub use fixed::{max_sum_window, FixedWindowMax};
