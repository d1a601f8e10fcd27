//! The two longest-target-subarray strategies.
//!
//! - [`window`]     : two-pointer sliding window, non-negative input only.
//! - [`prefix_sum`] : first-occurrence prefix-sum map, any signed input.
//!
//! On non-negative input both return identical spans.

pub mod prefix_sum;
pub mod window;

pub use prefix_sum::{longest_prefix_sum, PrefixSum};
pub use window::{longest_window, Windowed};
