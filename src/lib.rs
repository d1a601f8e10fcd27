//! Longest contiguous subarray with an exact target sum.
//!
//! Given a sequence of signed integers and a target, find the longest
//! contiguous run whose elements sum to the target, preferring the earliest
//! start among runs of equal length. "No such run" is the empty span
//! [`Span::EMPTY`], never an error.
//!
//! ## Strategies
//! - [`strategies::window`]: two pointers and an incremental sum. O(n) time,
//!   O(1) space, but only valid when every element is non-negative; negative
//!   input is rejected with [`WindowError::NegativeElement`].
//! - [`strategies::prefix_sum`]: a map from each prefix sum to the first
//!   position it occurs at. O(n) expected time and space, any signed input.
//!
//! On non-negative input both strategies return the same span.
//! [`TargetEngine`] scans a sequence once and picks the cheaper valid one.
//!
//! ## Quick start
//! ```
//! use target_window::{longest_prefix_sum, longest_window, Span, TargetEngine};
//!
//! assert_eq!(longest_window(&[2, 2, 2, 2], 4), Ok(Span::new(0, 2)));
//! assert_eq!(longest_prefix_sum(&[1, -1, 5, -2, 3], 3), Span::new(0, 4));
//!
//! let data = [0, 0, 0];
//! assert_eq!(TargetEngine::new(&data).run_slice(0), &[0, 0, 0]);
//! ```
//!
//! ## Related searches
//! The [`variants`] module holds other searches from the same family:
//! longest run without repeats, at most `k` distinct items, maximum-sum
//! fixed-width window, and counting runs with an exact sum.
//!
//! Every function here is pure: no state survives a call, so callers on
//! different threads need no coordination.

pub mod builder;
pub mod engine;
pub mod error;
pub mod span;
pub mod strategies;
pub mod traits;
pub mod utils;
pub mod variants;

pub use crate::builder::TargetEngineBuilder;
pub use crate::engine::{StrategyChoice, StrategyKind, TargetEngine};
pub use crate::error::WindowError;
pub use crate::span::Span;
pub use crate::strategies::{longest_prefix_sum, longest_window};
pub use crate::traits::SubarrayStrategy;
