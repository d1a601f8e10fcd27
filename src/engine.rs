//! Strategy-selecting front end over a fixed sequence.
//!
//! [`TargetEngine`] binds one sequence, resolves which strategy may run on it
//! (once, at construction), and then answers any number of target queries.
//! In [`StrategyChoice::Auto`] mode a single scan for negative elements picks
//! the sliding window when it is valid and the prefix-sum map otherwise.

use crate::error::WindowError;
use crate::span::Span;
use crate::strategies::{PrefixSum, Windowed};
use crate::traits::SubarrayStrategy;
use crate::utils::first_negative;

/// How the engine picks a strategy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StrategyChoice {
    /// Sliding window for non-negative input, prefix sums otherwise.
    #[default]
    Auto,
    /// Always the sliding window; non-negative input is required.
    Windowed,
    /// Always the prefix-sum map.
    PrefixSum,
}

/// The strategy an engine resolved to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    Windowed,
    PrefixSum,
}

impl StrategyKind {
    /// Borrow the stateless strategy implementation.
    pub fn strategy(self) -> &'static dyn SubarrayStrategy {
        match self {
            StrategyKind::Windowed => &Windowed,
            StrategyKind::PrefixSum => &PrefixSum,
        }
    }

    pub fn name(self) -> &'static str {
        self.strategy().name()
    }
}

/// Longest-target-subarray engine for one sequence.
///
/// Typical usage:
/// ```
/// use target_window::{Span, TargetEngine};
///
/// let data = [1, -1, 5, -2, 3];
/// let engine = TargetEngine::new(&data);
/// let best = engine.run(3);
/// assert_eq!(best, Span::new(0, 4));
/// assert_eq!(best.slice(&data), &[1, -1, 5, -2]);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct TargetEngine<'a> {
    sequence: &'a [i64],
    kind: StrategyKind,
}

impl<'a> TargetEngine<'a> {
    /// Create an engine that picks its strategy from the sequence contents.
    pub fn new(sequence: &'a [i64]) -> Self {
        let kind = match first_negative(sequence) {
            Some(_) => StrategyKind::PrefixSum,
            None => StrategyKind::Windowed,
        };
        #[cfg(feature = "tracing")]
        tracing::debug!(
            len = sequence.len(),
            strategy = kind.name(),
            "auto-selected strategy"
        );
        Self { sequence, kind }
    }

    /// Create an engine with an explicit strategy choice.
    ///
    /// Fails with [`WindowError::NegativeElement`] if `choice` is
    /// [`StrategyChoice::Windowed`] and the sequence holds a negative value.
    pub fn with_strategy(
        sequence: &'a [i64],
        choice: StrategyChoice,
    ) -> Result<Self, WindowError> {
        let kind = match choice {
            StrategyChoice::Auto => return Ok(Self::new(sequence)),
            StrategyChoice::Windowed => StrategyKind::Windowed,
            StrategyChoice::PrefixSum => StrategyKind::PrefixSum,
        };
        kind.strategy().check(sequence)?;
        Ok(Self { sequence, kind })
    }

    /// The bound sequence.
    pub fn sequence(&self) -> &'a [i64] {
        self.sequence
    }

    /// The resolved strategy.
    pub fn strategy(&self) -> StrategyKind {
        self.kind
    }

    /// Longest run summing to `target`, or [`Span::EMPTY`].
    pub fn run(&self, target: i64) -> Span {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("target_run", strategy = self.kind.name(), target);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        self.kind.strategy().scan(self.sequence, target)
    }

    /// Like [`run`](Self::run), but borrows the matching elements.
    pub fn run_slice(&self, target: i64) -> &'a [i64] {
        self.run(target).slice(self.sequence)
    }

    /// Answer several targets against the same sequence, in order.
    pub fn run_all(&self, targets: &[i64]) -> Vec<Span> {
        targets.iter().map(|&t| self.run(t)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_picks_window_for_non_negative_input() {
        let data = [2, 2, 2, 2];
        let engine = TargetEngine::new(&data);
        assert_eq!(engine.strategy(), StrategyKind::Windowed);
        assert_eq!(engine.run(4), Span::new(0, 2));
    }

    #[test]
    fn auto_falls_back_to_prefix_sums() {
        let data = [1, -1, 5, -2, 3];
        let engine = TargetEngine::new(&data);
        assert_eq!(engine.strategy(), StrategyKind::PrefixSum);
        assert_eq!(engine.run_slice(3), &[1, -1, 5, -2]);
    }

    #[test]
    fn forced_window_rejects_negatives_up_front() {
        let err =
            TargetEngine::with_strategy(&[3, -3], StrategyChoice::Windowed).unwrap_err();
        assert_eq!(err, WindowError::NegativeElement { index: 1, value: -3 });
    }

    #[test]
    fn forced_prefix_sum_accepts_anything() {
        let data = [0, 0, 0];
        let engine = TargetEngine::with_strategy(&data, StrategyChoice::PrefixSum).unwrap();
        assert_eq!(engine.strategy(), StrategyKind::PrefixSum);
        assert_eq!(engine.run(0), Span::new(0, 3));
    }

    #[test]
    fn empty_sequence_never_matches() {
        let engine = TargetEngine::new(&[]);
        assert_eq!(engine.run_all(&[-1, 0, 1]), vec![Span::EMPTY; 3]);
    }

    #[test]
    fn strategy_names_are_stable() {
        assert_eq!(StrategyKind::Windowed.name(), "windowed");
        assert_eq!(StrategyKind::PrefixSum.name(), "prefix_sum");
    }
}
