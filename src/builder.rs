use crate::engine::{StrategyChoice, TargetEngine};
use crate::error::WindowError;

pub struct TargetEngineBuilder<'a> {
    sequence: &'a [i64],
    choice: StrategyChoice,
}

impl<'a> TargetEngineBuilder<'a> {
    pub fn new(sequence: &'a [i64]) -> Self {
        Self {
            sequence,
            choice: StrategyChoice::Auto,
        }
    }
    pub fn with_strategy(mut self, choice: StrategyChoice) -> Self {
        self.choice = choice;
        self
    }
    pub fn build(self) -> Result<TargetEngine<'a>, WindowError> {
        TargetEngine::with_strategy(self.sequence, self.choice)
    }
}

#[cfg(test)]
mod tests {
    use super::TargetEngineBuilder;
    use crate::engine::{StrategyChoice, StrategyKind};
    use crate::Span;

    #[test]
    fn defaults_to_auto() {
        let data = [1, 2, 3];
        let engine = TargetEngineBuilder::new(&data).build().unwrap();
        assert_eq!(engine.strategy(), StrategyKind::Windowed);
        assert_eq!(engine.run(5), Span::new(1, 3));
    }

    #[test]
    fn explicit_choice_is_validated() {
        let data = [4, -4, 4];
        assert!(TargetEngineBuilder::new(&data)
            .with_strategy(StrategyChoice::Windowed)
            .build()
            .is_err());
        let engine = TargetEngineBuilder::new(&data)
            .with_strategy(StrategyChoice::PrefixSum)
            .build()
            .unwrap();
        assert_eq!(engine.run(4), Span::new(0, 3));
    }
}
