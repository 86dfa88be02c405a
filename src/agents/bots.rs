use crate::evaluator::Category;
use log::debug;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::{Decision, DecisionContext, Opponent, RandomSource};

/// Raise size added on top of the call target: bigger hands raise more.
pub fn raise_target(call_target: u64, category: Category) -> u64 {
    call_target + 50 + 20 * u64::from(category.value())
}

/// Rule-of-thumb opponent driven by its own hand category.
///
/// - Flush or better always raises.
/// - Two pair through straight calls or raises with equal odds.
/// - One pair folds, calls or raises with equal odds.
/// - High card folds, except one time in four it bluffs with a call or raise.
#[derive(Debug, Clone)]
pub struct HeuristicOpponent<S = ChaCha8Rng> {
    rng: S,
}

impl HeuristicOpponent<ChaCha8Rng> {
    /// Deterministic decisions for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<S: RandomSource> HeuristicOpponent<S> {
    pub fn new(rng: S) -> Self {
        Self { rng }
    }
}

impl<S: RandomSource> Opponent for HeuristicOpponent<S> {
    fn decide(&mut self, ctx: &DecisionContext<'_>) -> Decision {
        let category = ctx.strength.category();
        // Never raise past the stack; short of the call target that is just a call.
        let cap = ctx.bet + ctx.chips;
        let raise = if cap > ctx.call_target {
            Decision::RaiseTo(raise_target(ctx.call_target, category).min(cap))
        } else {
            Decision::Call
        };
        let decision = match category.value() {
            6.. => raise,
            3..=5 => {
                if self.rng.pick(2) == 0 {
                    Decision::Call
                } else {
                    raise
                }
            }
            2 => match self.rng.pick(3) {
                0 => Decision::Fold,
                1 => Decision::Call,
                _ => raise,
            },
            _ => {
                if self.rng.pick(4) == 0 {
                    if self.rng.pick(2) == 0 {
                        Decision::Call
                    } else {
                        raise
                    }
                } else {
                    Decision::Fold
                }
            }
        };
        debug!("opponent holding {category} facing {} decides {decision:?}", ctx.call_target);
        decision
    }
}
