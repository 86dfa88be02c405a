//! Agents: the human's action intents and the computer opponent.
//!
//! The human side is a plain [`HumanAction`] produced by a frontend from menu
//! input. The computer side is anything implementing [`Opponent`]; its random
//! draws go through [`RandomSource`] so tests can pin them down.

use crate::evaluator::HandStrength;
use log::warn;
use rand::Rng;

mod bots;

pub use bots::{raise_target, HeuristicOpponent};

/// What the human chose to do on their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HumanAction {
    /// Target *total* bet for the hand, not the increment.
    Bet(u64),
    Call,
    Fold,
}

/// The three entries of the action menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Bet,
    Call,
    Fold,
}

impl MenuChoice {
    pub const fn key(self) -> &'static str {
        match self {
            MenuChoice::Bet => "1",
            MenuChoice::Call => "2",
            MenuChoice::Fold => "3",
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputError {
    #[error("unrecognized menu choice: '{0}'")]
    UnknownChoice(String),
    #[error("invalid bet amount: '{0}'")]
    InvalidAmount(String),
}

/// Parse a menu entry: `"1"` bet, `"2"` call, `"3"` fold.
pub fn parse_menu_choice(input: &str) -> Result<MenuChoice, InputError> {
    match input.trim() {
        "1" => Ok(MenuChoice::Bet),
        "2" => Ok(MenuChoice::Call),
        "3" => Ok(MenuChoice::Fold),
        other => Err(InputError::UnknownChoice(other.to_string())),
    }
}

/// Parse a target total bet.
pub fn parse_bet_amount(input: &str) -> Result<u64, InputError> {
    let t = input.trim();
    t.parse::<u64>().map_err(|_| InputError::InvalidAmount(t.to_string()))
}

/// Unrecognized choices fold.
pub fn menu_choice_or_fold(input: &str) -> MenuChoice {
    parse_menu_choice(input).unwrap_or_else(|err| {
        warn!("{err}; treating as fold");
        MenuChoice::Fold
    })
}

/// Missing or non-numeric amounts bet zero.
pub fn bet_amount_or_zero(input: &str) -> u64 {
    parse_bet_amount(input).unwrap_or_else(|err| {
        warn!("{err}; treating as a bet of 0");
        0
    })
}

/// Uniform random draws for opponent decisions.
pub trait RandomSource {
    /// A uniformly chosen value in `0..n`. `n` is never zero.
    fn pick(&mut self, n: u32) -> u32;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn pick(&mut self, n: u32) -> u32 {
        self.random_range(0..n)
    }
}

/// What the opponent decided to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Fold,
    Call,
    /// Target total bet; the engine clamps it to the opponent's stack.
    RaiseTo(u64),
}

/// Everything the opponent is shown when it is asked to act.
#[derive(Debug, Clone, Copy)]
pub struct DecisionContext<'a> {
    pub strength: &'a HandStrength,
    /// The human's total bet, i.e. what a call has to match.
    pub call_target: u64,
    pub bet: u64,
    pub chips: u64,
}

/// A controller for the computer seat.
pub trait Opponent {
    fn decide(&mut self, ctx: &DecisionContext<'_>) -> Decision;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_choices_parse() {
        assert_eq!(parse_menu_choice("1"), Ok(MenuChoice::Bet));
        assert_eq!(parse_menu_choice(" 2\n"), Ok(MenuChoice::Call));
        assert_eq!(parse_menu_choice("3"), Ok(MenuChoice::Fold));
        assert!(matches!(parse_menu_choice("4"), Err(InputError::UnknownChoice(_))));
        assert!(matches!(parse_menu_choice(""), Err(InputError::UnknownChoice(_))));
    }

    #[test]
    fn unknown_choice_recovers_to_fold() {
        assert_eq!(menu_choice_or_fold("raise"), MenuChoice::Fold);
        assert_eq!(menu_choice_or_fold("2"), MenuChoice::Call);
        for c in [MenuChoice::Bet, MenuChoice::Call, MenuChoice::Fold] {
            assert_eq!(menu_choice_or_fold(c.key()), c);
        }
    }

    #[test]
    fn bad_amount_recovers_to_zero() {
        assert_eq!(parse_bet_amount("150"), Ok(150));
        assert!(matches!(parse_bet_amount("-5"), Err(InputError::InvalidAmount(_))));
        assert_eq!(bet_amount_or_zero("lots"), 0);
        assert_eq!(bet_amount_or_zero(""), 0);
        assert_eq!(bet_amount_or_zero(" 75 "), 75);
    }

    #[test]
    fn seeded_rng_is_a_random_source() {
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        let mut a = StdRng::seed_from_u64(9);
        let mut b = StdRng::seed_from_u64(9);
        for _ in 0..32 {
            let x = a.pick(3);
            assert!(x < 3);
            assert_eq!(x, b.pick(3));
        }
    }
}
