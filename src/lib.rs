//! draw-poker: heads-up five-card draw against a computer opponent
//!
//! Goals:
//! - Exact hand ranking with full tiebreaks, including the wheel
//! - A betting round that rejects out-of-order actions instead of panicking
//! - Reproducible matches from a seed
//!
//! ## Quick start: rank two hands
//! ```
//! use draw_poker::cards::hand_from_tokens;
//! use draw_poker::evaluator::{evaluate, Category};
//!
//! let wheel = hand_from_tokens(&[
//!     "Ace of Spades", "Two of Hearts", "Three of Clubs", "Four of Diamonds", "Five of Spades",
//! ]).unwrap();
//! let six_high = hand_from_tokens(&[
//!     "Two of Spades", "Three of Hearts", "Four of Clubs", "Five of Diamonds", "Six of Spades",
//! ]).unwrap();
//!
//! let (a, b) = (evaluate(&wheel), evaluate(&six_high));
//! assert_eq!(a.category(), Category::Straight);
//! assert_eq!(a.tiebreak(), &[5, 4, 3, 2, 1]);
//! assert!(a < b);
//! ```
//!
//! ## Playing
//! ```sh
//! cargo run --bin draw-poker            # full-screen
//! cargo run --bin draw-poker -- --plain # line-based
//! ```

pub mod agents;
pub mod cards;
pub mod config;
pub mod console;
pub mod deck;
pub mod evaluator;
pub mod game;
pub mod session;
pub mod tui;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
