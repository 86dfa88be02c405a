use crate::cards::{Rank, Suit};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::fmt;

/// A standard 52-card deck of `"<Rank> of <Suit>"` tokens.
///
/// The deck hands out text tokens; turning them into [`crate::cards::Card`]s is
/// the caller's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    tokens: Vec<String>,
}

impl Deck {
    /// ```
    /// use draw_poker::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// assert_eq!(deck.as_slice()[0], "Two of Spades");
    /// ```
    pub fn standard() -> Self {
        let mut tokens = Vec::with_capacity(52);
        for s in Suit::ALL {
            for r in Rank::ALL {
                tokens.push(format!("{} of {}", r.name(), s.name()));
            }
        }
        Self { tokens }
    }

    /// A deck holding exactly `tokens`, top first. Tokens are not validated.
    pub fn from_tokens(tokens: Vec<String>) -> Self {
        Self { tokens }
    }

    /// A fresh standard deck shuffled with the given RNG.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::standard();
        deck.shuffle_with(rng);
        deck
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.tokens
    }

    /// Shuffle using a seeded RNG for reproducibility.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.tokens.shuffle(&mut rng);
    }

    /// Shuffle using the provided RNG implementing Rng.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.tokens.shuffle(rng);
    }

    /// Split `n` tokens off the top of the deck, returning them with the remainder.
    /// Hands back fewer than `n` tokens when the deck runs short.
    pub fn deal(mut self, n: usize) -> (Vec<String>, Deck) {
        let hand = self.draw_n(n);
        (hand, self)
    }

    /// Take `n` tokens off the top of the deck in place.
    pub fn draw_n(&mut self, n: usize) -> Vec<String> {
        let n = n.min(self.tokens.len());
        self.tokens.drain(..n).collect()
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tokens.join(", "))
    }
}
