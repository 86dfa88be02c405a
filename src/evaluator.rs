use crate::cards::Card;
use core::cmp::Ordering;
use std::fmt;

/// Poker hand category from weakest (1) to strongest (10).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Category {
    HighCard = 1,
    OnePair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
    RoyalFlush = 10,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::HighCard,
        Category::OnePair,
        Category::TwoPair,
        Category::ThreeOfAKind,
        Category::Straight,
        Category::Flush,
        Category::FullHouse,
        Category::FourOfAKind,
        Category::StraightFlush,
        Category::RoyalFlush,
    ];

    pub const fn value(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid hand category: {0}")]
pub struct CategoryError(pub u8);

impl TryFrom<u8> for Category {
    type Error = CategoryError;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        Category::ALL.into_iter().find(|c| c.value() == v).ok_or(CategoryError(v))
    }
}

/// Comparable strength of one five-card hand.
///
/// Ordering is by category, then lexicographically by the tie-break ranks.
/// Tie-break ranks list the primary group first (quad, trips, pairs from high
/// to low) followed by kickers in descending order. A wheel straight lists its
/// ace as 1.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HandStrength {
    category: Category,
    tiebreak: Vec<u8>,
}

impl HandStrength {
    pub fn category(&self) -> Category {
        self.category
    }

    pub fn tiebreak(&self) -> &[u8] {
        &self.tiebreak
    }

    pub fn name(&self) -> &'static str {
        self.category.name()
    }
}

impl Ord for HandStrength {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self, other)
    }
}

impl PartialOrd for HandStrength {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for HandStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Evaluate exactly five cards. Input order does not matter.
///
/// ```
/// use draw_poker::cards::hand_from_tokens;
/// use draw_poker::evaluator::{evaluate, Category};
///
/// let hand = hand_from_tokens(&[
///     "Ace of Spades", "Two of Hearts", "Three of Clubs", "Four of Spades", "Five of Diamonds",
/// ]).unwrap();
/// let strength = evaluate(&hand);
/// assert_eq!(strength.category(), Category::Straight);
/// assert_eq!(strength.tiebreak(), &[5, 4, 3, 2, 1]);
/// ```
pub fn evaluate(cards: &[Card; 5]) -> HandStrength {
    let mut ranks = cards.map(|c| c.rank().value());
    ranks.sort_unstable_by(|a, b| b.cmp(a));

    let mut rank_counts = [0u8; 15];
    let mut suit_counts = [0u8; 4];
    for c in cards {
        rank_counts[c.rank().value() as usize] += 1;
        suit_counts[c.suit().index()] += 1;
    }

    let is_flush = suit_counts.iter().any(|&n| n == 5);
    let distinct = rank_counts.iter().filter(|&&n| n > 0).count();
    // Ace plays low in A-2-3-4-5 and breaks the max-min rule.
    let is_wheel = ranks == [14, 5, 4, 3, 2];
    let is_straight = distinct == 5 && (is_wheel || ranks[0] - ranks[4] == 4);
    let ordered: Vec<u8> = if is_wheel { vec![5, 4, 3, 2, 1] } else { ranks.to_vec() };

    // Groups, each listed high to low
    let mut quads = Vec::new();
    let mut trips = Vec::new();
    let mut pairs = Vec::new();
    for v in (2u8..=14).rev() {
        match rank_counts[v as usize] {
            4 => quads.push(v),
            3 => trips.push(v),
            2 => pairs.push(v),
            _ => {}
        }
    }
    let kickers = |claimed: &[u8]| -> Vec<u8> {
        ranks.iter().copied().filter(|r| !claimed.contains(r)).collect()
    };
    let strength = |category: Category, tiebreak: Vec<u8>| HandStrength { category, tiebreak };

    if is_straight && is_flush {
        let category = if !is_wheel && ranks[0] == 14 {
            Category::RoyalFlush
        } else {
            Category::StraightFlush
        };
        return strength(category, ordered);
    }

    if let Some(&quad) = quads.first() {
        let mut values = vec![quad];
        values.extend(kickers(&[quad]));
        return strength(Category::FourOfAKind, values);
    }

    if let (Some(&trip), Some(&pair)) = (trips.first(), pairs.first()) {
        return strength(Category::FullHouse, vec![trip, pair]);
    }

    if is_flush {
        return strength(Category::Flush, ranks.to_vec());
    }

    if is_straight {
        return strength(Category::Straight, ordered);
    }

    if let Some(&trip) = trips.first() {
        let mut values = vec![trip];
        values.extend(kickers(&[trip]));
        return strength(Category::ThreeOfAKind, values);
    }

    if pairs.len() >= 2 {
        let mut values = vec![pairs[0], pairs[1]];
        values.extend(kickers(&pairs));
        return strength(Category::TwoPair, values);
    }

    if let Some(&pair) = pairs.first() {
        let mut values = vec![pair];
        values.extend(kickers(&[pair]));
        return strength(Category::OnePair, values);
    }

    strength(Category::HighCard, ranks.to_vec())
}

/// Total order over hand strengths: category first, then tie-break ranks
/// element by element.
///
/// ```
/// use draw_poker::cards::hand_from_tokens;
/// use draw_poker::evaluator::{compare, evaluate};
/// use std::cmp::Ordering;
///
/// let two_pair = evaluate(&hand_from_tokens(&[
///     "Ace of Spades", "Ace of Hearts", "King of Diamonds", "King of Clubs", "Two of Spades",
/// ]).unwrap());
/// let full_house = evaluate(&hand_from_tokens(&[
///     "Queen of Spades", "Queen of Hearts", "Queen of Diamonds", "Five of Clubs", "Five of Spades",
/// ]).unwrap());
/// assert_eq!(compare(&two_pair, &full_house), Ordering::Less);
/// ```
pub fn compare(a: &HandStrength, b: &HandStrength) -> Ordering {
    a.category.cmp(&b.category).then_with(|| {
        a.tiebreak
            .iter()
            .zip(&b.tiebreak)
            .map(|(x, y)| x.cmp(y))
            .find(|o| o.is_ne())
            .unwrap_or(Ordering::Equal)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Rank, Suit};

    fn hand(cards: [(Rank, Suit); 5]) -> [Card; 5] {
        cards.map(|(r, s)| Card::new(r, s))
    }

    #[test]
    fn evaluate_categories_and_tiebreaks() {
        use Rank::*;
        use Suit::*;

        let e = evaluate(&hand([
            (Ace, Spades),
            (King, Spades),
            (Queen, Spades),
            (Jack, Spades),
            (Ten, Spades),
        ]));
        assert_eq!(e.category(), Category::RoyalFlush);
        assert_eq!(e.tiebreak(), &[14, 13, 12, 11, 10]);

        let e = evaluate(&hand([
            (Nine, Hearts),
            (King, Hearts),
            (Queen, Hearts),
            (Jack, Hearts),
            (Ten, Hearts),
        ]));
        assert_eq!(e.category(), Category::StraightFlush);
        assert_eq!(e.tiebreak(), &[13, 12, 11, 10, 9]);

        let e = evaluate(&hand([
            (King, Clubs),
            (Two, Spades),
            (King, Diamonds),
            (King, Hearts),
            (King, Spades),
        ]));
        assert_eq!(e.category(), Category::FourOfAKind);
        assert_eq!(e.tiebreak(), &[13, 2]);

        let e = evaluate(&hand([
            (Two, Spades),
            (Ten, Clubs),
            (Two, Hearts),
            (Ten, Diamonds),
            (Ten, Hearts),
        ]));
        assert_eq!(e.category(), Category::FullHouse);
        assert_eq!(e.tiebreak(), &[10, 2]);

        let e = evaluate(&hand([
            (Three, Hearts),
            (Nine, Hearts),
            (Ace, Hearts),
            (Seven, Hearts),
            (Two, Hearts),
        ]));
        assert_eq!(e.category(), Category::Flush);
        assert_eq!(e.tiebreak(), &[14, 9, 7, 3, 2]);

        let e = evaluate(&hand([
            (Queen, Clubs),
            (Two, Clubs),
            (Queen, Diamonds),
            (Nine, Spades),
            (Queen, Hearts),
        ]));
        assert_eq!(e.category(), Category::ThreeOfAKind);
        assert_eq!(e.tiebreak(), &[12, 9, 2]);

        let e = evaluate(&hand([
            (Nine, Clubs),
            (Jack, Clubs),
            (Two, Spades),
            (Nine, Hearts),
            (Jack, Diamonds),
        ]));
        assert_eq!(e.category(), Category::TwoPair);
        assert_eq!(e.tiebreak(), &[11, 9, 2]);

        let e = evaluate(&hand([
            (Two, Diamonds),
            (Ace, Diamonds),
            (Ten, Spades),
            (Ace, Hearts),
            (Nine, Clubs),
        ]));
        assert_eq!(e.category(), Category::OnePair);
        assert_eq!(e.tiebreak(), &[14, 10, 9, 2]);

        let e = evaluate(&hand([
            (Five, Clubs),
            (Ace, Hearts),
            (Two, Diamonds),
            (King, Diamonds),
            (Seven, Spades),
        ]));
        assert_eq!(e.category(), Category::HighCard);
        assert_eq!(e.tiebreak(), &[14, 13, 7, 5, 2]);
    }

    #[test]
    fn wheel_straight_flush_is_not_royal() {
        use Rank::*;
        let e = evaluate(&hand([
            (Ace, Suit::Clubs),
            (Two, Suit::Clubs),
            (Three, Suit::Clubs),
            (Four, Suit::Clubs),
            (Five, Suit::Clubs),
        ]));
        assert_eq!(e.category(), Category::StraightFlush);
        assert_eq!(e.tiebreak(), &[5, 4, 3, 2, 1]);
    }

    #[test]
    fn near_wheel_is_not_a_straight() {
        use Rank::*;
        let e = evaluate(&hand([
            (Ace, Suit::Clubs),
            (Two, Suit::Hearts),
            (Three, Suit::Clubs),
            (Four, Suit::Clubs),
            (Six, Suit::Clubs),
        ]));
        assert_eq!(e.category(), Category::HighCard);
    }

    #[test]
    fn compare_uses_category_then_tiebreaks() {
        let a = HandStrength { category: Category::OnePair, tiebreak: vec![9, 14, 8, 3] };
        let b = HandStrength { category: Category::OnePair, tiebreak: vec![9, 14, 7, 6] };
        let c = HandStrength { category: Category::TwoPair, tiebreak: vec![3, 2, 4] };
        assert_eq!(compare(&a, &b), Ordering::Greater);
        assert_eq!(compare(&b, &a), Ordering::Less);
        assert_eq!(compare(&a, &c), Ordering::Less);
        assert_eq!(compare(&a, &a.clone()), Ordering::Equal);
        assert_eq!(a.cmp(&b), compare(&a, &b));
    }

    #[test]
    fn category_try_from_and_names() {
        assert_eq!(Category::try_from(10).unwrap(), Category::RoyalFlush);
        assert_eq!(Category::try_from(1).unwrap().name(), "High Card");
        assert_eq!(Category::try_from(0), Err(CategoryError(0)));
        assert_eq!(Category::try_from(11), Err(CategoryError(11)));
    }
}
