use draw_poker::cards::{hand_from_tokens, Card, Rank, Suit};
use draw_poker::evaluator::{compare, evaluate, Category, HandStrength};
use std::cmp::Ordering;

fn eval(tokens: [&str; 5]) -> HandStrength {
    evaluate(&hand_from_tokens(&tokens).unwrap())
}

#[test]
fn category_royal_flush() {
    let e = eval(["Ace of Spades", "King of Spades", "Queen of Spades", "Jack of Spades", "Ten of Spades"]);
    assert_eq!(e.category(), Category::RoyalFlush);
    assert_eq!(e.category().value(), 10);
    assert_eq!(e.name(), "Royal Flush");
}

#[test]
fn category_straight_flush() {
    let e = eval(["Nine of Hearts", "King of Hearts", "Queen of Hearts", "Jack of Hearts", "Ten of Hearts"]);
    assert_eq!(e.category(), Category::StraightFlush);
    assert_eq!(e.tiebreak(), &[13, 12, 11, 10, 9]);
}

#[test]
fn steel_wheel_is_a_straight_flush_not_royal() {
    let e = eval(["Ace of Clubs", "Two of Clubs", "Three of Clubs", "Four of Clubs", "Five of Clubs"]);
    assert_eq!(e.category(), Category::StraightFlush);
    assert_eq!(e.tiebreak(), &[5, 4, 3, 2, 1]);
}

#[test]
fn category_four_of_a_kind() {
    let xs = [
        Card::new(Rank::Nine, Suit::Clubs),
        Card::new(Rank::Nine, Suit::Diamonds),
        Card::new(Rank::Nine, Suit::Hearts),
        Card::new(Rank::Nine, Suit::Spades),
        Card::new(Rank::Ace, Suit::Clubs),
    ];
    let e = evaluate(&xs);
    assert_eq!(e.category(), Category::FourOfAKind);
    assert_eq!(e.tiebreak(), &[9, 14]);
}

#[test]
fn category_full_house() {
    let xs = [
        Card::new(Rank::Three, Suit::Clubs),
        Card::new(Rank::Three, Suit::Diamonds),
        Card::new(Rank::Three, Suit::Hearts),
        Card::new(Rank::Jack, Suit::Spades),
        Card::new(Rank::Jack, Suit::Clubs),
    ];
    let e = evaluate(&xs);
    assert_eq!(e.category(), Category::FullHouse);
    assert_eq!(e.tiebreak(), &[3, 11]);
}

#[test]
fn category_flush() {
    let e = eval(["King of Hearts", "Ten of Hearts", "Eight of Hearts", "Six of Hearts", "Three of Hearts"]);
    assert_eq!(e.category(), Category::Flush);
    assert_eq!(e.tiebreak(), &[13, 10, 8, 6, 3]);
}

#[test]
fn category_straight() {
    let e = eval(["Ten of Clubs", "Nine of Diamonds", "Eight of Hearts", "Seven of Spades", "Six of Clubs"]);
    assert_eq!(e.category(), Category::Straight);
    assert_eq!(e.tiebreak(), &[10, 9, 8, 7, 6]);
}

#[test]
fn broadway_straight_of_mixed_suits() {
    let e = eval(["Ace of Clubs", "King of Diamonds", "Queen of Hearts", "Jack of Spades", "Ten of Clubs"]);
    assert_eq!(e.category(), Category::Straight);
    assert_eq!(e.tiebreak(), &[14, 13, 12, 11, 10]);
}

#[test]
fn wheel_ranks_below_six_high() {
    let wheel = eval(["Ace of Clubs", "Two of Diamonds", "Three of Hearts", "Four of Spades", "Five of Clubs"]);
    let six = eval(["Six of Clubs", "Five of Diamonds", "Four of Hearts", "Three of Spades", "Two of Clubs"]);
    assert_eq!(wheel.category(), Category::Straight);
    assert_eq!(wheel.tiebreak(), &[5, 4, 3, 2, 1]);
    assert_eq!(six.tiebreak(), &[6, 5, 4, 3, 2]);
    assert_eq!(compare(&wheel, &six), Ordering::Less);
}

#[test]
fn ace_does_not_wrap_around() {
    let e = eval(["Queen of Clubs", "King of Diamonds", "Ace of Hearts", "Two of Spades", "Three of Clubs"]);
    assert_eq!(e.category(), Category::HighCard);
}

#[test]
fn category_three_of_a_kind() {
    let e = eval(["Seven of Clubs", "Seven of Diamonds", "Seven of Hearts", "King of Spades", "Two of Clubs"]);
    assert_eq!(e.category(), Category::ThreeOfAKind);
    assert_eq!(e.tiebreak(), &[7, 13, 2]);
}

#[test]
fn category_two_pair() {
    let e = eval(["Ace of Spades", "Ace of Hearts", "King of Diamonds", "King of Clubs", "Two of Spades"]);
    assert_eq!(e.category(), Category::TwoPair);
    assert_eq!(e.category().value(), 3);
    assert_eq!(e.tiebreak(), &[14, 13, 2]);
}

#[test]
fn category_one_pair() {
    let e = eval(["Four of Spades", "Four of Hearts", "King of Diamonds", "Nine of Clubs", "Two of Spades"]);
    assert_eq!(e.category(), Category::OnePair);
    assert_eq!(e.tiebreak(), &[4, 13, 9, 2]);
}

#[test]
fn category_high_card() {
    let e = eval(["Ace of Spades", "Jack of Hearts", "Eight of Diamonds", "Five of Clubs", "Three of Spades"]);
    assert_eq!(e.category(), Category::HighCard);
    assert_eq!(e.tiebreak(), &[14, 11, 8, 5, 3]);
}

#[test]
fn full_house_beats_two_pair() {
    let a = eval(["Ace of Spades", "Ace of Hearts", "King of Diamonds", "King of Clubs", "Two of Spades"]);
    let b = eval(["Queen of Spades", "Queen of Hearts", "Queen of Diamonds", "Five of Clubs", "Five of Spades"]);
    assert_eq!(b.category().value(), 7);
    assert_eq!(b.tiebreak(), &[12, 5]);
    assert_eq!(compare(&a, &b), Ordering::Less);
    assert_eq!(compare(&b, &a), Ordering::Greater);
}

#[test]
fn category_numbers_round_trip() {
    for c in Category::ALL {
        assert_eq!(Category::try_from(c.value()), Ok(c));
    }
    assert!(Category::try_from(0).is_err());
    assert!(Category::try_from(11).is_err());
}
