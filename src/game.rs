use crate::agents::{Decision, DecisionContext, HumanAction, Opponent};
use crate::cards::{hand_from_tokens, Card, CardParseError};
use crate::config::MatchConfig;
use crate::deck::Deck;
use crate::evaluator::{compare, evaluate, HandStrength};
use core::cmp::Ordering;
use log::{debug, info, warn};

/// The two seats at a heads-up table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    Human,
    Computer,
}

impl Seat {
    pub const BOTH: [Seat; 2] = [Seat::Human, Seat::Computer];

    pub const fn index(self) -> usize {
        match self {
            Seat::Human => 0,
            Seat::Computer => 1,
        }
    }

    pub const fn other(self) -> Seat {
        match self {
            Seat::Human => Seat::Computer,
            Seat::Computer => Seat::Human,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Seat::Human => "You",
            Seat::Computer => "Computer",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ActionVerb {
    SmallBlind,
    BigBlind,
    Call,
    Bet,
    Raise,
    Fold,
}

impl ActionVerb {
    pub fn label(self) -> &'static str {
        match self {
            ActionVerb::SmallBlind => "posts small blind",
            ActionVerb::BigBlind => "posts big blind",
            ActionVerb::Call => "calls",
            ActionVerb::Bet => "bets",
            ActionVerb::Raise => "raises to",
            ActionVerb::Fold => "folds",
        }
    }

    /// The label as spoken by `seat`: "You call" but "Computer calls".
    pub fn label_for(self, seat: Seat) -> &'static str {
        match (seat, self) {
            (Seat::Computer, _) => self.label(),
            (Seat::Human, ActionVerb::SmallBlind) => "post small blind",
            (Seat::Human, ActionVerb::BigBlind) => "post big blind",
            (Seat::Human, ActionVerb::Call) => "call",
            (Seat::Human, ActionVerb::Bet) => "bet",
            (Seat::Human, ActionVerb::Raise) => "raise to",
            (Seat::Human, ActionVerb::Fold) => "fold",
        }
    }
}

/// One chip movement (or fold) within a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionRecord {
    pub seat: Seat,
    pub verb: ActionVerb,
    /// Chips moved from the stack into the pot by this action.
    pub paid: u64,
    /// The seat's total bet for the hand afterwards.
    pub total: u64,
}

/// How a hand ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Fold { winner: Seat },
    Showdown { winner: Seat },
    Split,
}

impl Outcome {
    pub fn winner(self) -> Option<Seat> {
        match self {
            Outcome::Fold { winner } | Outcome::Showdown { winner } => Some(winner),
            Outcome::Split => None,
        }
    }
}

/// Where a [`BettingRound`] stands. `Closed` means betting is over and only
/// [`BettingRound::resolve`] is allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    BlindsPosted,
    Acting(Seat),
    Closed,
    Resolved(Outcome),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ActionError {
    #[error("expected phase {expected}, found {found:?}")]
    WrongPhase { expected: &'static str, found: Phase },
    #[error("{} has no hand", .0.name())]
    MissingHand(Seat),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DealError {
    #[error(transparent)]
    Action(#[from] ActionError),
    #[error("corrupt deck: {0}")]
    Parse(#[from] CardParseError),
}

#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Player {
    pub(crate) name: String,
    pub(crate) hand: Option<[Card; 5]>,
    pub(crate) chips: u64,
    pub(crate) bet: u64,
    pub(crate) folded: bool,
}

impl Player {
    fn new(name: &str, chips: u64) -> Self {
        Self { name: name.to_string(), hand: None, chips, bet: 0, folded: false }
    }

    /// Returns the player's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the player's five cards, once dealt
    pub fn hand(&self) -> Option<&[Card; 5]> {
        self.hand.as_ref()
    }

    /// Returns the chips behind (not yet in the pot)
    pub fn chips(&self) -> u64 {
        self.chips
    }

    /// Returns the player's total bet this hand
    pub fn bet(&self) -> u64 {
        self.bet
    }

    pub fn folded(&self) -> bool {
        self.folded
    }
}

/// Chip stacks, pot and dealer button for a heads-up match.
///
/// Stacks persist across hands; everything else is reset when a
/// [`BettingRound`] starts.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Table {
    pub(crate) players: [Player; 2],
    pub(crate) pot: u64,
    pub(crate) dealer: Seat,
    pub(crate) small_blind: u64,
    pub(crate) big_blind: u64,
}

impl Table {
    pub fn new(starting_chips: u64, small_blind: u64, big_blind: u64) -> Self {
        Self::with_stacks([starting_chips, starting_chips], small_blind, big_blind)
    }

    /// A table with uneven stacks, human first.
    pub fn with_stacks(chips: [u64; 2], small_blind: u64, big_blind: u64) -> Self {
        Self {
            players: [
                Player::new(Seat::Human.name(), chips[0]),
                Player::new(Seat::Computer.name(), chips[1]),
            ],
            pot: 0,
            dealer: Seat::Human,
            small_blind,
            big_blind,
        }
    }

    pub fn from_config(config: &MatchConfig) -> Self {
        Self::new(config.starting_chips, config.small_blind, config.big_blind)
    }

    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    pub fn chips(&self) -> [u64; 2] {
        [self.players[0].chips, self.players[1].chips]
    }

    pub fn pot(&self) -> u64 {
        self.pot
    }

    pub fn dealer(&self) -> Seat {
        self.dealer
    }

    pub fn small_blind(&self) -> u64 {
        self.small_blind
    }

    pub fn big_blind(&self) -> u64 {
        self.big_blind
    }

    /// Stacks plus pot; constant for the whole match.
    pub fn total_chips(&self) -> u64 {
        self.players.iter().map(|p| p.chips).sum::<u64>() + self.pot
    }

    /// A match is over once either stack is empty.
    pub fn is_over(&self) -> bool {
        self.players.iter().any(|p| p.chips == 0)
    }

    pub(crate) fn rotate_dealer(&mut self) {
        self.dealer = self.dealer.other();
    }

    fn reset_hand(&mut self) {
        self.pot = 0;
        for p in &mut self.players {
            p.hand = None;
            p.bet = 0;
            p.folded = false;
        }
    }

    /// Move up to `amount` from a stack into that seat's bet and the pot.
    /// Returns what was actually paid.
    fn commit(&mut self, seat: Seat, amount: u64) -> u64 {
        let p = &mut self.players[seat.index()];
        let pay = p.chips.min(amount);
        p.chips -= pay;
        p.bet += pay;
        self.pot += pay;
        debug!("{} pays {pay} (bet {}, pot {})", p.name, p.bet, self.pot);
        pay
    }

    fn award(&mut self, seat: Seat, amount: u64) {
        self.players[seat.index()].chips += amount;
    }
}

/// Result of [`BettingRound::resolve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settlement {
    pub outcome: Outcome,
    pub pot: u64,
    /// Chips paid out of the pot, human first.
    pub awarded: [u64; 2],
    /// Both hands and strengths, present only when the hand went to showdown.
    pub showdown: Option<[([Card; 5], HandStrength); 2]>,
}

/// One hand of heads-up five-card draw.
///
/// Moves through `Idle -> BlindsPosted -> Acting(Human) -> Acting(Computer)
/// -> Closed -> Resolved`. A human fold skips the computer's turn. Each
/// operation checks the phase first and leaves everything untouched on error.
#[derive(Debug)]
pub struct BettingRound<'t> {
    table: &'t mut Table,
    phase: Phase,
    strengths: [Option<HandStrength>; 2],
    history: Vec<ActionRecord>,
}

impl<'t> BettingRound<'t> {
    /// Start a new hand, clearing last hand's bets, cards and pot.
    pub fn new(table: &'t mut Table) -> Self {
        table.reset_hand();
        Self { table, phase: Phase::Idle, strengths: [None, None], history: Vec::new() }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn table(&self) -> &Table {
        self.table
    }

    pub fn history(&self) -> &[ActionRecord] {
        &self.history
    }

    pub fn strength(&self, seat: Seat) -> Option<&HandStrength> {
        self.strengths[seat.index()].as_ref()
    }

    /// Chips `seat` needs to add to match the other bet.
    pub fn to_call(&self, seat: Seat) -> u64 {
        let own = self.table.player(seat).bet;
        self.table.player(seat.other()).bet.saturating_sub(own)
    }

    /// Smallest raise target shown as guidance to the human. Not enforced.
    pub fn min_raise_target(&self) -> u64 {
        self.table.player(Seat::Computer).bet + self.table.big_blind
    }

    /// The largest total bet `seat` can make.
    pub fn max_total(&self, seat: Seat) -> u64 {
        let p = self.table.player(seat);
        p.bet + p.chips
    }

    fn require(&self, expected: Phase, label: &'static str) -> Result<(), ActionError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(ActionError::WrongPhase { expected: label, found: self.phase })
        }
    }

    fn record(&mut self, seat: Seat, verb: ActionVerb, paid: u64) -> ActionRecord {
        let rec = ActionRecord { seat, verb, paid, total: self.table.player(seat).bet };
        self.history.push(rec);
        rec
    }

    /// The dealer posts the small blind and the other seat the big blind,
    /// each capped at what they have.
    pub fn post_blinds(&mut self) -> Result<[ActionRecord; 2], ActionError> {
        self.require(Phase::Idle, "Idle")?;
        let sb_seat = self.table.dealer;
        let bb_seat = sb_seat.other();
        let sb = self.table.commit(sb_seat, self.table.small_blind);
        let sb = self.record(sb_seat, ActionVerb::SmallBlind, sb);
        let bb = self.table.commit(bb_seat, self.table.big_blind);
        let bb = self.record(bb_seat, ActionVerb::BigBlind, bb);
        self.phase = Phase::BlindsPosted;
        Ok([sb, bb])
    }

    /// Deal five cards to each seat, human first, and hand back the rest of the deck.
    pub fn deal_hands(&mut self, deck: Deck) -> Result<Deck, DealError> {
        self.require(Phase::BlindsPosted, "BlindsPosted")?;
        let (human_tokens, deck) = deck.deal(5);
        let (computer_tokens, deck) = deck.deal(5);
        let hands = [hand_from_tokens(&human_tokens)?, hand_from_tokens(&computer_tokens)?];
        for seat in Seat::BOTH {
            let hand = hands[seat.index()];
            self.strengths[seat.index()] = Some(evaluate(&hand));
            self.table.players[seat.index()].hand = Some(hand);
        }
        self.phase = Phase::Acting(Seat::Human);
        Ok(deck)
    }

    /// Apply the human's action.
    ///
    /// A bet names the target total. A target below the computer's bet is
    /// raised to a call; a target beyond the stack goes all in.
    pub fn human_action(&mut self, action: HumanAction) -> Result<ActionRecord, ActionError> {
        self.require(Phase::Acting(Seat::Human), "Acting(Human)")?;
        let seat = Seat::Human;
        let rec = match action {
            HumanAction::Fold => {
                self.table.players[seat.index()].folded = true;
                self.record(seat, ActionVerb::Fold, 0)
            }
            HumanAction::Call => {
                let paid = self.table.commit(seat, self.to_call(seat));
                self.record(seat, ActionVerb::Call, paid)
            }
            HumanAction::Bet(target) => {
                let floor = self.table.player(seat.other()).bet;
                let (target, verb) = if target < floor {
                    warn!("bet of {target} is below the {floor} to call; calling instead");
                    (floor, ActionVerb::Call)
                } else {
                    (target, ActionVerb::Bet)
                };
                let need = target.saturating_sub(self.table.player(seat).bet);
                // Nothing to add is a check.
                let verb = if need == 0 { ActionVerb::Call } else { verb };
                let paid = self.table.commit(seat, need);
                self.record(seat, verb, paid)
            }
        };
        self.phase = match action {
            HumanAction::Fold => Phase::Closed,
            _ => Phase::Acting(Seat::Computer),
        };
        Ok(rec)
    }

    /// Ask `opponent` for the computer's action and apply it.
    pub fn computer_action(
        &mut self,
        opponent: &mut dyn Opponent,
    ) -> Result<ActionRecord, ActionError> {
        self.require(Phase::Acting(Seat::Computer), "Acting(Computer)")?;
        let seat = Seat::Computer;
        let decision = {
            let strength = self.strength(seat).ok_or(ActionError::MissingHand(seat))?;
            let me = self.table.player(seat);
            let ctx = DecisionContext {
                strength,
                call_target: self.table.player(seat.other()).bet,
                bet: me.bet,
                chips: me.chips,
            };
            opponent.decide(&ctx)
        };
        let rec = match decision {
            Decision::Fold => {
                self.table.players[seat.index()].folded = true;
                self.record(seat, ActionVerb::Fold, 0)
            }
            Decision::Call => {
                let paid = self.table.commit(seat, self.to_call(seat));
                self.record(seat, ActionVerb::Call, paid)
            }
            Decision::RaiseTo(target) => {
                let need = target.saturating_sub(self.table.player(seat).bet);
                let paid = self.table.commit(seat, need);
                self.record(seat, ActionVerb::Raise, paid)
            }
        };
        self.phase = Phase::Closed;
        Ok(rec)
    }

    /// Pay out the pot.
    ///
    /// A fold hands the whole pot, including the folder's own bets, to the
    /// other seat. Otherwise the stronger hand takes it; an exact tie splits it
    /// with the odd chip going to the computer.
    pub fn resolve(&mut self) -> Result<Settlement, ActionError> {
        self.require(Phase::Closed, "Closed")?;
        let pot = self.table.pot;
        let (outcome, showdown) = if self.table.player(Seat::Human).folded() {
            (Outcome::Fold { winner: Seat::Computer }, None)
        } else if self.table.player(Seat::Computer).folded() {
            (Outcome::Fold { winner: Seat::Human }, None)
        } else {
            let reveal = |seat: Seat| -> Result<([Card; 5], HandStrength), ActionError> {
                let hand = self.table.player(seat).hand.ok_or(ActionError::MissingHand(seat))?;
                let strength = self.strength(seat).ok_or(ActionError::MissingHand(seat))?;
                Ok((hand, strength.clone()))
            };
            let human = reveal(Seat::Human)?;
            let computer = reveal(Seat::Computer)?;
            let outcome = match compare(&human.1, &computer.1) {
                Ordering::Greater => Outcome::Showdown { winner: Seat::Human },
                Ordering::Less => Outcome::Showdown { winner: Seat::Computer },
                Ordering::Equal => Outcome::Split,
            };
            (outcome, Some([human, computer]))
        };

        let awarded = match outcome.winner() {
            Some(Seat::Human) => [pot, 0],
            Some(Seat::Computer) => [0, pot],
            None => [pot / 2, pot - pot / 2],
        };
        for seat in Seat::BOTH {
            self.table.award(seat, awarded[seat.index()]);
        }
        self.table.pot = 0;
        self.phase = Phase::Resolved(outcome);
        info!("hand resolved: {outcome:?}, pot {pot}, awarded {awarded:?}");
        Ok(Settlement { outcome, pot, awarded, showdown })
    }
}
