//! Match controller: plays hands until a stack runs dry or the human quits.
//!
//! Input and output go through a [`Frontend`], so the same loop drives the
//! line console, the full-screen UI and scripted tests.

use crate::agents::{HeuristicOpponent, HumanAction, Opponent};
use crate::cards::Card;
use crate::config::{ConfigError, MatchConfig};
use crate::deck::Deck;
use crate::evaluator::HandStrength;
use crate::game::{
    ActionError, ActionRecord, ActionVerb, BettingRound, DealError, Outcome, Phase, Seat,
    Settlement, Table,
};
use log::info;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::io;

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum MatchError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Action(#[from] ActionError),
    #[error(transparent)]
    Deal(#[from] DealError),
    #[error("frontend I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// What the human sees when it is their turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandView {
    pub cards: [Card; 5],
    pub strength: HandStrength,
    pub chips: u64,
    pub bet: u64,
    pub pot: u64,
    pub opponent_bet: u64,
    pub to_call: u64,
    /// Suggested smallest raise; not enforced.
    pub min_raise: u64,
    pub max_total: u64,
    pub big_blind: u64,
}

impl HandView {
    fn for_human(round: &BettingRound<'_>) -> Result<Self, ActionError> {
        let seat = Seat::Human;
        let table = round.table();
        let me = table.player(seat);
        let missing = ActionError::MissingHand(seat);
        let cards = *me.hand().ok_or_else(|| missing.clone())?;
        let strength = round.strength(seat).ok_or(missing)?.clone();
        Ok(Self {
            cards,
            strength,
            chips: me.chips(),
            bet: me.bet(),
            pot: table.pot(),
            opponent_bet: table.player(seat.other()).bet(),
            to_call: round.to_call(seat),
            min_raise: round.min_raise_target(),
            max_total: round.max_total(seat),
            big_blind: table.big_blind(),
        })
    }
}

/// Final comparison of chip counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Standing {
    HumanAhead,
    ComputerAhead,
    Tied,
}

impl Standing {
    pub fn from_chips(chips: [u64; 2]) -> Self {
        match chips[0].cmp(&chips[1]) {
            std::cmp::Ordering::Greater => Standing::HumanAhead,
            std::cmp::Ordering::Less => Standing::ComputerAhead,
            std::cmp::Ordering::Equal => Standing::Tied,
        }
    }
}

/// Progress reports sent to the frontend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchEvent {
    HandStarted { number: u32, dealer: Seat, blinds: [u64; 2] },
    /// `chips` are the stacks behind, human first, after the blinds.
    BlindsPosted { small: ActionRecord, big: ActionRecord, pot: u64, chips: [u64; 2] },
    HandDealt { cards: [Card; 5], strength: HandStrength },
    Action { record: ActionRecord, pot: u64, chips: [u64; 2] },
    Settled { settlement: Settlement, chips: [u64; 2] },
    MatchOver { standing: Standing, chips: [u64; 2], hands_played: u32 },
}

fn cards_line(cards: &[Card; 5]) -> String {
    cards.iter().map(|c| c.to_string()).collect::<Vec<_>>().join(", ")
}

impl MatchEvent {
    /// Human-readable lines for text frontends.
    pub fn describe(&self) -> Vec<String> {
        match self {
            MatchEvent::HandStarted { number, dealer, blinds } => vec![format!(
                "Hand #{number} (dealer: {}, blinds {}/{})",
                dealer.name(),
                blinds[0],
                blinds[1]
            )],
            MatchEvent::BlindsPosted { small, big, pot, .. } => vec![
                describe_record(small),
                describe_record(big),
                format!("Pot after blinds: {pot} chips"),
            ],
            MatchEvent::HandDealt { cards, strength } => {
                vec![format!("Your hand: {} ({strength})", cards_line(cards))]
            }
            MatchEvent::Action { record, pot, .. } => {
                vec![format!("{}. Pot is now {pot}", describe_record(record))]
            }
            MatchEvent::Settled { settlement, chips } => {
                let mut lines = Vec::new();
                if let Some([(human, hs), (computer, cs)]) = &settlement.showdown {
                    lines.push(format!("Your hand: {} ({hs})", cards_line(human)));
                    lines.push(format!("Computer hand: {} ({cs})", cards_line(computer)));
                }
                lines.push(match settlement.outcome {
                    Outcome::Fold { winner } => format!(
                        "{} folded. {} wins the pot of {} chips!",
                        winner.other().name(),
                        winner.name(),
                        settlement.pot
                    ),
                    Outcome::Showdown { winner: Seat::Human } => {
                        format!("You win the pot of {} chips!", settlement.pot)
                    }
                    Outcome::Showdown { winner: Seat::Computer } => {
                        format!("Computer wins the pot of {} chips!", settlement.pot)
                    }
                    Outcome::Split => format!(
                        "It's a tie! Pot is split {} / {}.",
                        settlement.awarded[0], settlement.awarded[1]
                    ),
                });
                lines.push(format!("Chip counts - You: {}, Computer: {}", chips[0], chips[1]));
                lines
            }
            MatchEvent::MatchOver { standing, chips, hands_played } => vec![
                format!("Game over after {hands_played} hands."),
                match standing {
                    Standing::HumanAhead => "Congratulations! You won overall!".to_string(),
                    Standing::ComputerAhead => "Computer wins overall!".to_string(),
                    Standing::Tied => "It's a tie!".to_string(),
                },
                format!("Final chips - You: {}, Computer: {}", chips[0], chips[1]),
            ],
        }
    }
}

fn describe_record(rec: &ActionRecord) -> String {
    let who = rec.seat.name();
    let verb = rec.verb.label_for(rec.seat);
    match rec.verb {
        ActionVerb::Fold => format!("{who} {verb}"),
        ActionVerb::SmallBlind | ActionVerb::BigBlind => format!("{who} {verb} of {}", rec.paid),
        ActionVerb::Call => format!("{who} {verb} with {} (total bet {})", rec.paid, rec.total),
        _ => format!("{who} {verb} {} (added {})", rec.total, rec.paid),
    }
}

/// The human side of the match: shows progress and collects choices.
pub trait Frontend {
    fn notify(&mut self, event: &MatchEvent) -> io::Result<()>;
    fn choose_action(&mut self, view: &HandView) -> io::Result<HumanAction>;
    /// Asked between hands; `false` ends the match.
    fn keep_playing(&mut self) -> io::Result<bool>;
}

/// A heads-up match: one table, one shuffling RNG and the computer opponent.
#[derive(Debug)]
pub struct Match<O = HeuristicOpponent> {
    table: Table,
    rng: ChaCha8Rng,
    opponent: O,
    hands_played: u32,
}

impl Match<HeuristicOpponent> {
    /// A match against the heuristic opponent. With a seed, every shuffle and
    /// opponent decision is reproducible.
    pub fn new(config: &MatchConfig) -> Result<Self, MatchError> {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => {
                let mut seed = [0u8; 32];
                rand::rng().fill_bytes(&mut seed);
                ChaCha8Rng::from_seed(seed)
            }
        };
        let opponent = HeuristicOpponent::seeded(rng.random());
        Self::with_opponent(config, rng, opponent)
    }
}

impl<O: Opponent> Match<O> {
    pub fn with_opponent(
        config: &MatchConfig,
        rng: ChaCha8Rng,
        opponent: O,
    ) -> Result<Self, MatchError> {
        config.validate()?;
        Ok(Self { table: Table::from_config(config), rng, opponent, hands_played: 0 })
    }

    /// Replace the table, e.g. to resume with particular stacks.
    pub fn with_table(mut self, table: Table) -> Self {
        self.table = table;
        self
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn hands_played(&self) -> u32 {
        self.hands_played
    }

    pub fn is_over(&self) -> bool {
        self.table.is_over()
    }

    pub fn standing(&self) -> Standing {
        Standing::from_chips(self.table.chips())
    }

    /// Play one complete hand and move the dealer button.
    pub fn play_hand(&mut self, frontend: &mut dyn Frontend) -> Result<Settlement, MatchError> {
        self.hands_played += 1;
        let number = self.hands_played;
        info!("starting hand #{number}, dealer {:?}", self.table.dealer());
        frontend.notify(&MatchEvent::HandStarted {
            number,
            dealer: self.table.dealer(),
            blinds: [self.table.small_blind(), self.table.big_blind()],
        })?;

        let deck = Deck::shuffled(&mut self.rng);
        let mut round = BettingRound::new(&mut self.table);
        let [small, big] = round.post_blinds()?;
        let (pot, chips) = (round.table().pot(), round.table().chips());
        frontend.notify(&MatchEvent::BlindsPosted { small, big, pot, chips })?;

        round.deal_hands(deck)?;
        let view = HandView::for_human(&round)?;
        frontend.notify(&MatchEvent::HandDealt {
            cards: view.cards,
            strength: view.strength.clone(),
        })?;

        let action = frontend.choose_action(&view)?;
        let record = round.human_action(action)?;
        let (pot, chips) = (round.table().pot(), round.table().chips());
        frontend.notify(&MatchEvent::Action { record, pot, chips })?;

        if round.phase() == Phase::Acting(Seat::Computer) {
            let record = round.computer_action(&mut self.opponent)?;
            let (pot, chips) = (round.table().pot(), round.table().chips());
            frontend.notify(&MatchEvent::Action { record, pot, chips })?;
        }

        let settlement = round.resolve()?;
        let chips = self.table.chips();
        info!("hand #{number} settled, chips {chips:?}");
        frontend.notify(&MatchEvent::Settled { settlement: settlement.clone(), chips })?;
        self.table.rotate_dealer();
        Ok(settlement)
    }

    /// Play hands until a stack is empty or the frontend declines to go on.
    pub fn run(&mut self, frontend: &mut dyn Frontend) -> Result<Standing, MatchError> {
        while !self.is_over() {
            self.play_hand(frontend)?;
            if self.is_over() {
                break;
            }
            if !frontend.keep_playing()? {
                info!("player quit after {} hands", self.hands_played);
                break;
            }
        }
        let standing = self.standing();
        let chips = self.table.chips();
        info!("match over: {standing:?}, chips {chips:?}");
        frontend.notify(&MatchEvent::MatchOver {
            standing,
            chips,
            hands_played: self.hands_played,
        })?;
        Ok(standing)
    }
}
