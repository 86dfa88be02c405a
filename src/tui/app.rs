use crate::agents::{bet_amount_or_zero, HumanAction};
use crate::cards::Card;
use crate::evaluator::HandStrength;
use crate::game::Seat;
use crate::session::{HandView, MatchEvent};

/// What the screen is waiting for.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Prompt {
    Idle,
    Action,
    /// Bet amount being typed.
    Amount(String),
    Continue,
    GameOver,
}

/// High-level input actions for the TUI controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputAction {
    Bet,
    Call,
    Fold,
    AmountDigit(u8),
    AmountBackspace,
    AmountIncBb,
    AmountDecBb,
    AmountSubmit,
    AmountCancel,
    Continue,
    Quit,
}

/// An answer for the match loop produced by user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    Action(HumanAction),
    /// `false` stops the match.
    Continue(bool),
}

#[derive(Debug)]
#[non_exhaustive]
pub struct AppState {
    pub prompt: Prompt,
    pub hand_number: u32,
    pub dealer: Option<Seat>,
    /// Small and big blind of the current hand.
    pub blinds: [u64; 2],
    pub chips: [u64; 2],
    pub pot: u64,
    pub(crate) hand: Option<([Card; 5], HandStrength)>,
    pub(crate) view: Option<HandView>,
    log: Vec<String>,
    quit_requested: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            prompt: Prompt::Idle,
            hand_number: 0,
            dealer: None,
            blinds: [0, 0],
            chips: [0, 0],
            pot: 0,
            hand: None,
            view: None,
            log: Vec::new(),
            quit_requested: false,
        }
    }
}

impl AppState {
    pub const LOG_LIMIT: usize = 500;
    const AMOUNT_MAX_DIGITS: usize = 12;

    pub fn log(&self) -> &[String] {
        &self.log
    }

    /// The human's cards and their strength for the current hand.
    pub fn hand(&self) -> Option<&([Card; 5], HandStrength)> {
        self.hand.as_ref()
    }

    /// Betting figures while the human is to act.
    pub fn view(&self) -> Option<&HandView> {
        self.view.as_ref()
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    pub fn amount_entry_active(&self) -> bool {
        matches!(self.prompt, Prompt::Amount(_))
    }

    pub fn amount_entry_text(&self) -> Option<&str> {
        match &self.prompt {
            Prompt::Amount(buf) => Some(buf),
            _ => None,
        }
    }

    fn push_log(&mut self, line: String) {
        self.log.push(line);
        if self.log.len() > Self::LOG_LIMIT {
            let excess = self.log.len() - Self::LOG_LIMIT;
            self.log.drain(..excess);
        }
    }

    /// Fold a match event into the displayed state.
    pub fn apply_event(&mut self, event: &MatchEvent) {
        match event {
            MatchEvent::HandStarted { number, dealer, blinds } => {
                self.hand_number = *number;
                self.dealer = Some(*dealer);
                self.blinds = *blinds;
                self.hand = None;
                self.view = None;
                self.pot = 0;
            }
            MatchEvent::BlindsPosted { pot, chips, .. } | MatchEvent::Action { pot, chips, .. } => {
                self.pot = *pot;
                self.chips = *chips;
            }
            MatchEvent::HandDealt { cards, strength } => {
                self.hand = Some((*cards, strength.clone()));
            }
            MatchEvent::Settled { chips, .. } => {
                self.chips = *chips;
                self.pot = 0;
                self.view = None;
            }
            MatchEvent::MatchOver { chips, .. } => {
                self.chips = *chips;
                self.prompt = Prompt::GameOver;
            }
        }
        for line in event.describe() {
            self.push_log(line);
        }
    }

    pub fn begin_action(&mut self, view: HandView) {
        self.chips[Seat::Human.index()] = view.chips;
        self.pot = view.pot;
        self.view = Some(view);
        self.prompt = Prompt::Action;
    }

    pub fn begin_continue(&mut self) {
        self.prompt = Prompt::Continue;
    }

    fn open_amount_entry(&mut self) {
        let prefill = self.view.as_ref().map(|v| v.min_raise.min(v.max_total)).unwrap_or(0);
        self.prompt = Prompt::Amount(prefill.to_string());
    }

    fn big_blind(&self) -> u64 {
        self.view.as_ref().map(|v| v.big_blind).unwrap_or(1).max(1)
    }

    fn edit_amount(&mut self, action: InputAction) {
        let step = self.big_blind();
        let Prompt::Amount(buf) = &mut self.prompt else {
            return;
        };
        match action {
            InputAction::AmountDigit(d) if buf.len() < Self::AMOUNT_MAX_DIGITS => {
                buf.push(char::from(b'0' + d));
            }
            InputAction::AmountBackspace => {
                buf.pop();
            }
            InputAction::AmountIncBb => {
                let cur = buf.parse::<u64>().unwrap_or(0);
                *buf = cur.saturating_add(step).to_string();
            }
            InputAction::AmountDecBb => {
                let cur = buf.parse::<u64>().unwrap_or(0);
                *buf = cur.saturating_sub(step).to_string();
            }
            _ => {}
        }
    }

    /// Apply one input. Returns a reply once the match loop can proceed.
    pub fn handle_input(&mut self, action: InputAction) -> Option<Reply> {
        match self.prompt.clone() {
            Prompt::Action => match action {
                InputAction::Bet => {
                    self.open_amount_entry();
                    None
                }
                InputAction::Call => self.act(HumanAction::Call),
                InputAction::Fold => self.act(HumanAction::Fold),
                InputAction::Quit => {
                    self.quit_requested = true;
                    self.push_log("Quitting after this hand.".to_string());
                    self.act(HumanAction::Fold)
                }
                _ => None,
            },
            Prompt::Amount(buf) => match action {
                InputAction::AmountSubmit => self.act(HumanAction::Bet(bet_amount_or_zero(&buf))),
                InputAction::AmountCancel => {
                    self.prompt = Prompt::Action;
                    None
                }
                _ => {
                    self.edit_amount(action);
                    None
                }
            },
            Prompt::Continue => match action {
                InputAction::Continue => self.reply_continue(true),
                InputAction::Quit => self.reply_continue(false),
                _ => None,
            },
            Prompt::GameOver => match action {
                InputAction::Continue | InputAction::Quit => Some(Reply::Continue(false)),
                _ => None,
            },
            Prompt::Idle => None,
        }
    }

    fn act(&mut self, action: HumanAction) -> Option<Reply> {
        self.prompt = Prompt::Idle;
        Some(Reply::Action(action))
    }

    fn reply_continue(&mut self, go_on: bool) -> Option<Reply> {
        self.prompt = Prompt::Idle;
        if !go_on {
            self.quit_requested = true;
        }
        Some(Reply::Continue(go_on))
    }
}
