//! Line-based frontend over any reader and writer.

use crate::agents::{bet_amount_or_zero, menu_choice_or_fold, HumanAction, MenuChoice};
use crate::session::{Frontend, HandView, MatchEvent};
use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

/// Plays the human seat through text prompts.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<BufReader<Stdin>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Next input line without its terminator; `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        self.read_line()
    }
}

impl<R: BufRead, W: Write> Frontend for Console<R, W> {
    fn notify(&mut self, event: &MatchEvent) -> io::Result<()> {
        if matches!(event, MatchEvent::HandStarted { .. }) {
            writeln!(self.output)?;
        }
        for line in event.describe() {
            writeln!(self.output, "{line}")?;
        }
        Ok(())
    }

    fn choose_action(&mut self, view: &HandView) -> io::Result<HumanAction> {
        writeln!(
            self.output,
            "Your chips: {}  Your bet: {}  Computer bet: {}  Pot: {}",
            view.chips, view.bet, view.opponent_bet, view.pot
        )?;
        writeln!(self.output, "Choose your action:")?;
        writeln!(self.output, "{}. Bet", MenuChoice::Bet.key())?;
        writeln!(self.output, "{}. Call ({} more)", MenuChoice::Call.key(), view.to_call)?;
        writeln!(self.output, "{}. Fold", MenuChoice::Fold.key())?;
        // End of input folds the hand.
        let Some(choice) = self.prompt("> ")? else {
            return Ok(HumanAction::Fold);
        };
        Ok(match menu_choice_or_fold(&choice) {
            MenuChoice::Call => HumanAction::Call,
            MenuChoice::Fold => HumanAction::Fold,
            MenuChoice::Bet => {
                writeln!(
                    self.output,
                    "Enter your total bet ({} to call, {} or more to raise, at most {}):",
                    view.opponent_bet, view.min_raise, view.max_total
                )?;
                let amount = self.prompt("> ")?.unwrap_or_default();
                HumanAction::Bet(bet_amount_or_zero(&amount))
            }
        })
    }

    fn keep_playing(&mut self) -> io::Result<bool> {
        let line = self.prompt("Press Enter for the next hand or type 'quit' to stop: ")?;
        Ok(match line {
            Some(l) => l.trim() != "quit",
            None => false,
        })
    }
}
