use crate::agents::HumanAction;
use crate::session::{Frontend, HandView, MatchEvent};
use crate::tui::app::{AppState, InputAction, Prompt, Reply};
use crate::tui::ui;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::prelude::{CrosstermBackend, Terminal};
use std::io::{self, Stdout};

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Map a key press to an input action for the current prompt.
pub fn handle_key(app: &mut AppState, code: KeyCode) -> Option<Reply> {
    let action = match (&app.prompt, code) {
        (Prompt::Amount(_), KeyCode::Esc) => InputAction::AmountCancel,
        (Prompt::Amount(_), KeyCode::Enter) => InputAction::AmountSubmit,
        (Prompt::Amount(_), KeyCode::Backspace) => InputAction::AmountBackspace,
        (Prompt::Amount(_), KeyCode::Char('+') | KeyCode::Char('=')) => InputAction::AmountIncBb,
        (Prompt::Amount(_), KeyCode::Char('-') | KeyCode::Char('_')) => InputAction::AmountDecBb,
        (Prompt::Amount(_), KeyCode::Char(c)) if c.is_ascii_digit() => {
            InputAction::AmountDigit(c as u8 - b'0')
        }
        (Prompt::Amount(_), _) => return None,
        (_, KeyCode::Char('1') | KeyCode::Char('b') | KeyCode::Char('B')) => InputAction::Bet,
        (_, KeyCode::Char('2') | KeyCode::Char('c') | KeyCode::Char('C')) => InputAction::Call,
        (_, KeyCode::Char('3') | KeyCode::Char('f') | KeyCode::Char('F')) => InputAction::Fold,
        (_, KeyCode::Char(' ') | KeyCode::Enter) => InputAction::Continue,
        (_, KeyCode::Char('q') | KeyCode::Char('Q')) => InputAction::Quit,
        _ => return None,
    };
    app.handle_input(action)
}

fn setup_terminal() -> io::Result<Term> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, crossterm::terminal::EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

/// Full-screen [`Frontend`]: redraws on every event and blocks on key presses
/// whenever the match needs an answer.
pub struct TuiFrontend {
    terminal: Term,
    app: AppState,
}

impl TuiFrontend {
    /// Switch the terminal to raw mode and the alternate screen.
    pub fn start() -> io::Result<Self> {
        let terminal = setup_terminal()?;
        Ok(Self { terminal, app: AppState::default() })
    }

    /// Give the terminal back to the shell.
    pub fn restore(mut self) -> io::Result<()> {
        disable_raw_mode()?;
        crossterm::execute!(self.terminal.backend_mut(), crossterm::terminal::LeaveAlternateScreen)?;
        self.terminal.show_cursor()
    }

    fn draw(&mut self) -> io::Result<()> {
        let app = &self.app;
        self.terminal.draw(|f| ui::draw(f, app))?;
        Ok(())
    }

    fn wait_for_reply(&mut self) -> io::Result<Reply> {
        loop {
            self.draw()?;
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if let Some(reply) = handle_key(&mut self.app, key.code) {
                    self.draw()?;
                    return Ok(reply);
                }
            }
        }
    }
}

impl Frontend for TuiFrontend {
    fn notify(&mut self, event: &MatchEvent) -> io::Result<()> {
        self.app.apply_event(event);
        if matches!(event, MatchEvent::MatchOver { .. }) {
            self.wait_for_reply()?;
            return Ok(());
        }
        self.draw()
    }

    fn choose_action(&mut self, view: &HandView) -> io::Result<HumanAction> {
        self.app.begin_action(view.clone());
        loop {
            if let Reply::Action(action) = self.wait_for_reply()? {
                return Ok(action);
            }
        }
    }

    fn keep_playing(&mut self) -> io::Result<bool> {
        if self.app.quit_requested() {
            return Ok(false);
        }
        self.app.begin_continue();
        loop {
            if let Reply::Continue(go_on) = self.wait_for_reply()? {
                return Ok(go_on);
            }
        }
    }
}
