use clap::Parser;
use draw_poker::config::MatchConfig;
use draw_poker::console::Console;
use draw_poker::session::{Match, MatchError};
use draw_poker::tui::TuiFrontend;
use log::{error, LevelFilter};
use std::io::{self, IsTerminal};
use std::process::ExitCode;

/// Heads-up five-card draw against the computer.
#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    /// Starting chips for each player.
    #[arg(long, default_value_t = MatchConfig::DEFAULT_CHIPS)]
    chips: u64,
    /// Small blind, posted by the dealer.
    #[arg(long, default_value_t = MatchConfig::DEFAULT_SMALL_BLIND)]
    small_blind: u64,
    /// Big blind, posted by the other player.
    #[arg(long, default_value_t = MatchConfig::DEFAULT_BIG_BLIND)]
    big_blind: u64,
    /// Seed for reproducible shuffles and opponent decisions.
    #[arg(long, short)]
    seed: Option<u64>,
    /// Use the line-based console instead of the full-screen interface.
    #[arg(long, short)]
    plain: bool,
    /// Log chip movements and opponent decisions.
    #[arg(long, short)]
    verbose: bool,
}

impl Cli {
    fn config(&self) -> MatchConfig {
        MatchConfig {
            starting_chips: self.chips,
            small_blind: self.small_blind,
            big_blind: self.big_blind,
            seed: self.seed,
        }
    }
}

fn run(cli: &Cli, plain: bool) -> Result<(), MatchError> {
    let mut game = Match::new(&cli.config())?;
    if plain {
        let mut console = Console::stdio();
        game.run(&mut console)?;
        return Ok(());
    }
    let mut tui = TuiFrontend::start()?;
    let res = game.run(&mut tui);
    // Always attempt to restore terminal
    tui.restore()?;
    res.map(|_| ())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let plain = cli.plain || !io::stdout().is_terminal();

    // Log lines would tear the full-screen view, so it stays quiet unless asked.
    let level = match (cli.verbose, plain) {
        (true, _) => LevelFilter::Debug,
        (false, true) => LevelFilter::Warn,
        (false, false) => LevelFilter::Off,
    };
    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    match run(&cli, plain) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("draw-poker: {e}");
            ExitCode::FAILURE
        }
    }
}
