//! GuessMaster in the terminal
//!
//! Main entry point for the game.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event, execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::info;

use gm_core::{Difficulty, GameOptions, GameSession, OptionsError};
use gm_tui::logging::{self, LOG_FILE_ENV};
use gm_tui::{App, Theme};

/// GuessMaster - guess the hidden number
#[derive(Parser, Debug)]
#[command(name = "guessmaster")]
#[command(author, version, about = "GuessMaster - guess the hidden number!", long_about = None)]
struct Args {
    /// Starting difficulty (easy, medium, hard)
    #[arg(short = 'd', long = "difficulty")]
    difficulty: Option<Difficulty>,

    /// Fixed RNG seed for reproducible rounds
    #[arg(long = "seed")]
    seed: Option<u64>,

    /// Use the light terminal theme
    #[arg(long = "light")]
    light: bool,

    /// Options file (defaults to ~/.guessmasterrc)
    #[arg(long = "config")]
    config: Option<PathBuf>,

    /// Append logs to this file
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,

    /// Verbose logging
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn main() -> io::Result<()> {
    // Parse command-line arguments before terminal setup
    let args = Args::parse();

    let options = match load_options(&args) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("guessmaster: {}", e);
            std::process::exit(2);
        }
    };

    let log_file = args
        .log_file
        .clone()
        .or_else(|| std::env::var_os(LOG_FILE_ENV).map(PathBuf::from));
    if let Some(path) = log_file {
        logging::init(&path, args.verbose)?;
    }

    let session = match options.seed {
        Some(seed) => GameSession::with_seed(seed),
        None => GameSession::new(),
    };
    info!(seed = session.seed(), difficulty = %options.difficulty, "starting");

    let theme = if options.light {
        Theme::light()
    } else {
        Theme::detect()
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(session, options, theme);
    let result = run(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    let tally = app.tally();
    info!(wins = tally.wins, losses = tally.losses, "exiting");

    result
}

/// Main loop: draw, then handle input until the app asks to quit.
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(Duration::from_millis(100))? {
            let event = event::read()?;
            app.handle_event(event);

            if app.should_quit() {
                return Ok(());
            }
        }
    }
}

/// Options file first, then command-line overrides.
fn load_options(args: &Args) -> Result<GameOptions, OptionsError> {
    let mut options = match &args.config {
        Some(path) => GameOptions::load_from_file(path)?,
        None => GameOptions::load_default()?,
    };

    if let Some(difficulty) = args.difficulty {
        options.difficulty = difficulty;
    }
    if args.seed.is_some() {
        options.seed = args.seed;
    }
    if args.light {
        options.light = true;
    }

    Ok(options)
}
