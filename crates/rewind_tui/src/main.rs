//! Rewind - tic-tac-toe with time travel.
//!
//! `rewind play` opens the terminal UI; `rewind replay` plays a scripted
//! list of cells and prints the result.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod replay;
mod ui;

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use cli::{Cli, Command};
use config::RewindConfig;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use rewind_tictactoe::HistoryOrder;
use std::io;
use std::path::Path;
use tracing::{error, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = RewindConfig::load_or_default(&cli.config)?;

    match cli.command {
        Command::Play { descending } => {
            let config = if descending {
                config.with_history_order(HistoryOrder::Descending)
            } else {
                config
            };
            run_play(&cli.config, &config)
        }
        Command::Replay {
            moves,
            jump,
            descending,
            json,
        } => {
            let order = if descending {
                HistoryOrder::Descending
            } else {
                *config.history_order()
            };
            run_replay(&cli.config, &config, &moves, jump, order, json)
        }
    }
}

fn env_filter(config: &RewindConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()))
}

/// Run the terminal UI.
fn run_play(config_path: &Path, config: &RewindConfig) -> Result<()> {
    // Log to a file; the terminal belongs to the UI.
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    config.log_loaded(config_path);
    info!("Starting rewind TUI");

    let guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let mut app = App::new(*config.history_order());
    let res = run_app(&mut terminal, &mut app);

    drop(guard);
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Raw mode and the alternate screen, undone on drop.
///
/// Restores whatever was switched on even if setup fails halfway or the
/// game loop returns early.
struct TerminalGuard {
    raw_mode: bool,
    alternate_screen: bool,
}

impl TerminalGuard {
    fn enter() -> Result<Self> {
        let mut guard = Self {
            raw_mode: false,
            alternate_screen: false,
        };
        enable_raw_mode().context("Failed to enable raw mode")?;
        guard.raw_mode = true;
        execute!(io::stdout(), EnterAlternateScreen)
            .context("Failed to enter alternate screen")?;
        guard.alternate_screen = true;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.alternate_screen
            && let Err(e) = execute!(io::stdout(), LeaveAlternateScreen)
        {
            error!(error = %e, "Failed to leave alternate screen");
        }
        if self.raw_mode
            && let Err(e) = disable_raw_mode()
        {
            error!(error = %e, "Failed to disable raw mode");
        }
    }
}

/// Draw, then block on the next key press, until the user quits.
#[instrument(skip_all)]
fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|f| ui::draw(f, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key.code);
        }
    }
    info!("Game loop finished");
    Ok(())
}

/// Run a headless replay and print the report.
fn run_replay(
    config_path: &Path,
    config: &RewindConfig,
    moves: &str,
    jump: Option<usize>,
    order: HistoryOrder,
    json: bool,
) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(io::stderr)
        .init();
    config.log_loaded(config_path);

    let moves = replay::parse_moves(moves)?;
    let game = replay::replay(&moves, jump, order);

    let report = if json {
        replay::render_json(&game)?
    } else {
        replay::render_text(&game)
    };
    println!("{}", report);
    Ok(())
}
