//! Command-line interface for rewind.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Rewind - tic-tac-toe with time travel
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(about = "Tic-tac-toe with a move history you can jump through", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, global = true, default_value = "rewind.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Start with the move list in descending order
        #[arg(long)]
        descending: bool,
    },

    /// Play a list of cells without a UI and print the result
    Replay {
        /// Comma-separated cell indices (0-8), e.g. "4,0,8"
        #[arg(short, long, default_value = "")]
        moves: String,

        /// Jump to this move after playing
        #[arg(short, long)]
        jump: Option<usize>,

        /// Show the move list in descending order
        #[arg(long)]
        descending: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}
