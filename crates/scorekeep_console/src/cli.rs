//! Command-line interface for scorekeep.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Scorekeep - two-player tic-tac-toe with a running score
#[derive(Parser, Debug)]
#[command(name = "scorekeep")]
#[command(about = "Two-player tic-tac-toe that keeps score across games", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults apply if it doesn't exist)
    #[arg(short, long, global = true, default_value = "scorekeep.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively on the terminal
    Play {
        /// Name for the contestant playing X (prompted if omitted)
        #[arg(long)]
        player_x: Option<String>,

        /// Name for the contestant playing O (prompted if omitted)
        #[arg(long)]
        player_o: Option<String>,
    },

    /// Play a single game from a list of moves and print the result
    Script {
        /// Emit a JSON report instead of the board
        #[arg(long)]
        json: bool,

        /// Name for the contestant playing X
        #[arg(long)]
        player_x: Option<String>,

        /// Name for the contestant playing O
        #[arg(long)]
        player_o: Option<String>,

        /// Moves as row then column, X first (e.g. 11 00 22)
        #[arg(required = true)]
        moves: Vec<String>,
    },
}
