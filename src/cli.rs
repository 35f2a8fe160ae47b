//! Command-line interface for unbeatable_tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Unbeatable tic-tac-toe - play X against a minimax opponent
#[derive(Parser, Debug)]
#[command(name = "unbeatable_tictactoe")]
#[command(about = "Tic-tac-toe against an opponent that never loses", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal (you are X)
    Play {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print every candidate score before each computer move
        #[arg(long)]
        show_analysis: bool,
    },

    /// Print the computer's best move for a position
    Analyze {
        /// Board as nine squares of X, O and '.', row by row (e.g. "X../.O./...")
        #[arg(short, long)]
        board: String,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}
