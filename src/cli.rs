//! Command-line interface for unbeatable_tictactoe.

use clap::{Parser, Subcommand};

/// Unbeatable Tic-Tac-Toe - play X against a minimax engine that never loses
#[derive(Parser, Debug)]
#[command(name = "unbeatable_tictactoe")]
#[command(about = "Tic-tac-toe against an engine that never loses", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults apply if it doesn't exist)
    #[arg(long, global = true, default_value = "tictactoe.toml")]
    pub config: std::path::PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
///
/// Boards are nine characters in row-major order: `X`, `O`, and `.` for
/// empty, e.g. `XX.OO....` or `XX./OO./...`.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game as X
    Play,

    /// Classify a board as won, drawn or in progress
    Evaluate {
        /// Board notation
        #[arg(short, long)]
        board: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print the engine's move for O on a board
    BestMove {
        /// Board notation
        #[arg(short, long)]
        board: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print the score of every engine move on a board
    Analyze {
        /// Board notation
        #[arg(short, long)]
        board: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}
