//! Unbeatable Tic-Tac-Toe library
//!
//! A 3x3 game where O is played by an exhaustive minimax engine that
//! never loses.
//!
//! # Architecture
//!
//! - **Rules**: terminal-state detection ([`evaluate`])
//! - **Search**: full-depth minimax for O ([`choose_move`], [`analyze`])
//! - **Game**: turn-taking session with history and reset ([`Game`])
//! - **Terminal**: line-oriented play loop ([`terminal::run`])
//!
//! # Example
//!
//! ```
//! use unbeatable_tictactoe::{Board, Position, Verdict, choose_move, evaluate};
//!
//! let board: Board = "XX./OO./...".parse()?;
//! assert_eq!(evaluate(&board), Verdict::InProgress);
//! assert!(choose_move(&board).is_some_and(|pos| pos != Position::TopLeft));
//! # Ok::<(), unbeatable_tictactoe::BoardParseError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;

pub mod terminal;

// Crate-level exports - Configuration
pub use config::{ConfigError, PlayConfig};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, BoardParseError, Candidate, Game, Mark, Move, MoveError, Position, SearchReport,
    Square, Status, Verdict, analyze, choose_move, evaluate,
};

// Crate-level exports - Engine internals
pub use games::tictactoe::{rules, search};
