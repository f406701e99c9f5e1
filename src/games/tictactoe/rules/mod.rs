//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for classifying a board. Rules are
//! separated from board storage so the game session and the search engine
//! share one terminal-state oracle.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner};

use super::{Board, Verdict};

/// Classifies a board as won, drawn or still in progress.
///
/// Always performs the eight line checks, then the fullness check.
pub fn evaluate(board: &Board) -> Verdict {
    if let Some(mark) = check_winner(board) {
        Verdict::Win(mark)
    } else if is_full(board) {
        Verdict::Draw
    } else {
        Verdict::InProgress
    }
}
