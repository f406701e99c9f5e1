//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. They record who placed a
//! mark where, and feed the game's history.

use super::{Mark, Position};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a mark placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The mark being placed.
    pub mark: Mark,
    /// The position where the mark is placed.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.label())
    }
}

/// Error that can occur when applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// It's not this mark's turn.
    #[display("It's not {}'s turn", _0)]
    WrongTurn(Mark),
}

impl std::error::Error for MoveError {}
