//! Tic-tac-toe: board model, terminal-state rules, minimax engine and
//! the game session that ties them together.

mod action;
mod game;
mod position;
pub mod rules;
pub mod search;
mod types;

pub use action::{Move, MoveError};
pub use game::{Game, Status};
pub use position::Position;
pub use rules::evaluate;
pub use search::{Candidate, SearchReport, analyze, choose_move};
pub use types::{Board, BoardParseError, Mark, Square, Verdict};
