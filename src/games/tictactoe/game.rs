//! Game session for tic-tac-toe: human X against the engine's O.

use super::action::{Move, MoveError};
use super::rules::evaluate;
use super::search::{ENGINE, HUMAN, choose_move};
use super::{Board, Mark, Position, Square, Verdict};
use tracing::{debug, info, instrument};

/// Tic-tac-toe game state machine.
///
/// Starts with an empty board and X to move. Every placement recomputes
/// the verdict; once it is terminal, further placements are rejected
/// until [`Game::reset`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    to_move: Mark,
    verdict: Verdict,
    history: Vec<Move>,
}

impl Game {
    /// Creates a new game.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: HUMAN,
            verdict: Verdict::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark to move next.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns the current verdict.
    pub fn verdict(&self) -> Verdict {
        self.verdict
    }

    /// Returns the moves played so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// True once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.verdict.is_terminal()
    }

    /// Places the side-to-move's mark at `pos`.
    ///
    /// # Errors
    ///
    /// `GameOver` once the game has a verdict, `SquareOccupied` if `pos`
    /// is taken.
    #[instrument(skip(self), fields(mark = %self.to_move))]
    pub fn place(&mut self, pos: Position) -> Result<Verdict, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let mark = self.to_move;
        self.board.set(pos, Square::Occupied(mark));
        self.history.push(Move::new(mark, pos));
        self.verdict = evaluate(&self.board);

        if self.is_over() {
            info!(verdict = %self.verdict, moves = self.history.len(), "Game over");
        } else {
            self.to_move = mark.opponent();
        }

        debug!(%mark, position = %pos, "Move applied");
        Ok(self.verdict)
    }

    /// Lets the engine play its turn.
    ///
    /// Returns the square taken, or `None` if no square was empty.
    ///
    /// # Errors
    ///
    /// `GameOver` once the game has a verdict, `WrongTurn` when X is to move.
    #[instrument(skip(self))]
    pub fn play_engine(&mut self) -> Result<Option<Position>, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if self.to_move != ENGINE {
            return Err(MoveError::WrongTurn(ENGINE));
        }

        match choose_move(&self.board) {
            Some(pos) => {
                self.place(pos)?;
                Ok(Some(pos))
            }
            None => Ok(None),
        }
    }

    /// Starts over with an empty board and X to move.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!(moves = self.history.len(), "Resetting game");
        *self = Self::new();
    }

    /// Status line for the current state.
    pub fn status(&self) -> Status {
        match self.verdict {
            Verdict::InProgress => Status::NextPlayer(self.to_move),
            Verdict::Win(mark) => Status::Winner(mark),
            Verdict::Draw => Status::Draw,
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

/// Human-readable game status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Status {
    /// Play continues with this mark to move.
    #[display("Next player: {}", _0)]
    NextPlayer(Mark),
    /// This mark has won.
    #[display("Winner: {}", _0)]
    Winner(Mark),
    /// Nobody won.
    #[display("Draw!")]
    Draw,
}
