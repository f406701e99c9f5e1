//! Exhaustive minimax search for the engine side.
//!
//! The engine always plays [`ENGINE`] (O) against [`HUMAN`] (X). Every node
//! is scored with [`evaluate`](super::rules::evaluate): an O win is
//! [`WIN_SCORE`], an X win is [`LOSS_SCORE`], a draw is [`DRAW_SCORE`].
//! Scores are not depth-adjusted and there is no pruning, so the choice
//! among equally scored root moves falls to the lowest empty index.

use super::rules::evaluate;
use super::{Board, Mark, Position, Square, Verdict};
use derive_getters::Getters;
use serde::Serialize;
use std::ops::{Deref, DerefMut};
use tracing::{debug, instrument};

/// The side the engine maximizes for.
pub const ENGINE: Mark = Mark::O;

/// The side the engine minimizes for.
pub const HUMAN: Mark = Mark::X;

/// Score of a board the engine has won.
pub const WIN_SCORE: i32 = 10;

/// Score of a board the engine has lost.
pub const LOSS_SCORE: i32 = -10;

/// Score of a drawn board.
pub const DRAW_SCORE: i32 = 0;

/// A trial placement on a working board.
///
/// The square is emptied again when the guard drops, on every exit path.
struct Trial<'a> {
    board: &'a mut Board,
    pos: Position,
}

impl<'a> Trial<'a> {
    fn place(board: &'a mut Board, pos: Position, mark: Mark) -> Self {
        board.set(pos, Square::Occupied(mark));
        Self { board, pos }
    }
}

impl Deref for Trial<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Trial<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Trial<'_> {
    fn drop(&mut self) {
        self.board.clear(self.pos);
    }
}

/// One root move and the minimax score it leads to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_new::new)]
pub struct Candidate {
    /// Square the engine would take.
    pub position: Position,
    /// Score of the resulting board with X to move.
    pub score: i32,
}

/// Full result of a root search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct SearchReport {
    /// Every empty square, in ascending index order, with its score.
    candidates: Vec<Candidate>,
    /// The chosen candidate, if any square was empty.
    best: Option<Candidate>,
    /// Number of nodes scored below the root.
    nodes: u64,
}

impl SearchReport {
    /// The chosen square, if any square was empty.
    pub fn best_move(&self) -> Option<Position> {
        self.best.map(|candidate| candidate.position)
    }
}

/// Minimax value of `board` with the given side to move.
///
/// `maximizing` means O moves next. The caller's board is left untouched.
pub fn score(board: &Board, maximizing: bool) -> i32 {
    let mut working = *board;
    let mut nodes = 0;
    minimax(&mut working, maximizing, &mut nodes)
}

fn minimax(board: &mut Board, maximizing: bool, nodes: &mut u64) -> i32 {
    *nodes += 1;

    match evaluate(board) {
        Verdict::Win(ENGINE) => return WIN_SCORE,
        Verdict::Win(_) => return LOSS_SCORE,
        Verdict::Draw => return DRAW_SCORE,
        Verdict::InProgress => {}
    }

    let mover = if maximizing { ENGINE } else { HUMAN };
    let mut best: Option<i32> = None;

    for pos in Position::ALL {
        if !board.is_empty(pos) {
            continue;
        }

        let child = {
            let mut trial = Trial::place(board, pos, mover);
            minimax(&mut trial, !maximizing, nodes)
        };

        best = Some(match best {
            None => child,
            Some(current) if maximizing => current.max(child),
            Some(current) => current.min(child),
        });
    }

    // An in-progress board always has an empty square.
    best.unwrap_or(DRAW_SCORE)
}

/// Scores every engine move from `board` and picks the best one.
///
/// Each empty square is tried in ascending order and scored with X to
/// move. A candidate replaces the current best only on a strictly greater
/// score, so the earliest square wins ties.
#[instrument(skip(board), fields(board = %board))]
pub fn analyze(board: &Board) -> SearchReport {
    let mut working = *board;
    let mut nodes = 0;
    let mut candidates = Vec::new();
    let mut best: Option<Candidate> = None;

    for pos in Position::ALL {
        if !working.is_empty(pos) {
            continue;
        }

        let score = {
            let mut trial = Trial::place(&mut working, pos, ENGINE);
            minimax(&mut trial, false, &mut nodes)
        };

        let candidate = Candidate::new(pos, score);
        candidates.push(candidate);
        best = match best {
            Some(current) if candidate.score <= current.score => Some(current),
            _ => Some(candidate),
        };
    }

    debug!(
        best = ?best.map(|c| c.position),
        best_score = ?best.map(|c| c.score),
        nodes,
        "Search complete"
    );

    SearchReport {
        candidates,
        best,
        nodes,
    }
}

/// Chooses the engine's move, or `None` when the board has no empty square.
#[instrument(skip(board), fields(board = %board))]
pub fn choose_move(board: &Board) -> Option<Position> {
    analyze(board).best_move()
}
