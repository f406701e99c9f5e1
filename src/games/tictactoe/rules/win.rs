//! Win detection logic for tic-tac-toe.

use super::super::{Board, Mark, Position};

/// The eight winning lines: rows, then columns, then diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Lines are scanned in [`LINES`] order and the first complete line wins.
/// Returns `Some(mark)` if that mark has three in a row, `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Mark> {
    LINES.iter().find_map(|&[a, b, c]| {
        let mark = board.get(a).mark()?;
        (board.get(b) == board.get(a) && board.get(c) == board.get(a)).then_some(mark)
    })
}
