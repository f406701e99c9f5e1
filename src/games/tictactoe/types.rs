//! Core domain types for tic-tac-toe.

use super::position::Position;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A mark placed on the board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter, strum::Display,
)]
pub enum Mark {
    /// The human side (goes first).
    X,
    /// The engine side.
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square holding a mark.
    Occupied(Mark),
}

impl Square {
    /// Returns the mark on this square, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Square::Empty => None,
            Square::Occupied(mark) => Some(mark),
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Builds a board from nine squares in row-major order.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Empties the square at the given position.
    pub fn clear(&mut self, pos: Position) {
        self.set(pos, Square::Empty);
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Empty positions in ascending index order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL.into_iter().filter(|&pos| self.is_empty(pos))
    }

    /// Number of squares holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.squares
            .iter()
            .filter(|sq| **sq == Square::Occupied(mark))
            .count()
    }

    /// Formats the board as a human-readable grid.
    ///
    /// Empty squares show their 1-based number when `hints` is set.
    pub fn display(&self, hints: bool) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty if hints => char::from(b'1' + pos as u8),
                    Square::Empty => ' ',
                    Square::Occupied(mark) => mark.symbol(),
                };
                result.push(symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Compact notation: nine characters, `.` for empty.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for square in &self.squares {
            let c = match square {
                Square::Empty => '.',
                Square::Occupied(mark) => mark.symbol(),
            };
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

/// Error parsing a board from its compact notation.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum BoardParseError {
    /// The notation did not describe exactly nine squares.
    #[display("Board must have 9 squares, found {}", _0)]
    WrongLength(usize),

    /// A character that is neither a mark nor an empty marker.
    #[display("Invalid square character {:?}", _0)]
    InvalidSquare(char),
}

impl std::error::Error for BoardParseError {}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses `X`/`O` (any case) and `.`, `_`, `-` or a digit for empty.
    /// Whitespace and `/`, `|` row separators are ignored.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut squares = Vec::with_capacity(9);
        for c in s.chars() {
            let square = match c {
                'X' | 'x' => Square::Occupied(Mark::X),
                'O' | 'o' => Square::Occupied(Mark::O),
                '.' | '_' | '-' => Square::Empty,
                c if c.is_ascii_digit() => Square::Empty,
                c if c.is_whitespace() || c == '/' || c == '|' => continue,
                other => return Err(BoardParseError::InvalidSquare(other)),
            };
            squares.push(square);
        }

        let squares: [Square; 9] = squares
            .try_into()
            .map_err(|v: Vec<Square>| BoardParseError::WrongLength(v.len()))?;
        Ok(Self { squares })
    }
}

/// Outcome classification of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// Play continues.
    InProgress,
    /// A mark completed a line.
    Win(Mark),
    /// Board full with no winner.
    Draw,
}

impl Verdict {
    /// True for `Win` and `Draw`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Verdict::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Verdict::Win(mark) => Some(*mark),
            _ => None,
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::InProgress => write!(f, "In progress"),
            Verdict::Win(mark) => write!(f, "{} wins", mark),
            Verdict::Draw => write!(f, "Draw"),
        }
    }
}
