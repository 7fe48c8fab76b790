//! Cells of the 3x3 board.

use crate::types::ParseError;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// A cell on the board (index 0-8, row-major).
///
/// Algebraic names use a column letter and a row number with row 1 at the
/// top: `a1` is the top-left cell, `c3` the bottom-right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Position {
    /// Top-left (index 0, `a1`).
    TopLeft,
    /// Top-center (index 1, `b1`).
    TopCenter,
    /// Top-right (index 2, `c1`).
    TopRight,
    /// Middle-left (index 3, `a2`).
    MiddleLeft,
    /// Center (index 4, `b2`).
    Center,
    /// Middle-right (index 5, `c2`).
    MiddleRight,
    /// Bottom-left (index 6, `a3`).
    BottomLeft,
    /// Bottom-center (index 7, `b3`).
    BottomCenter,
    /// Bottom-right (index 8, `c3`).
    BottomRight,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Creates position from row and column (0-2 each).
    pub fn from_row_col(row: usize, col: usize) -> Option<Self> {
        if row < 3 && col < 3 {
            Self::from_index(row * 3 + col)
        } else {
            None
        }
    }

    /// Row of this cell (0 = top).
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Column of this cell (0 = left).
    pub fn col(self) -> usize {
        self.to_index() % 3
    }

    /// Algebraic name, e.g. `b2` for the center.
    pub fn algebraic(self) -> String {
        let file = (b'a' + self.col() as u8) as char;
        format!("{}{}", file, self.row() + 1)
    }

    /// Parses an index (`0`-`8`), an algebraic name (`a1`-`c3`) or a label
    /// (`center`, `top-left`, `Bottom right`).
    #[instrument]
    pub fn parse(s: &str) -> Result<Position, ParseError> {
        let trimmed = s.trim();
        if let Ok(num) = trimmed.parse::<usize>() {
            return Self::from_index(num).ok_or_else(|| ParseError::new("position", s));
        }

        let lower = trimmed.to_ascii_lowercase();
        let bytes = lower.as_bytes();
        if bytes.len() == 2 && (b'a'..=b'c').contains(&bytes[0]) && (b'1'..=b'3').contains(&bytes[1])
        {
            let col = (bytes[0] - b'a') as usize;
            let row = (bytes[1] - b'1') as usize;
            return Self::from_row_col(row, col).ok_or_else(|| ParseError::new("position", s));
        }

        let normalized = lower.replace([' ', '_'], "-");
        Position::iter()
            .find(|pos| pos.label().to_ascii_lowercase() == normalized)
            .ok_or_else(|| ParseError::new("position", s))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algebraic())
    }
}

impl std::str::FromStr for Position {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
