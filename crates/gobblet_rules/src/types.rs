//! Core domain types for Gobblet.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    /// Red player (moves first by default).
    Red,
    /// Yellow player.
    Yellow,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Red => Player::Yellow,
            Player::Yellow => Player::Red,
        }
    }

    /// Single-letter symbol used in board diagrams.
    pub fn symbol(self) -> char {
        match self {
            Player::Red => 'R',
            Player::Yellow => 'Y',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Red => write!(f, "Red"),
            Player::Yellow => write!(f, "Yellow"),
        }
    }
}

impl FromStr for Player {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "red" | "r" => Ok(Player::Red),
            "yellow" | "y" => Ok(Player::Yellow),
            other => Err(ParseError::new("player", other)),
        }
    }
}

/// Size of a piece.
///
/// Sizes are ordered `Small < Medium < Large`; a piece may only cover a
/// strictly smaller one.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    /// Smallest piece.
    Small,
    /// Middle piece.
    Medium,
    /// Largest piece; nothing can cover it.
    Large,
}

impl Size {
    /// All sizes, largest first (reserve display order).
    pub const ALL: [Size; 3] = [Size::Large, Size::Medium, Size::Small];

    /// Checks if a piece of this size can gobble (cover) a piece of `other` size.
    pub fn can_gobble(self, other: Size) -> bool {
        self > other
    }

    /// Single-letter symbol used in board diagrams.
    pub fn symbol(self) -> char {
        match self {
            Size::Large => 'L',
            Size::Medium => 'M',
            Size::Small => 'S',
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Size::Large => write!(f, "large"),
            Size::Medium => write!(f, "medium"),
            Size::Small => write!(f, "small"),
        }
    }
}

impl FromStr for Size {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "large" | "l" => Ok(Size::Large),
            "medium" | "m" => Ok(Size::Medium),
            "small" | "s" => Ok(Size::Small),
            other => Err(ParseError::new("size", other)),
        }
    }
}

/// A single piece: an owner and a size.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new,
)]
pub struct Piece {
    /// Player who owns the piece.
    pub owner: Player,
    /// Size of the piece.
    pub size: Size,
}

impl Piece {
    /// Checks if this piece may be placed over `other`.
    pub fn can_gobble(&self, other: &Piece) -> bool {
        self.size.can_gobble(other.size)
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.owner.symbol(), self.size.symbol())
    }
}

/// Failure to parse a player, size or position from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Invalid {}: {:?}", kind, input)]
pub struct ParseError {
    /// What was being parsed.
    pub kind: &'static str,
    /// The rejected input.
    pub input: String,
}

impl ParseError {
    /// Creates a new parse error.
    pub fn new(kind: &'static str, input: impl Into<String>) -> Self {
        Self {
            kind,
            input: input.into(),
        }
    }
}
