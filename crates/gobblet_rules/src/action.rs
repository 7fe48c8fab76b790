//! First-class action types for Gobblet.
//!
//! Moves are domain events, not side effects. They represent
//! the player's intent and can be validated independently of execution.

use crate::position::Position;
use crate::types::{Player, Size};
use serde::{Deserialize, Serialize};

/// Where the moving piece comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    /// A fresh piece of the given size from the mover's reserve.
    Reserve(Size),
    /// The visible piece on the given cell.
    Board(Position),
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Reserve(size) => write!(f, "reserve {}", size),
            Source::Board(pos) => write!(f, "{}", pos),
        }
    }
}

/// A move in Gobblet: a player taking a piece from a source and dropping it
/// on a destination cell.
///
/// Moves are first-class domain events that can be:
/// - Validated before application
/// - Serialized for replay
/// - Logged for debugging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// Where the piece comes from.
    pub source: Source,
    /// The cell receiving the piece.
    pub destination: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, source: Source, destination: Position) -> Self {
        Self {
            player,
            source,
            destination,
        }
    }

    /// Places a reserve piece of `size` on `destination`.
    pub fn place(player: Player, size: Size, destination: Position) -> Self {
        Self::new(player, Source::Reserve(size), destination)
    }

    /// Moves the visible piece on `from` to `to`.
    pub fn shift(player: Player, from: Position, to: Position) -> Self {
        Self::new(player, Source::Board(from), to)
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the source of this move.
    pub fn source(&self) -> Source {
        self.source
    }

    /// Returns the destination of this move.
    pub fn destination(&self) -> Position {
        self.destination
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} -> {}", self.player, self.source, self.destination)
    }
}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// It's not this player's turn.
    #[display("It's not {}'s turn", _0)]
    WrongPlayer(Player),

    /// No reserve piece of this size is left.
    #[display("No {} pieces left in reserve", _0)]
    ReserveEmpty(Size),

    /// The source cell has no piece to move.
    #[display("Cell {} is empty", _0)]
    EmptySource(Position),

    /// The visible piece on the source cell belongs to the opponent.
    #[display("The piece on {} is not yours", _0)]
    NotYourPiece(Position),

    /// A piece cannot be moved onto the cell it came from.
    #[display("Piece is already on {}", _0)]
    SameCell(Position),

    /// The destination's top piece is not strictly smaller.
    #[display("A {} piece cannot cover the top of {}", size, destination)]
    CannotGobble {
        /// Destination cell.
        destination: Position,
        /// Size of the moving piece.
        size: Size,
    },

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
