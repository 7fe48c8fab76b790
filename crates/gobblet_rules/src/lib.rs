//! Gobblet rules engine.
//!
//! Pure game logic for Gobblet on a 3x3 board: two players, six nesting
//! pieces each, larger pieces may cover ("gobble") strictly smaller ones,
//! and three visible pieces in a row, column or diagonal win.
//!
//! # Architecture
//!
//! - **Types**: players, sizes, pieces, positions
//! - **Board**: nine stacks of pieces plus the per-player reserves
//! - **Rules**: legality, win and draw detection as pure functions
//! - **Typestate**: `GameSetup` → `GameInProgress` → `GameFinished`
//! - **Contracts**: preconditions and invariant-backed postconditions
//!
//! # Example
//!
//! ```
//! use gobblet_rules::{GameResult, GameSetup, Move, Player, Position, Size};
//!
//! let game = GameSetup::new().start(Player::Red);
//! let result = game
//!     .make_move(Move::place(Player::Red, Size::Large, Position::Center))
//!     .expect("legal opening");
//! assert!(matches!(result, GameResult::InProgress(_)));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod contracts;
mod phases;
mod position;
mod reserve;
mod typestate;
mod types;

pub mod invariants;
pub mod rules;

pub use action::{Move, MoveError, Source};
pub use board::{Board, Cell, StackError};
pub use contracts::{
    Contract, DestinationAccepts, LegalMove, MoveContract, PlayersTurn, SourceAvailable,
};
pub use phases::{DrawReason, Outcome};
pub use position::Position;
pub use reserve::{PIECES_PER_PLAYER, PIECES_PER_SIZE, Reserve, Reserves};
pub use typestate::{GameFinished, GameInProgress, GameResult, GameSetup};
pub use types::{ParseError, Piece, Player, Size};
