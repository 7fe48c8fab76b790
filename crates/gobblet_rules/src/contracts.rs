//! Contract-based validation for Gobblet.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use crate::action::{Move, MoveError};
use crate::invariants::{GobbletInvariants, InvariantSet};
use crate::rules::{check_destination, moving_piece};
use crate::typestate::GameInProgress;
use crate::types::Piece;
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: It must be the player's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Checks the move's player against the side to move.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameInProgress) -> Result<(), MoveError> {
        if mov.player != game.to_move() {
            Err(MoveError::WrongPlayer(mov.player))
        } else {
            Ok(())
        }
    }
}

/// Precondition: The source yields a piece the mover owns.
pub struct SourceAvailable;

impl SourceAvailable {
    /// Returns the piece the move would pick up.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameInProgress) -> Result<Piece, MoveError> {
        moving_piece(game.board(), game.reserve(mov.player), mov)
    }
}

/// Precondition: The destination accepts the moving piece.
pub struct DestinationAccepts;

impl DestinationAccepts {
    /// Checks the destination cell for `piece`.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, piece: &Piece, game: &GameInProgress) -> Result<(), MoveError> {
        check_destination(game.board(), mov, piece)
    }
}

/// Composite precondition: turn order, source, then destination.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameInProgress) -> Result<(), MoveError> {
        PlayersTurn::check(mov, game)?;
        let piece = SourceAvailable::check(mov, game)?;
        DestinationAccepts::check(mov, &piece, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions:
/// - Must be player's turn
/// - Source holds a piece the player owns
/// - Destination is empty or topped by a smaller piece
///
/// Postconditions:
/// - Pieces are conserved
/// - Stacks stay nested
/// - Players still alternate
pub struct MoveContract;

impl Contract<GameInProgress, Move> for MoveContract {
    fn pre(game: &GameInProgress, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, game)
    }

    fn post(_before: &GameInProgress, after: &GameInProgress) -> Result<(), MoveError> {
        GobbletInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
