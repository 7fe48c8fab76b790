//! Piece conservation: pieces are never created or destroyed.

use super::Invariant;
use crate::reserve::PIECES_PER_PLAYER;
use crate::{GameInProgress, Player};
use strum::IntoEnumIterator;
use tracing::warn;

/// Invariant: every player owns exactly six pieces, split between the
/// board (covered or visible) and the reserve.
pub struct PieceConservationInvariant;

impl Invariant<GameInProgress> for PieceConservationInvariant {
    fn holds(game: &GameInProgress) -> bool {
        Player::iter().all(|player| {
            let on_board = game.board().pieces_of(player);
            let in_reserve = game.reserve(player).total();
            let valid = on_board + in_reserve == PIECES_PER_PLAYER;
            if !valid {
                warn!(%player, on_board, in_reserve, "Piece conservation violated");
            }
            valid
        })
    }

    fn description() -> &'static str {
        "Each player owns six pieces across board and reserve"
    }
}
