//! Alternating turn invariant: players alternate, starting with the first player.

use super::Invariant;
use crate::GameInProgress;

/// Invariant: Players alternate turns.
///
/// Move history must alternate owners, the first move belongs to the
/// game's first player, and `to_move` follows from the history length.
pub struct AlternatingTurnInvariant;

impl Invariant<GameInProgress> for AlternatingTurnInvariant {
    fn holds(game: &GameInProgress) -> bool {
        let history = game.history();
        let first = game.first_player();

        if let Some(opening) = history.first()
            && opening.player != first
        {
            return false;
        }

        if history.windows(2).any(|pair| pair[0].player == pair[1].player) {
            return false;
        }

        let expected_next = if history.len() % 2 == 0 {
            first
        } else {
            first.opponent()
        };

        game.to_move() == expected_next
    }

    fn description() -> &'static str {
        "Players alternate turns starting with the first player"
    }
}
