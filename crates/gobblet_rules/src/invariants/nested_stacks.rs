//! Nested stacks: every piece is strictly larger than the one it covers.

use super::Invariant;
use crate::GameInProgress;

/// Invariant: within every cell, sizes strictly increase from bottom to top.
pub struct NestedStacksInvariant;

impl Invariant<GameInProgress> for NestedStacksInvariant {
    fn holds(game: &GameInProgress) -> bool {
        game.board().cells().iter().all(|cell| {
            cell.pieces()
                .windows(2)
                .all(|pair| pair[1].size.can_gobble(pair[0].size))
        })
    }

    fn description() -> &'static str {
        "Every stacked piece is larger than the piece it covers"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameInProgress, GameResult, Move, Player, Position, Size};

    #[test]
    fn test_holds_for_gobbling_sequence() {
        let moves = vec![
            Move::place(Player::Red, Size::Small, Position::Center),
            Move::place(Player::Yellow, Size::Medium, Position::Center),
            Move::place(Player::Red, Size::Large, Position::Center),
        ];
        match GameInProgress::replay(Player::Red, &moves).unwrap() {
            GameResult::InProgress(game) => {
                assert!(NestedStacksInvariant::holds(&game));
                assert_eq!(game.board().cell(Position::Center).pieces().len(), 3);
            }
            GameResult::Finished(_) => panic!("Game shouldn't finish"),
        }
    }
}
