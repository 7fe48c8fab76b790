//! Draw detection logic for Gobblet.

use super::legality::legal_moves;
use crate::board::Board;
use crate::reserve::Reserve;
use crate::types::Player;
use tracing::instrument;

/// Checks if `player` (whose reserve is `reserve`) has no legal move.
#[instrument(skip(board, reserve))]
pub fn is_stalemate(board: &Board, reserve: &Reserve, player: Player) -> bool {
    legal_moves(board, reserve, player).is_empty()
}

/// Checks if `moves_played` has reached an optional move limit.
pub fn move_limit_reached(moves_played: usize, limit: Option<usize>) -> bool {
    limit.is_some_and(|limit| moves_played >= limit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use crate::types::{Piece, Size};

    #[test]
    fn test_fresh_game_not_stalemate() {
        assert!(!is_stalemate(&Board::new(), &Reserve::full(), Player::Red));
    }

    #[test]
    fn test_no_pieces_is_stalemate() {
        assert!(is_stalemate(&Board::new(), &Reserve::empty(), Player::Red));
    }

    #[test]
    fn test_buried_pieces_is_stalemate() {
        let mut board = Board::new();
        board
            .place(Position::Center, Piece::new(Player::Red, Size::Small))
            .unwrap();
        board
            .place(Position::Center, Piece::new(Player::Yellow, Size::Large))
            .unwrap();
        assert!(is_stalemate(&board, &Reserve::empty(), Player::Red));
        assert!(!is_stalemate(&board, &Reserve::empty(), Player::Yellow));
    }

    #[test]
    fn test_move_limit() {
        assert!(!move_limit_reached(10, None));
        assert!(!move_limit_reached(9, Some(10)));
        assert!(move_limit_reached(10, Some(10)));
    }
}
