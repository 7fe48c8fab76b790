//! Win detection logic for Gobblet.
//!
//! Only visible (top) pieces count. Lifting a piece can uncover an
//! opponent's piece, so a single move may complete lines for both players.

use crate::board::Board;
use crate::position::Position;
use crate::types::Player;
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// The 8 winning lines: rows, columns, diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Lines whose three visible pieces all belong to `player`.
pub fn winning_lines(board: &Board, player: Player) -> Vec<[Position; 3]> {
    LINES
        .iter()
        .copied()
        .filter(|line| line.iter().all(|pos| board.owner(*pos) == Some(player)))
        .collect()
}

/// Players currently showing at least one complete line, Red first.
pub fn winners(board: &Board) -> Vec<Player> {
    Player::iter()
        .filter(|player| !winning_lines(board, *player).is_empty())
        .collect()
}

/// Decides the winner after `mover` has moved.
///
/// When both players show a line, the mover's opponent wins: uncovering
/// an opponent's line loses even if the move also completes one's own.
#[instrument(skip(board))]
pub fn check_winner(board: &Board, mover: Player) -> Option<Player> {
    let mover_wins = !winning_lines(board, mover).is_empty();
    let opponent_wins = !winning_lines(board, mover.opponent()).is_empty();

    match (mover_wins, opponent_wins) {
        (_, true) => {
            if mover_wins {
                debug!("Both players show a line; opponent takes the game");
            }
            Some(mover.opponent())
        }
        (true, false) => Some(mover),
        (false, false) => None,
    }
}
