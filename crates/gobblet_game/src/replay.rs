//! Replaying recorded games from JSON move lists.

use crate::controller::Match;
use anyhow::{Context, Result};
use gobblet_rules::{GameSetup, Move, Player};
use std::path::Path;
use tracing::{info, instrument};

/// Reads a JSON array of moves.
#[instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn load_moves(path: impl AsRef<Path>) -> Result<Vec<Move>> {
    let content = std::fs::read_to_string(path.as_ref())
        .with_context(|| format!("Failed to read {}", path.as_ref().display()))?;
    let moves: Vec<Move> =
        serde_json::from_str(&content).context("Failed to parse move list")?;
    info!(moves = moves.len(), "Move list loaded");
    Ok(moves)
}

/// Plays `moves` from a fresh `setup`.
///
/// Moves after the game ends are ignored.
#[instrument(skip(setup, moves), fields(moves = moves.len()))]
pub fn replay(setup: GameSetup, first_player: Player, moves: &[Move]) -> Result<Match> {
    let result = setup.replay(first_player, moves).context("Illegal move in replay")?;
    let game = Match::from(result);
    if game.history().len() < moves.len() {
        info!(
            played = game.history().len(),
            skipped = moves.len() - game.history().len(),
            "Game ended before the move list did"
        );
    }
    Ok(game)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gobblet_rules::{Outcome, Position, Size};

    #[test]
    fn test_replay_stops_at_win() {
        let moves = vec![
            Move::place(Player::Red, Size::Small, Position::TopLeft),
            Move::place(Player::Yellow, Size::Small, Position::BottomLeft),
            Move::place(Player::Red, Size::Small, Position::TopCenter),
            Move::place(Player::Yellow, Size::Small, Position::BottomCenter),
            Move::place(Player::Red, Size::Small, Position::TopRight),
            Move::place(Player::Yellow, Size::Large, Position::Center),
        ];
        let game = replay(GameSetup::new(), Player::Red, &moves).unwrap();
        assert_eq!(game.outcome(), Some(&Outcome::Winner(Player::Red)));
        assert_eq!(game.history().len(), 5);
    }

    #[test]
    fn test_replay_rejects_illegal_move() {
        let moves = vec![Move::place(Player::Yellow, Size::Small, Position::TopLeft)];
        let err = replay(GameSetup::new(), Player::Red, &moves).unwrap_err();
        assert!(format!("{:#}", err).contains("not Yellow's turn"));
    }
}
