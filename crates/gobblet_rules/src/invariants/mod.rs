//! First-class invariants for Gobblet.
//!
//! Invariants are logical properties that must hold throughout game execution.
//! They are testable independently and serve as documentation of system guarantees.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn finish(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        collect::<S, I1>(state, &mut violations);
        collect::<S, I2>(state, &mut violations);
        collect::<S, I3>(state, &mut violations);
        finish(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        collect::<S, I1>(state, &mut violations);
        collect::<S, I2>(state, &mut violations);
        finish(violations)
    }
}

pub mod alternating_turn;
pub mod nested_stacks;
pub mod piece_conservation;

pub use alternating_turn::AlternatingTurnInvariant;
pub use nested_stacks::NestedStacksInvariant;
pub use piece_conservation::PieceConservationInvariant;

/// All Gobblet invariants as a composable set.
pub type GobbletInvariants = (
    PieceConservationInvariant,
    NestedStacksInvariant,
    AlternatingTurnInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameInProgress, GameResult, GameSetup, Move, Piece, Player, Position, Size};

    #[test]
    fn test_invariant_set_holds_for_empty_game() {
        let game = GameSetup::new().start(Player::Red);
        assert!(GobbletInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let moves = vec![
            Move::place(Player::Red, Size::Small, Position::TopLeft),
            Move::place(Player::Yellow, Size::Medium, Position::TopLeft),
            Move::place(Player::Red, Size::Large, Position::Center),
            Move::shift(Player::Yellow, Position::TopLeft, Position::BottomRight),
        ];

        match GameInProgress::replay(Player::Red, &moves) {
            Ok(GameResult::InProgress(game)) => {
                assert!(GobbletInvariants::check_all(&game).is_ok());
            }
            other => panic!("Expected in-progress game, got {:?}", other),
        }
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        let mut game = GameSetup::new().start(Player::Red);
        // A piece appears on the board without leaving any reserve
        game.board
            .place(Position::Center, Piece::new(Player::Yellow, Size::Small))
            .unwrap();

        let violations = GobbletInvariants::check_all(&game).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].description,
            PieceConservationInvariant::description()
        );
    }

    #[test]
    fn test_two_invariants_as_set() {
        let game = GameSetup::new().start(Player::Yellow);

        type TwoInvariants = (NestedStacksInvariant, AlternatingTurnInvariant);
        assert!(TwoInvariants::check_all(&game).is_ok());
    }
}
