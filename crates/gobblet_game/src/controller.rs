//! Point-and-click game flow: pick up a piece, then drop it on a cell.

use crate::layout::Target;
use gobblet_rules::{
    Board, Contract, GameFinished, GameInProgress, GameResult, GameSetup, Move, MoveContract,
    MoveError, Outcome, Player, Position, Reserves, Size, Source,
};
use tracing::{debug, info, instrument};

/// The game being played, in either live phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Match {
    /// Moves are still being made.
    InProgress(GameInProgress),
    /// The game is over.
    Finished(GameFinished),
}

impl Match {
    /// Returns the board.
    pub fn board(&self) -> &Board {
        match self {
            Match::InProgress(game) => game.board(),
            Match::Finished(game) => game.board(),
        }
    }

    /// Player to move, or `None` once the game is over.
    pub fn to_move(&self) -> Option<Player> {
        match self {
            Match::InProgress(game) => Some(game.to_move()),
            Match::Finished(_) => None,
        }
    }

    /// Outcome, once the game is over.
    pub fn outcome(&self) -> Option<&Outcome> {
        match self {
            Match::InProgress(_) => None,
            Match::Finished(game) => Some(game.outcome()),
        }
    }

    /// Both players' unplayed pieces.
    pub fn reserves(&self) -> Reserves {
        let mut reserves = Reserves::new();
        for player in [Player::Red, Player::Yellow] {
            let reserve = match self {
                Match::InProgress(game) => game.reserve(player),
                Match::Finished(game) => game.reserve(player),
            };
            *reserves.of_mut(player) = *reserve;
        }
        reserves
    }

    /// Moves played so far.
    pub fn history(&self) -> &[Move] {
        match self {
            Match::InProgress(game) => game.history(),
            Match::Finished(game) => game.history(),
        }
    }
}

impl From<GameResult> for Match {
    fn from(result: GameResult) -> Self {
        match result {
            GameResult::InProgress(game) => Match::InProgress(game),
            GameResult::Finished(game) => Match::Finished(game),
        }
    }
}

/// A piece picked up and waiting for a destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selection {
    /// A piece of this size from the mover's reserve.
    Reserve(Size),
    /// The visible piece on this cell.
    Board(Position),
}

impl From<Selection> for Source {
    fn from(selection: Selection) -> Self {
        match selection {
            Selection::Reserve(size) => Source::Reserve(size),
            Selection::Board(pos) => Source::Board(pos),
        }
    }
}

/// What a click or typed move did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// A piece was picked up.
    Selected(Selection),
    /// The held piece was put back.
    Deselected,
    /// A move was made and the game goes on.
    Moved(Move),
    /// A move was made and ended the game.
    Finished(Move, Outcome),
    /// The drop was illegal; the selection is kept.
    Rejected(MoveError),
    /// A finished game was replaced by a fresh one.
    Reset,
    /// The click did nothing.
    Ignored,
}

/// Drives one game from clicks.
#[derive(Debug, Clone)]
pub struct Controller {
    setup: GameSetup,
    first_player: Player,
    game: Match,
    selection: Option<Selection>,
}

impl Controller {
    /// Starts a fresh game from `setup` with `first_player` to move.
    #[instrument(skip(setup))]
    pub fn new(setup: GameSetup, first_player: Player) -> Self {
        let game = Match::InProgress(setup.clone().start(first_player));
        Self {
            setup,
            first_player,
            game,
            selection: None,
        }
    }

    /// The current game.
    pub fn game(&self) -> &Match {
        &self.game
    }

    /// The piece currently held, if any.
    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    /// Handles a click on `target`.
    ///
    /// Any click on a finished game starts a new one.
    #[instrument(skip(self), fields(selection = ?self.selection))]
    pub fn click(&mut self, target: Target) -> ClickOutcome {
        let game = match &self.game {
            Match::Finished(_) => {
                self.reset();
                return ClickOutcome::Reset;
            }
            Match::InProgress(game) => game,
        };
        let mover = game.to_move();
        let pickup = Self::pickup(game, mover, target);

        let Some(selection) = self.selection else {
            return match pickup {
                Some(selection) => self.select(selection),
                None => ClickOutcome::Ignored,
            };
        };

        match target {
            Target::Outside => self.deselect(),
            Target::Cell(pos) if selection == Selection::Board(pos) => self.deselect(),
            Target::Cell(pos) => {
                let mov = Move::new(mover, selection.into(), pos);
                match self.play(mov) {
                    Ok(outcome) => outcome,
                    Err(err) => match pickup {
                        Some(other) => self.select(other),
                        None => {
                            debug!(%err, "Drop rejected");
                            ClickOutcome::Rejected(err)
                        }
                    },
                }
            }
            Target::Reserve(..) => match pickup {
                Some(other) => self.select(other),
                None => ClickOutcome::Ignored,
            },
        }
    }

    /// What clicking `target` would pick up for `mover`.
    fn pickup(game: &GameInProgress, mover: Player, target: Target) -> Option<Selection> {
        match target {
            Target::Cell(pos) if game.board().owner(pos) == Some(mover) => {
                Some(Selection::Board(pos))
            }
            Target::Reserve(player, size) if player == mover && game.reserve(mover).has(size) => {
                Some(Selection::Reserve(size))
            }
            _ => None,
        }
    }

    fn select(&mut self, selection: Selection) -> ClickOutcome {
        debug!(?selection, "Piece selected");
        self.selection = Some(selection);
        ClickOutcome::Selected(selection)
    }

    fn deselect(&mut self) -> ClickOutcome {
        debug!("Selection cleared");
        self.selection = None;
        ClickOutcome::Deselected
    }

    /// Applies a complete move, bypassing selection.
    ///
    /// Illegal moves leave the game and selection untouched.
    #[instrument(skip(self))]
    pub fn play(&mut self, mov: Move) -> Result<ClickOutcome, MoveError> {
        let game = match &self.game {
            Match::Finished(_) => return Err(MoveError::GameOver),
            Match::InProgress(game) => game,
        };
        MoveContract::pre(game, &mov)?;

        let result = game.clone().make_move(mov)?;
        self.selection = None;
        self.game = Match::from(result);

        Ok(match &self.game {
            Match::InProgress(_) => ClickOutcome::Moved(mov),
            Match::Finished(finished) => {
                info!(outcome = %finished.outcome(), "Game over");
                ClickOutcome::Finished(mov, *finished.outcome())
            }
        })
    }

    /// Takes back the last move and clears the selection.
    #[instrument(skip(self))]
    pub fn undo(&mut self) -> Result<(), MoveError> {
        let rewound = match &self.game {
            Match::InProgress(game) => game.clone().undo()?,
            Match::Finished(game) => game.clone().undo()?,
        };
        self.game = Match::InProgress(rewound);
        self.selection = None;
        Ok(())
    }

    /// Abandons the current game and starts over.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!(first_player = %self.first_player, "Starting new game");
        self.game = Match::InProgress(self.setup.clone().start(self.first_player));
        self.selection = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> Controller {
        Controller::new(GameSetup::new(), Player::Red)
    }

    #[test]
    fn test_select_reserve_then_drop() {
        let mut ctl = controller();
        assert_eq!(
            ctl.click(Target::Reserve(Player::Red, Size::Large)),
            ClickOutcome::Selected(Selection::Reserve(Size::Large))
        );
        let outcome = ctl.click(Target::Cell(Position::Center));
        assert_eq!(
            outcome,
            ClickOutcome::Moved(Move::place(Player::Red, Size::Large, Position::Center))
        );
        assert_eq!(ctl.selection(), None);
        assert_eq!(ctl.game().to_move(), Some(Player::Yellow));
    }

    #[test]
    fn test_opponent_reserve_ignored() {
        let mut ctl = controller();
        assert_eq!(
            ctl.click(Target::Reserve(Player::Yellow, Size::Large)),
            ClickOutcome::Ignored
        );
        assert_eq!(ctl.click(Target::Cell(Position::Center)), ClickOutcome::Ignored);
    }

    #[test]
    fn test_click_origin_deselects() {
        let mut ctl = controller();
        ctl.play(Move::place(Player::Red, Size::Small, Position::Center))
            .unwrap();
        ctl.play(Move::place(Player::Yellow, Size::Small, Position::TopLeft))
            .unwrap();

        assert_eq!(
            ctl.click(Target::Cell(Position::Center)),
            ClickOutcome::Selected(Selection::Board(Position::Center))
        );
        assert_eq!(ctl.click(Target::Cell(Position::Center)), ClickOutcome::Deselected);
        assert_eq!(ctl.selection(), None);
    }

    #[test]
    fn test_click_outside_deselects() {
        let mut ctl = controller();
        ctl.click(Target::Reserve(Player::Red, Size::Small));
        assert_eq!(ctl.click(Target::Outside), ClickOutcome::Deselected);
    }

    #[test]
    fn test_illegal_drop_keeps_selection() {
        let mut ctl = controller();
        ctl.play(Move::place(Player::Red, Size::Large, Position::Center))
            .unwrap();

        ctl.click(Target::Reserve(Player::Yellow, Size::Medium));
        let outcome = ctl.click(Target::Cell(Position::Center));
        assert!(matches!(
            outcome,
            ClickOutcome::Rejected(MoveError::CannotGobble { .. })
        ));
        assert_eq!(ctl.selection(), Some(Selection::Reserve(Size::Medium)));
        assert_eq!(ctl.game().history().len(), 1);
    }

    #[test]
    fn test_illegal_drop_on_own_piece_switches_selection() {
        let mut ctl = controller();
        ctl.play(Move::place(Player::Red, Size::Large, Position::Center))
            .unwrap();
        ctl.play(Move::place(Player::Yellow, Size::Small, Position::TopLeft))
            .unwrap();

        ctl.click(Target::Reserve(Player::Red, Size::Small));
        assert_eq!(
            ctl.click(Target::Cell(Position::Center)),
            ClickOutcome::Selected(Selection::Board(Position::Center))
        );
    }

    #[test]
    fn test_winning_click_then_reset() {
        let mut ctl = controller();
        for mov in [
            Move::place(Player::Red, Size::Small, Position::TopLeft),
            Move::place(Player::Yellow, Size::Small, Position::BottomLeft),
            Move::place(Player::Red, Size::Small, Position::TopCenter),
            Move::place(Player::Yellow, Size::Small, Position::BottomCenter),
        ] {
            ctl.play(mov).unwrap();
        }

        ctl.click(Target::Reserve(Player::Red, Size::Medium));
        let outcome = ctl.click(Target::Cell(Position::TopRight));
        assert_eq!(
            outcome,
            ClickOutcome::Finished(
                Move::place(Player::Red, Size::Medium, Position::TopRight),
                Outcome::Winner(Player::Red)
            )
        );
        assert_eq!(ctl.game().outcome(), Some(&Outcome::Winner(Player::Red)));
        assert_eq!(
            ctl.play(Move::place(Player::Yellow, Size::Large, Position::Center)),
            Err(MoveError::GameOver)
        );

        assert_eq!(ctl.click(Target::Outside), ClickOutcome::Reset);
        assert!(ctl.game().history().is_empty());
        assert_eq!(ctl.game().to_move(), Some(Player::Red));
    }

    #[test]
    fn test_undo_after_finish() {
        let mut ctl = controller();
        for mov in [
            Move::place(Player::Red, Size::Small, Position::TopLeft),
            Move::place(Player::Yellow, Size::Small, Position::BottomLeft),
            Move::place(Player::Red, Size::Small, Position::TopCenter),
            Move::place(Player::Yellow, Size::Small, Position::BottomCenter),
            Move::place(Player::Red, Size::Large, Position::TopRight),
        ] {
            ctl.play(mov).unwrap();
        }
        assert!(ctl.game().outcome().is_some());

        ctl.undo().unwrap();
        assert_eq!(ctl.game().to_move(), Some(Player::Red));
        assert_eq!(ctl.game().history().len(), 4);
        assert_eq!(ctl.game().reserves().of(Player::Red).count(Size::Large), 2);
    }
}
