//! Phase-specific typestate structs for Gobblet.
//!
//! Each phase is its own distinct type with phase-specific fields.
//! A `GameFinished` ALWAYS has an outcome, not `Option<Outcome>`.

use crate::action::{Move, MoveError, Source};
use crate::board::{Board, StackError};
use crate::contracts::{Contract, MoveContract};
use crate::phases::{DrawReason, Outcome};
use crate::position::Position;
use crate::reserve::{Reserve, Reserves};
use crate::rules::{check_winner, is_stalemate, legal_moves, move_limit_reached, winning_lines};
use crate::types::{Piece, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

// ─────────────────────────────────────────────────────────────
//  Setup Phase
// ─────────────────────────────────────────────────────────────

/// Game in setup phase - ready to start.
///
/// The board is always empty and both reserves are full.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSetup {
    board: Board,
    move_limit: Option<usize>,
}

impl GameSetup {
    /// Creates a new game in setup phase.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Ends the game in a draw once `limit` moves have been played.
    pub fn with_move_limit(mut self, limit: usize) -> Self {
        self.move_limit = Some(limit);
        self
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the configured move limit.
    pub fn move_limit(&self) -> Option<usize> {
        self.move_limit
    }

    /// Starts the game with the first player (consumes setup, returns in-progress).
    #[instrument(skip(self))]
    pub fn start(self, first_player: Player) -> GameInProgress {
        info!(%first_player, move_limit = ?self.move_limit, "Game started");
        GameInProgress {
            board: self.board,
            reserves: Reserves::new(),
            history: Vec::new(),
            to_move: first_player,
            first_player,
            move_limit: self.move_limit,
        }
    }

    /// Starts the game and replays `moves` from the initial position.
    #[instrument(skip(self, moves), fields(moves = moves.len()))]
    pub fn replay(self, first_player: Player, moves: &[Move]) -> Result<GameResult, MoveError> {
        let mut game = self.start(first_player);

        for action in moves {
            match game.make_move(*action)? {
                GameResult::InProgress(g) => game = g,
                GameResult::Finished(g) => return Ok(GameResult::Finished(g)),
            }
        }

        Ok(GameResult::InProgress(game))
    }
}

/// Replays all but the last move of `history`.
fn rewind(
    first_player: Player,
    move_limit: Option<usize>,
    mut history: Vec<Move>,
) -> Result<GameInProgress, MoveError> {
    let undone = history.pop();
    debug!(?undone, "Rewinding last move");

    let setup = GameSetup {
        board: Board::new(),
        move_limit,
    };
    match setup.replay(first_player, &history)? {
        GameResult::InProgress(game) => Ok(game),
        GameResult::Finished(_) => Err(MoveError::InvariantViolation(
            "History finished before its last move".to_string(),
        )),
    }
}

/// Maps a failed drop onto the move error reported to the player.
fn placement_error(err: StackError, destination: Position) -> MoveError {
    match err {
        StackError::CannotGobble { incoming, .. } => MoveError::CannotGobble {
            destination,
            size: incoming.size,
        },
        StackError::Empty => MoveError::InvariantViolation(format!(
            "Placing on {} reported an empty stack",
            destination
        )),
    }
}

// ─────────────────────────────────────────────────────────────
//  InProgress Phase
// ─────────────────────────────────────────────────────────────

/// Game in progress - can accept moves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameInProgress {
    pub(crate) board: Board,
    pub(crate) reserves: Reserves,
    pub(crate) history: Vec<Move>,
    pub(crate) to_move: Player,
    pub(crate) first_player: Player,
    pub(crate) move_limit: Option<usize>,
}

impl GameInProgress {
    /// Makes a move, consuming self and transitioning to next state.
    ///
    /// Contract enforcement:
    /// - Preconditions checked always (LegalMove)
    /// - Postconditions checked in debug builds only
    ///
    /// # Errors
    ///
    /// Returns the first violated precondition; the game is consumed either way.
    #[instrument(skip(self), fields(to_move = %self.to_move))]
    pub fn make_move(self, action: Move) -> Result<GameResult, MoveError> {
        #[cfg(debug_assertions)]
        let before = self.clone();

        MoveContract::pre(&self, &action)?;

        let mut game = self;
        let piece = match action.source {
            Source::Reserve(size) => {
                if !game.reserves.of_mut(action.player).take(size) {
                    return Err(MoveError::ReserveEmpty(size));
                }
                Piece::new(action.player, size)
            }
            Source::Board(from) => game
                .board
                .lift(from)
                .map_err(|_| MoveError::EmptySource(from))?,
        };
        game.board
            .place(action.destination, piece)
            .map_err(|err| placement_error(err, action.destination))?;
        game.history.push(action);
        debug!(%action, "Move applied");

        if let Some(winner) = check_winner(&game.board, action.player) {
            info!(%winner, moves = game.history.len(), "Game won");
            let lines = winning_lines(&game.board, winner);
            return Ok(GameResult::Finished(game.finish(Outcome::Winner(winner), lines)));
        }

        if move_limit_reached(game.history.len(), game.move_limit) {
            info!(moves = game.history.len(), "Move limit reached");
            return Ok(GameResult::Finished(
                game.finish(Outcome::Draw(DrawReason::MoveLimit), Vec::new()),
            ));
        }

        game.to_move = game.to_move.opponent();

        if is_stalemate(&game.board, game.reserves.of(game.to_move), game.to_move) {
            info!(stuck = %game.to_move, "No legal moves");
            return Ok(GameResult::Finished(
                game.finish(Outcome::Draw(DrawReason::Stalemate), Vec::new()),
            ));
        }

        #[cfg(debug_assertions)]
        MoveContract::post(&before, &game)?;

        Ok(GameResult::InProgress(game))
    }

    fn finish(self, outcome: Outcome, lines: Vec<[Position; 3]>) -> GameFinished {
        GameFinished {
            board: self.board,
            reserves: self.reserves,
            history: self.history,
            outcome,
            winning_lines: lines,
            first_player: self.first_player,
            move_limit: self.move_limit,
        }
    }

    /// Returns the current player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the player who moved first.
    pub fn first_player(&self) -> Player {
        self.first_player
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the reserve of `player`.
    pub fn reserve(&self, player: Player) -> &Reserve {
        self.reserves.of(player)
    }

    /// Returns move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the configured move limit.
    pub fn move_limit(&self) -> Option<usize> {
        self.move_limit
    }

    /// Returns every legal move for the side to move.
    #[instrument(skip(self))]
    pub fn legal_moves(&self) -> Vec<Move> {
        legal_moves(&self.board, self.reserves.of(self.to_move), self.to_move)
    }

    /// Takes back the last move. A game without moves is returned unchanged.
    #[instrument(skip(self), fields(moves = self.history.len()))]
    pub fn undo(self) -> Result<GameInProgress, MoveError> {
        if self.history.is_empty() {
            return Ok(self);
        }
        rewind(self.first_player, self.move_limit, self.history)
    }

    /// Replays moves from the initial state.
    #[instrument(skip(moves))]
    pub fn replay(first_player: Player, moves: &[Move]) -> Result<GameResult, MoveError> {
        GameSetup::new().replay(first_player, moves)
    }
}

// ─────────────────────────────────────────────────────────────
//  Finished Phase
// ─────────────────────────────────────────────────────────────

/// Game finished - outcome determined.
///
/// The outcome is ALWAYS present (not Option).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameFinished {
    board: Board,
    reserves: Reserves,
    history: Vec<Move>,
    outcome: Outcome,
    winning_lines: Vec<[Position; 3]>,
    first_player: Player,
    move_limit: Option<usize>,
}

impl GameFinished {
    /// Returns the outcome.
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Lines completed by the winner; empty for draws.
    pub fn winning_lines(&self) -> &[[Position; 3]] {
        &self.winning_lines
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the reserve of `player`.
    pub fn reserve(&self, player: Player) -> &Reserve {
        self.reserves.of(player)
    }

    /// Returns move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the player who moved first.
    pub fn first_player(&self) -> Player {
        self.first_player
    }

    /// Takes back the deciding move.
    #[instrument(skip(self))]
    pub fn undo(self) -> Result<GameInProgress, MoveError> {
        rewind(self.first_player, self.move_limit, self.history)
    }

    /// Restarts the game (consumes finished, returns setup with the same move limit).
    #[instrument(skip(self))]
    pub fn restart(self) -> GameSetup {
        GameSetup {
            board: Board::new(),
            move_limit: self.move_limit,
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Result Type
// ─────────────────────────────────────────────────────────────

/// Result of making a move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameResult {
    /// Game continues.
    InProgress(GameInProgress),
    /// Game finished.
    Finished(GameFinished),
}
