//! Move legality for Gobblet.

use crate::action::{Move, MoveError, Source};
use crate::board::Board;
use crate::position::Position;
use crate::reserve::Reserve;
use crate::types::{Piece, Player, Size};
use tracing::instrument;

/// Resolves the piece a move would pick up.
///
/// Reserve sources need a piece of that size left; board sources need a
/// visible piece owned by the mover.
pub fn moving_piece(board: &Board, reserve: &Reserve, mov: &Move) -> Result<Piece, MoveError> {
    match mov.source {
        Source::Reserve(size) => {
            if reserve.has(size) {
                Ok(Piece::new(mov.player, size))
            } else {
                Err(MoveError::ReserveEmpty(size))
            }
        }
        Source::Board(from) => {
            let piece = board.top(from).ok_or(MoveError::EmptySource(from))?;
            if piece.owner != mov.player {
                return Err(MoveError::NotYourPiece(from));
            }
            Ok(piece)
        }
    }
}

/// Checks that `piece` may land on the move's destination.
///
/// The destination must differ from a board source and be empty or topped
/// by a strictly smaller piece.
pub fn check_destination(board: &Board, mov: &Move, piece: &Piece) -> Result<(), MoveError> {
    if mov.source == Source::Board(mov.destination) {
        return Err(MoveError::SameCell(mov.destination));
    }
    if !board.can_place(mov.destination, piece) {
        return Err(MoveError::CannotGobble {
            destination: mov.destination,
            size: piece.size,
        });
    }
    Ok(())
}

/// Enumerates every legal move for the reserve's owner `player`.
///
/// Reserve placements come first (largest size first), then board moves
/// in row-major order of their source.
#[instrument(skip(board, reserve))]
pub fn legal_moves(board: &Board, reserve: &Reserve, player: Player) -> Vec<Move> {
    let reserve_sources = reserve.available().into_iter().map(Source::Reserve);
    let board_sources = board
        .visible_positions(player)
        .into_iter()
        .map(Source::Board);

    let mut moves = Vec::new();
    for source in reserve_sources.chain(board_sources) {
        for destination in Position::ALL {
            let mov = Move::new(player, source, destination);
            if let Ok(piece) = moving_piece(board, reserve, &mov)
                && check_destination(board, &mov, &piece).is_ok()
            {
                moves.push(mov);
            }
        }
    }
    moves
}

/// Sizes that could still be dropped on `destination` from `reserve`.
pub fn placeable_sizes(board: &Board, reserve: &Reserve, destination: Position) -> Vec<Size> {
    reserve
        .available()
        .into_iter()
        .filter(|size| match board.top(destination) {
            Some(top) => size.can_gobble(top.size),
            None => true,
        })
        .collect()
}
