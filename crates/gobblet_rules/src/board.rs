//! The 3x3 board of nesting stacks.

use crate::position::Position;
use crate::types::{Piece, Player};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// Error raised by direct stack manipulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum StackError {
    /// The top piece is not strictly smaller than the incoming piece.
    #[display("{} cannot cover {}", incoming, top)]
    CannotGobble {
        /// Piece being placed.
        incoming: Piece,
        /// Piece currently on top.
        top: Piece,
    },
    /// Nothing to lift from an empty cell.
    #[display("Cell is empty")]
    Empty,
}

/// One cell: an ordered stack of pieces, top = last.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pieces: Vec<Piece>,
}

impl Cell {
    /// Creates an empty cell.
    pub fn new() -> Self {
        Self::default()
    }

    /// The visible piece, if any.
    pub fn top(&self) -> Option<&Piece> {
        self.pieces.last()
    }

    /// Checks if the cell holds no pieces.
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Checks if `piece` may be placed here: the cell is empty or its top
    /// piece is strictly smaller.
    pub fn can_accept(&self, piece: &Piece) -> bool {
        self.top().is_none_or(|top| piece.can_gobble(top))
    }

    /// Places `piece` on top, covering whatever is underneath.
    pub fn push(&mut self, piece: Piece) -> Result<(), StackError> {
        if let Some(top) = self.top()
            && !piece.can_gobble(top)
        {
            return Err(StackError::CannotGobble {
                incoming: piece,
                top: *top,
            });
        }
        self.pieces.push(piece);
        Ok(())
    }

    /// Removes and returns the top piece, uncovering the one beneath.
    pub fn pop(&mut self) -> Result<Piece, StackError> {
        self.pieces.pop().ok_or(StackError::Empty)
    }

    /// All pieces, bottom first.
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }
}

/// 3x3 Gobblet board.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the cell at the given position.
    pub fn cell(&self, pos: Position) -> &Cell {
        &self.cells[pos.to_index()]
    }

    /// The visible piece at the given position.
    pub fn top(&self, pos: Position) -> Option<Piece> {
        self.cell(pos).top().copied()
    }

    /// Owner of the visible piece at the given position.
    pub fn owner(&self, pos: Position) -> Option<Player> {
        self.top(pos).map(|piece| piece.owner)
    }

    /// Checks if `piece` may be placed at `pos`.
    pub fn can_place(&self, pos: Position, piece: &Piece) -> bool {
        self.cell(pos).can_accept(piece)
    }

    /// Places a piece at the given position.
    #[instrument(skip(self), fields(piece = %piece, position = %pos))]
    pub fn place(&mut self, pos: Position, piece: Piece) -> Result<(), StackError> {
        self.cells[pos.to_index()].push(piece)?;
        trace!("Piece placed");
        Ok(())
    }

    /// Lifts the top piece from the given position.
    #[instrument(skip(self), fields(position = %pos))]
    pub fn lift(&mut self, pos: Position) -> Result<Piece, StackError> {
        let piece = self.cells[pos.to_index()].pop()?;
        trace!(piece = %piece, "Piece lifted");
        Ok(piece)
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Number of pieces `player` has on the board, covered or not.
    pub fn pieces_of(&self, player: Player) -> usize {
        self.cells
            .iter()
            .flat_map(|cell| cell.pieces())
            .filter(|piece| piece.owner == player)
            .count()
    }

    /// Positions whose visible piece belongs to `player`.
    pub fn visible_positions(&self, player: Player) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.owner(*pos) == Some(player))
            .collect()
    }

    /// Formats the board as a human-readable string.
    ///
    /// Visible pieces are shown as owner and size letters (`RL`, `YS`);
    /// empty cells show their index (`0`-`8`).
    pub fn display(&self) -> String {
        let mut result = String::from("    a    b    c\n");
        for row in 0..3 {
            result.push_str(&format!("{} ", row + 1));
            for col in 0..3 {
                let Some(pos) = Position::from_row_col(row, col) else {
                    continue;
                };
                let cell = self.cell(pos);
                let symbol = match cell.top() {
                    Some(piece) => piece.to_string(),
                    None => format!("{:<2}", pos.to_index()),
                };
                let depth = cell.pieces().len();
                if depth > 1 {
                    result.push_str(&format!(" {}{}", symbol, depth));
                } else {
                    result.push_str(&format!(" {} ", symbol));
                }
                if col < 2 {
                    result.push('|');
                }
            }
            result.push('\n');
            if row < 2 {
                result.push_str("  ----+----+----\n");
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Size;

    fn piece(owner: Player, size: Size) -> Piece {
        Piece::new(owner, size)
    }

    #[test]
    fn test_empty_cell_accepts_anything() {
        let cell = Cell::new();
        assert!(cell.can_accept(&piece(Player::Red, Size::Small)));
        assert!(cell.can_accept(&piece(Player::Yellow, Size::Large)));
    }

    #[test]
    fn test_gobble_requires_strictly_larger() {
        let mut cell = Cell::new();
        cell.push(piece(Player::Red, Size::Medium)).unwrap();

        assert!(!cell.can_accept(&piece(Player::Yellow, Size::Medium)));
        assert!(!cell.can_accept(&piece(Player::Yellow, Size::Small)));
        assert!(cell.can_accept(&piece(Player::Yellow, Size::Large)));

        let err = cell.push(piece(Player::Yellow, Size::Medium)).unwrap_err();
        assert!(matches!(err, StackError::CannotGobble { .. }));
        assert_eq!(cell.pieces().len(), 1);
    }

    #[test]
    fn test_lift_uncovers_piece_beneath() {
        let mut board = Board::new();
        board
            .place(Position::Center, piece(Player::Red, Size::Small))
            .unwrap();
        board
            .place(Position::Center, piece(Player::Yellow, Size::Large))
            .unwrap();
        assert_eq!(board.owner(Position::Center), Some(Player::Yellow));

        let lifted = board.lift(Position::Center).unwrap();
        assert_eq!(lifted, piece(Player::Yellow, Size::Large));
        assert_eq!(board.owner(Position::Center), Some(Player::Red));
    }

    #[test]
    fn test_lift_empty_fails() {
        let mut board = Board::new();
        assert_eq!(board.lift(Position::TopLeft), Err(StackError::Empty));
    }

    #[test]
    fn test_pieces_of_counts_covered_pieces() {
        let mut board = Board::new();
        board
            .place(Position::TopLeft, piece(Player::Red, Size::Small))
            .unwrap();
        board
            .place(Position::TopLeft, piece(Player::Yellow, Size::Medium))
            .unwrap();
        assert_eq!(board.pieces_of(Player::Red), 1);
        assert_eq!(board.pieces_of(Player::Yellow), 1);
        assert_eq!(board.visible_positions(Player::Red), Vec::<Position>::new());
        assert_eq!(board.visible_positions(Player::Yellow), vec![Position::TopLeft]);
    }

    #[test]
    fn test_display_shows_top_and_depth() {
        let mut board = Board::new();
        board
            .place(Position::Center, piece(Player::Red, Size::Small))
            .unwrap();
        board
            .place(Position::Center, piece(Player::Yellow, Size::Large))
            .unwrap();
        let text = board.display();
        assert!(text.contains("YL2"));
        assert!(!text.contains("RS"));
    }

    #[test]
    fn test_display_labels_empty_cells_by_index() {
        let mut board = Board::new();
        board
            .place(Position::TopLeft, piece(Player::Red, Size::Medium))
            .unwrap();
        let text = board.display();
        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(rows[1], "1  RM | 1  | 2  ");
        assert_eq!(rows[3], "2  3  | 4  | 5  ");
        assert_eq!(rows[5], "3  6  | 7  | 8  ");
    }
}
