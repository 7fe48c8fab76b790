//! Screen geometry: where cells and reserve pieces sit, and what a click hits.

use gobblet_rules::{Player, Position, Reserve, Reserves, Size};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// What a click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// A board cell.
    Cell(Position),
    /// An unplayed piece in a player's reserve.
    Reserve(Player, Size),
    /// Anywhere else.
    Outside,
}

/// Pixel geometry of the board and the two reserves.
///
/// Red's reserve runs down the left margin, Yellow's down the right. Pieces
/// of the same size fan out diagonally away from the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Layout {
    /// Screen width in pixels.
    pub screen_width: i32,
    /// Screen height in pixels.
    pub screen_height: i32,
    /// Side of one board cell.
    pub cell_size: i32,
    /// Top edge of the board.
    pub board_offset_y: i32,
    /// Radius of a large piece.
    pub large_radius: i32,
    /// Radius of a medium piece.
    pub medium_radius: i32,
    /// Radius of a small piece.
    pub small_radius: i32,
    /// Distance of each reserve column from its screen edge.
    pub reserve_margin: i32,
    /// Y of the first reserve row.
    pub reserve_top: i32,
    /// Vertical distance between size rows.
    pub reserve_row_spacing: i32,
    /// Extra vertical offset per piece within a size row.
    pub reserve_stack_dy: i32,
    /// Horizontal shift per piece within a size row, away from the board.
    pub reserve_stack_dx: i32,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            screen_width: 800,
            screen_height: 600,
            cell_size: 120,
            board_offset_y: 100,
            large_radius: 60,
            medium_radius: 40,
            small_radius: 20,
            reserve_margin: 50,
            reserve_top: 200,
            reserve_row_spacing: 70,
            reserve_stack_dy: 40,
            reserve_stack_dx: 20,
        }
    }
}

/// A reserve piece's on-screen spot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReserveSlot {
    /// Owner of the piece.
    pub player: Player,
    /// Size of the piece.
    pub size: Size,
    /// Center x.
    pub x: i32,
    /// Center y.
    pub y: i32,
}

impl Layout {
    /// Left edge of the board; the board is centered horizontally.
    pub fn board_offset_x(&self) -> i32 {
        (self.screen_width - 3 * self.cell_size) / 2
    }

    /// Drawing radius of a piece of `size`.
    pub fn radius(&self, size: Size) -> i32 {
        match size {
            Size::Large => self.large_radius,
            Size::Medium => self.medium_radius,
            Size::Small => self.small_radius,
        }
    }

    /// Center of the cell at `pos`.
    pub fn cell_center(&self, pos: Position) -> (i32, i32) {
        let half = self.cell_size / 2;
        (
            self.board_offset_x() + pos.col() as i32 * self.cell_size + half,
            self.board_offset_y + pos.row() as i32 * self.cell_size + half,
        )
    }

    /// The cell containing `(x, y)`, if any.
    pub fn cell_at(&self, x: i32, y: i32) -> Option<Position> {
        let cell = i64::from(self.cell_size);
        let dx = i64::from(x) - i64::from(self.board_offset_x());
        let dy = i64::from(y) - i64::from(self.board_offset_y);
        let span = 3 * cell;
        if dx < 0 || dy < 0 || dx >= span || dy >= span {
            return None;
        }
        Position::from_row_col((dy / cell) as usize, (dx / cell) as usize)
    }

    /// Screen spots of `player`'s unplayed pieces, largest size first.
    pub fn reserve_slots(&self, player: Player, reserve: &Reserve) -> Vec<ReserveSlot> {
        let (x_base, dx) = match player {
            Player::Red => (self.reserve_margin, -self.reserve_stack_dx),
            Player::Yellow => (self.screen_width - self.reserve_margin, self.reserve_stack_dx),
        };

        let mut slots = Vec::new();
        for (row, size) in Size::ALL.into_iter().enumerate() {
            for i in 0..i32::from(reserve.count(size)) {
                slots.push(ReserveSlot {
                    player,
                    size,
                    x: x_base + dx * i,
                    y: self.reserve_top + row as i32 * self.reserve_row_spacing + i * self.reserve_stack_dy,
                });
            }
        }
        slots
    }

    /// Resolves a click at `(x, y)`.
    ///
    /// Board cells win over reserve pieces. Overlapping reserve pieces
    /// resolve to the first slot in display order (Red before Yellow, larger
    /// before smaller).
    #[instrument(skip(self, reserves))]
    pub fn hit_test(&self, x: i32, y: i32, reserves: &Reserves) -> Target {
        if let Some(pos) = self.cell_at(x, y) {
            trace!(%pos, "Hit cell");
            return Target::Cell(pos);
        }

        for player in [Player::Red, Player::Yellow] {
            let hit = self
                .reserve_slots(player, reserves.of(player))
                .into_iter()
                .find(|slot| {
                    let r = self.radius(slot.size).unsigned_abs();
                    x.abs_diff(slot.x) <= r && y.abs_diff(slot.y) <= r
                });
            if let Some(slot) = hit {
                trace!(%player, size = %slot.size, "Hit reserve piece");
                return Target::Reserve(player, slot.size);
            }
        }

        Target::Outside
    }
}
