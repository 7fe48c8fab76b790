//! Off-board piece reserves.

use crate::types::{Player, Size};
use serde::{Deserialize, Serialize};

/// Number of pieces of each size a player starts with.
pub const PIECES_PER_SIZE: u8 = 2;

/// Total number of pieces a player owns.
pub const PIECES_PER_PLAYER: usize = PIECES_PER_SIZE as usize * 3;

/// A player's unplayed pieces, counted per size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Reserve {
    large: u8,
    medium: u8,
    small: u8,
}

impl Reserve {
    /// Creates a full reserve (two pieces of every size).
    pub fn full() -> Self {
        Self {
            large: PIECES_PER_SIZE,
            medium: PIECES_PER_SIZE,
            small: PIECES_PER_SIZE,
        }
    }

    /// Creates an empty reserve.
    pub fn empty() -> Self {
        Self {
            large: 0,
            medium: 0,
            small: 0,
        }
    }

    fn slot(&mut self, size: Size) -> &mut u8 {
        match size {
            Size::Large => &mut self.large,
            Size::Medium => &mut self.medium,
            Size::Small => &mut self.small,
        }
    }

    /// Number of unplayed pieces of `size`.
    pub fn count(&self, size: Size) -> u8 {
        match size {
            Size::Large => self.large,
            Size::Medium => self.medium,
            Size::Small => self.small,
        }
    }

    /// Checks if at least one piece of `size` remains.
    pub fn has(&self, size: Size) -> bool {
        self.count(size) > 0
    }

    /// Takes one piece of `size`. Returns `false` when none remain.
    pub fn take(&mut self, size: Size) -> bool {
        let slot = self.slot(size);
        if *slot == 0 {
            return false;
        }
        *slot -= 1;
        true
    }

    /// Sizes with at least one piece left, largest first.
    pub fn available(&self) -> Vec<Size> {
        Size::ALL.into_iter().filter(|size| self.has(*size)).collect()
    }

    /// Total number of unplayed pieces.
    pub fn total(&self) -> usize {
        usize::from(self.large) + usize::from(self.medium) + usize::from(self.small)
    }
}

impl Default for Reserve {
    fn default() -> Self {
        Self::full()
    }
}

/// Both players' reserves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Reserves {
    red: Reserve,
    yellow: Reserve,
}

impl Reserves {
    /// Creates full reserves for both players.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve of `player`.
    pub fn of(&self, player: Player) -> &Reserve {
        match player {
            Player::Red => &self.red,
            Player::Yellow => &self.yellow,
        }
    }

    /// Mutable reserve of `player`.
    pub fn of_mut(&mut self, player: Player) -> &mut Reserve {
        match player {
            Player::Red => &mut self.red,
            Player::Yellow => &mut self.yellow,
        }
    }
}
