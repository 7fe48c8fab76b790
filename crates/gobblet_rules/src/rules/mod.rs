//! Game rules for Gobblet.
//!
//! This module contains pure functions for evaluating game state
//! according to Gobblet rules. Rules are separated from board
//! storage to enable composition into contract systems.

pub mod draw;
pub mod legality;
pub mod win;

pub use draw::{is_stalemate, move_limit_reached};
pub use legality::{check_destination, legal_moves, moving_piece, placeable_sizes};
pub use win::{LINES, check_winner, winners, winning_lines};
