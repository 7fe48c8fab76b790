//! Gobblet game library - selection flow, screen layout and terminal frontend
//!
//! # Architecture
//!
//! - **Rules**: the pure engine lives in `gobblet_rules`
//! - **Controller**: pick-up-then-drop interaction as a state machine
//! - **Layout**: pixel geometry and click hit-testing
//! - **Console**: line-oriented frontend over any reader/writer
//! - **Config**: TOML settings for first player, move limit and layout

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod console;
mod controller;
mod layout;
mod replay;

pub use config::{ConfigError, GameConfig};
pub use console::{CommandError, ConsoleCommand, render, run, status_line};
pub use controller::{ClickOutcome, Controller, Match, Selection};
pub use layout::{Layout, ReserveSlot, Target};
pub use replay::{load_moves, replay};
