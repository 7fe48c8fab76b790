//! Command-line interface for gobblet.

use clap::{Parser, Subcommand};
use gobblet_rules::Player;
use std::path::PathBuf;

/// Gobblet - nesting-piece tic-tac-toe for two players
#[derive(Parser, Debug)]
#[command(name = "gobblet")]
#[command(about = "Two-player Gobblet in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game on stdin/stdout
    Play {
        /// Player who moves first (overrides the config file)
        #[arg(long)]
        first: Option<Player>,
    },

    /// Replay a JSON move list and print the final position
    Replay {
        /// JSON file holding an array of moves
        file: PathBuf,

        /// Player who moved first (overrides the config file)
        #[arg(long)]
        first: Option<Player>,
    },
}
