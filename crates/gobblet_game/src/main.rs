//! Gobblet - terminal frontend

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use gobblet_game::{Controller, GameConfig, load_moves, render, replay, run};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = GameConfig::load(cli.config.as_deref())?;

    match cli.command {
        Command::Play { first } => run_play(config, first),
        Command::Replay { file, first } => run_replay(config, file, first),
    }
}

/// Run an interactive game on stdin/stdout
#[instrument(skip(config))]
fn run_play(config: GameConfig, first: Option<gobblet_rules::Player>) -> Result<()> {
    let config = match first {
        Some(player) => config.with_first_player(player),
        None => config,
    };
    info!(first_player = %config.first_player(), "Starting interactive game");

    let mut controller = Controller::new(config.setup(), *config.first_player());
    let stdin = std::io::stdin();
    run(&mut controller, config.layout(), stdin.lock(), std::io::stdout())
}

/// Replay a recorded game and print the final position
#[instrument(skip(config))]
fn run_replay(
    config: GameConfig,
    file: std::path::PathBuf,
    first: Option<gobblet_rules::Player>,
) -> Result<()> {
    let first_player = first.unwrap_or(*config.first_player());
    let moves = load_moves(&file)?;
    let game = replay(config.setup(), first_player, &moves)?;
    print!("{}", render(&game));
    Ok(())
}
