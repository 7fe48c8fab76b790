//! Line-oriented terminal frontend.

use crate::controller::{ClickOutcome, Controller, Match};
use crate::layout::Layout;
use anyhow::Result;
use derive_more::Display;
use gobblet_rules::{Move, MoveError, Player, Position, Size};
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::{debug, info, instrument, warn};

const HELP: &str = "\
Commands:
  place <size> <cell>   drop a reserve piece (size: l/m/s, cell: a1..c3 or 0..8)
  move <from> <to>      move one of your visible pieces
  click <x> <y>         click the screen at pixel coordinates
  undo                  take back the last move
  reset                 start a new game
  moves                 list legal moves
  board                 show the board (also after a game ends)
  help                  show this help
  quit                  leave";

/// One line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// Drop a reserve piece.
    Place(Size, Position),
    /// Move a board piece.
    Move(Position, Position),
    /// Click at pixel coordinates.
    Click(i32, i32),
    /// Take back the last move.
    Undo,
    /// Start a new game.
    Reset,
    /// List legal moves.
    Moves,
    /// Show the board.
    Board,
    /// Show the help text.
    Help,
    /// Leave the game.
    Quit,
}

/// Input that could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, Display, derive_more::Error)]
#[display("{}", message)]
pub struct CommandError {
    /// What went wrong.
    pub message: String,
}

impl CommandError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl FromStr for ConsoleCommand {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some((verb, args)) = words.split_first() else {
            return Err(CommandError::new("Empty command"));
        };

        let parse_err = |e: gobblet_rules::ParseError| CommandError::new(e.to_string());
        let coord = |s: &str| {
            s.parse::<i32>()
                .map_err(|_| CommandError::new(format!("Invalid coordinate: {:?}", s)))
        };

        match (verb.to_ascii_lowercase().as_str(), args) {
            ("place" | "p", [size, cell]) => Ok(ConsoleCommand::Place(
                size.parse().map_err(parse_err)?,
                cell.parse().map_err(parse_err)?,
            )),
            ("move" | "m", [from, to]) => Ok(ConsoleCommand::Move(
                from.parse().map_err(parse_err)?,
                to.parse().map_err(parse_err)?,
            )),
            ("click" | "c", [x, y]) => Ok(ConsoleCommand::Click(coord(*x)?, coord(*y)?)),
            ("undo" | "u", []) => Ok(ConsoleCommand::Undo),
            ("reset" | "r", []) => Ok(ConsoleCommand::Reset),
            ("moves", []) => Ok(ConsoleCommand::Moves),
            ("board" | "b", []) => Ok(ConsoleCommand::Board),
            ("help" | "h" | "?", []) => Ok(ConsoleCommand::Help),
            ("quit" | "q" | "exit", []) => Ok(ConsoleCommand::Quit),
            (other, _) => Err(CommandError::new(format!(
                "Unknown command or wrong arguments: {:?} (type 'help')",
                other
            ))),
        }
    }
}

/// Renders the board, both reserves and whose turn it is.
pub fn render(game: &Match) -> String {
    let reserves = game.reserves();
    let mut out = game.board().display();
    for player in [Player::Red, Player::Yellow] {
        let pieces: Vec<String> = Size::ALL
            .iter()
            .map(|size| format!("{}x{}", reserves.of(player).count(*size), size.symbol()))
            .collect();
        out.push_str(&format!("{} reserve: {}\n", player, pieces.join(" ")));
    }
    out.push_str(&status_line(game));
    out.push('\n');
    out
}

/// Turn indicator or result banner.
pub fn status_line(game: &Match) -> String {
    match (game.to_move(), game.outcome()) {
        (Some(player), _) => format!("Current Player: {}", player.to_string().to_uppercase()),
        (None, Some(outcome)) => match outcome.winner() {
            Some(winner) => format!(
                "{} WINS! Any command starts a new game",
                winner.to_string().to_uppercase()
            ),
            None => format!("{}. Any command starts a new game", outcome),
        },
        (None, None) => String::new(),
    }
}

fn describe(outcome: &ClickOutcome) -> String {
    match outcome {
        ClickOutcome::Selected(selection) => format!("Picked up {:?}", selection),
        ClickOutcome::Deselected => "Put the piece back".to_string(),
        ClickOutcome::Moved(mov) => format!("{}", mov),
        ClickOutcome::Finished(mov, outcome) => format!("{}. {}", mov, outcome),
        ClickOutcome::Rejected(err) => format!("Illegal move: {}", err),
        ClickOutcome::Reset => "New game".to_string(),
        ClickOutcome::Ignored => "Nothing there to pick up".to_string(),
    }
}

/// Reads commands from `input` until `quit` or end of input, writing
/// responses to `output`.
#[instrument(skip_all)]
pub fn run<R: BufRead, W: Write>(
    controller: &mut Controller,
    layout: &Layout,
    input: R,
    mut output: W,
) -> Result<()> {
    info!("Console session started");
    write!(output, "{}", render(controller.game()))?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<ConsoleCommand>() {
            Ok(command) => command,
            Err(err) => {
                writeln!(output, "{}", err)?;
                continue;
            }
        };
        debug!(?command, "Command received");

        if command == ConsoleCommand::Quit {
            break;
        }

        // A finished game only waits for the next click
        if controller.game().outcome().is_some()
            && !matches!(
                command,
                ConsoleCommand::Help | ConsoleCommand::Undo | ConsoleCommand::Board
            )
        {
            controller.reset();
            writeln!(output, "{}", describe(&ClickOutcome::Reset))?;
            write!(output, "{}", render(controller.game()))?;
            continue;
        }

        match command {
            ConsoleCommand::Place(size, cell) => {
                let outcome = play_typed(controller, |player| Move::place(player, size, cell));
                writeln!(output, "{}", describe(&outcome))?;
                write!(output, "{}", render(controller.game()))?;
            }
            ConsoleCommand::Move(from, to) => {
                let outcome = play_typed(controller, |player| Move::shift(player, from, to));
                writeln!(output, "{}", describe(&outcome))?;
                write!(output, "{}", render(controller.game()))?;
            }
            ConsoleCommand::Click(x, y) => {
                let target = layout.hit_test(x, y, &controller.game().reserves());
                let outcome = controller.click(target);
                writeln!(output, "{}", describe(&outcome))?;
                write!(output, "{}", render(controller.game()))?;
            }
            ConsoleCommand::Undo => {
                match controller.undo() {
                    Ok(()) => writeln!(output, "Move taken back")?,
                    Err(err) => writeln!(output, "Cannot undo: {}", err)?,
                }
                write!(output, "{}", render(controller.game()))?;
            }
            ConsoleCommand::Reset => {
                controller.reset();
                writeln!(output, "{}", describe(&ClickOutcome::Reset))?;
                write!(output, "{}", render(controller.game()))?;
            }
            ConsoleCommand::Moves => {
                if let Match::InProgress(game) = controller.game() {
                    let moves: Vec<String> =
                        game.legal_moves().iter().map(|m| m.to_string()).collect();
                    writeln!(output, "{} legal moves:\n{}", moves.len(), moves.join("\n"))?;
                }
            }
            ConsoleCommand::Board => write!(output, "{}", render(controller.game()))?,
            ConsoleCommand::Help => writeln!(output, "{}", HELP)?,
            ConsoleCommand::Quit => break,
        }
        output.flush()?;
    }

    info!(moves = controller.game().history().len(), "Console session ended");
    Ok(())
}

/// Plays a typed move for the side to move.
fn play_typed(controller: &mut Controller, build: impl FnOnce(Player) -> Move) -> ClickOutcome {
    let result = match controller.game().to_move() {
        Some(player) => controller.play(build(player)),
        None => Err(MoveError::GameOver),
    };
    result.unwrap_or_else(|err| {
        warn!(%err, "Move rejected");
        ClickOutcome::Rejected(err)
    })
}
