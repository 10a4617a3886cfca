//! Line-driven play over any reader and writer.
//!
//! Commands: `r ROW COL` reveals a cell, `g WORD` guesses, `q` quits,
//! `h` prints help.

use battlewords_core::{Action, Coord, GameSession};
use derive_more::{Display, Error};
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::{debug, instrument};

const HELP: &str = "commands: r ROW COL | g WORD | q | h";

/// One line of player input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayCommand {
    /// A game action.
    Act(Action),
    /// Print help.
    Help,
    /// Leave the game.
    Quit,
}

/// Input that is not a command.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unrecognized command {:?} ({})", input, HELP)]
pub struct CommandError {
    /// The offending line.
    pub input: String,
}

impl FromStr for PlayCommand {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let err = || CommandError {
            input: line.to_string(),
        };
        let parts: Vec<&str> = line.split_whitespace().collect();
        match parts.as_slice() {
            ["q" | "quit"] => Ok(PlayCommand::Quit),
            ["h" | "help"] => Ok(PlayCommand::Help),
            ["r" | "reveal", row, col] => {
                let row = row.parse().map_err(|_| err())?;
                let col = col.parse().map_err(|_| err())?;
                Ok(PlayCommand::Act(Action::Reveal(Coord::new(row, col))))
            }
            ["g" | "guess", word] => Ok(PlayCommand::Act(Action::Guess(word.to_string()))),
            _ => Err(err()),
        }
    }
}

fn write_state<W: Write>(session: &GameSession, out: &mut W) -> std::io::Result<()> {
    write!(out, "{}", session.display_board())?;
    let radar: Vec<String> = session.puzzle().radar().iter().map(Coord::to_string).collect();
    writeln!(out, "radar: {}", radar.join(" "))?;
    writeln!(
        out,
        "score: {}  {}",
        session.score(),
        if session.can_guess() {
            "you may guess"
        } else {
            "reveal a cell"
        }
    )
}

fn write_summary<W: Write>(session: &GameSession, out: &mut W) -> std::io::Result<()> {
    let Some(summary) = session.summary() else {
        return Ok(());
    };
    writeln!(out, "game over ({})", summary.reason)?;
    for word in &summary.words {
        writeln!(out, "  {:<6} {:>2}", word.word, word.points)?;
    }
    writeln!(out, "final score: {} - tier: {}", summary.score, summary.tier)
}

/// Runs a session until it finishes, the player quits, or input ends.
#[instrument(skip_all)]
pub fn play<R: BufRead, W: Write>(
    session: &mut GameSession,
    input: R,
    mut out: W,
) -> std::io::Result<()> {
    writeln!(out, "{}", HELP)?;
    write_state(session, &mut out)?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match line.parse::<PlayCommand>() {
            Ok(PlayCommand::Quit) => {
                debug!("Player quit");
                break;
            }
            Ok(PlayCommand::Help) => writeln!(out, "{}", HELP)?,
            Ok(PlayCommand::Act(action)) => match session.apply(&action) {
                Ok(()) => writeln!(out, "{}", session.last_action())?,
                Err(e) => writeln!(out, "error: {}", e)?,
            },
            Err(e) => writeln!(out, "error: {}", e)?,
        }

        if session.is_finished() {
            write!(out, "{}", session.display_board())?;
            return write_summary(session, &mut out);
        }
        write_state(session, &mut out)?;
    }
    Ok(())
}
