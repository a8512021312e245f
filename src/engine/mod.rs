//! The engine puts all pieces together: it runs the interactive session with
//! the human over a pair of text streams.
//!
//! [`Engine::run`] is the "main loop" of the program. It prints the
//! instructions, alternates between asking the human for a move and searching
//! for the computer's one, reports the result and offers to play again.
//!
//! Invalid input is never fatal: the human is asked again until the answer
//! makes sense. Reaching the end of the input stream ends the session.

use std::io::{BufRead, Write};

use anyhow::Context;
use rand::Rng;

use crate::board::{Board, Player, LEGEND};
use crate::game::{GameState, Side};
use crate::search::SearchResult;

mod input;

use input::{parse_move, parse_replay, Replay};

/// Interactive tic-tac-toe session. Owns the random number generator used to
/// assign the roles at the start of every game.
pub struct Engine<G: Rng> {
    debug: bool,
    rng: G,
}

impl<G: Rng> Engine<G> {
    /// Creates an engine. With `debug` set, details of every search are
    /// printed after the computer moves.
    #[must_use]
    pub const fn new(debug: bool, rng: G) -> Self {
        Self { debug, rng }
    }

    /// Plays games until the human declines to play again or the input ends.
    pub fn run(&mut self, input: &mut impl BufRead, output: &mut impl Write) -> anyhow::Result<()> {
        writeln!(output, "This program is going to play tic tac toe with you.")?;
        writeln!(
            output,
            "Each slot on the board is represented by a number, like this:"
        )?;
        writeln!(output, "{LEGEND}")?;
        writeln!(
            output,
            "When your turn is called, you will have to enter your move and press ENTER."
        )?;

        let mut game = GameState::random(&mut self.rng);
        loop {
            if !self.play(&mut game, input, output)? {
                break;
            }
            match ask_replay(input, output)? {
                Some(Replay::Yes) => game.reset(&mut self.rng),
                Some(Replay::No) | None => break,
            }
        }
        output.flush()?;
        Ok(())
    }

    /// Plays a single game until it ends. Returns `false` if the input ended
    /// before that.
    fn play(
        &self,
        game: &mut GameState,
        input: &mut impl BufRead,
        output: &mut impl Write,
    ) -> anyhow::Result<bool> {
        let roles = game.roles();
        tracing::info!(computer = %roles.computer(), human = %roles.human(), "new game");
        if roles.computer() == Player::One {
            writeln!(output, "The computer moves first with number {}", Player::One)?;
            writeln!(output, "You move second with number {}", Player::Two)?;
        } else {
            writeln!(output, "You move first with number {}", Player::One)?;
            writeln!(output, "The computer moves second with number {}", Player::Two)?;
        }

        while !game.is_over() {
            let cell = match game.side_to_move() {
                Side::Human => match ask_move(game.board(), input, output)? {
                    Some(cell) => cell,
                    None => return Ok(false),
                },
                Side::Computer => {
                    let result = game.computer_move();
                    if self.debug {
                        print_search(&result, output)?;
                    }
                    result.best_move
                },
            };
            let _ = game.apply(cell);
            writeln!(output)?;
            writeln!(output, "{}", game.board())?;
            writeln!(output)?;
        }

        if let Some(winner) = game.winner() {
            tracing::info!(?winner, "game over");
            writeln!(output)?;
            writeln!(output, "{winner}")?;
            writeln!(output)?;
        }
        Ok(true)
    }
}

/// Reads a line, returning `None` at the end of the input.
fn read_line(input: &mut impl BufRead) -> anyhow::Result<Option<String>> {
    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("failed to read from input")?;
    Ok((read > 0).then_some(line))
}

/// Asks the human for a move until a playable cell is entered.
fn ask_move(
    board: &Board,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> anyhow::Result<Option<usize>> {
    loop {
        writeln!(output)?;
        writeln!(output, "Enter your move and press ENTER:")?;
        write!(output, ">: ")?;
        output.flush()?;

        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        match parse_move(&line, board) {
            Ok(cell) => return Ok(Some(cell)),
            Err(error) => {
                tracing::debug!(%error, line = line.trim_end(), "rejected move");
                writeln!(output, "{error}")?;
            },
        }
    }
}

/// Asks whether to play again until the answer is recognized.
fn ask_replay(input: &mut impl BufRead, output: &mut impl Write) -> anyhow::Result<Option<Replay>> {
    loop {
        writeln!(output, "Do you want to play again? [y|n]")?;
        write!(output, ">:")?;
        output.flush()?;

        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        match parse_replay(&line) {
            Ok(replay) => return Ok(Some(replay)),
            Err(error) => writeln!(output, "{error}")?,
        }
    }
}

/// Prints the score of every candidate move and the cost of the search.
/// Cells are 1-indexed, as in the user interface.
fn print_search(result: &SearchResult, output: &mut impl Write) -> anyhow::Result<()> {
    for candidate in &result.candidates {
        writeln!(output, "Cell {} -> {}", candidate.cell + 1, candidate.score)?;
    }
    writeln!(output, "Move -> {}", result.best_move + 1)?;
    writeln!(output, "Duration: {} ms", result.stats.duration.as_millis())?;
    writeln!(output, "Iterations: {}", result.stats.iterations)?;
    Ok(())
}
