//! Interactive console player
//!
//! Reads answers line by line, so any `BufRead` works as input. Invalid moves
//! are reported and asked for again; end of input ends the session.

use std::io::{BufRead, Write};

use crate::algorithm::executor::Actor;
use crate::algorithm::search::ScoredMove;
use crate::io::error::{GameError, Result, input_error};
use crate::spatial::grid::{Grid, Position};
use crate::spatial::moves::Move;

/// Interpret a yes/no answer; `y` and `o` in either case mean yes
pub fn parse_confirmation(answer: &str) -> bool {
    matches!(
        answer.trim().chars().next(),
        Some('y' | 'Y' | 'o' | 'O')
    )
}

/// Parse four 1-based integers `row col row col` into a move on an `n x n` grid
///
/// Commas are accepted as separators.
///
/// # Errors
///
/// Returns an error describing the problem if the line does not hold four
/// numbers, a coordinate is out of range or the cells are not adjacent
pub fn parse_move(line: &str, dimension: usize) -> Result<Move> {
    let numbers = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<usize>()
                .map_err(|_parse_error| input_error(&format!("'{token}' is not a number")))
        })
        .collect::<Result<Vec<usize>>>()?;

    let &[r1, c1, r2, c2] = numbers.as_slice() else {
        return Err(input_error(&format!(
            "expected 4 numbers, found {}",
            numbers.len()
        )));
    };

    if [r1, c1, r2, c2]
        .iter()
        .any(|&value| value == 0 || value > dimension)
    {
        return Err(input_error(&format!(
            "coordinates must be between 1 and {dimension}"
        )));
    }

    Move::new(Position::new(r1 - 1, c1 - 1), Position::new(r2 - 1, c2 - 1))
        .map_err(|_not_adjacent| input_error(&"the two cells are not adjacent"))
}

/// Actor asking a human for moves through a reader and a writer
pub struct ConsoleActor<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleActor<R, W> {
    /// Create a console actor
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    // `None` at end of input
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        Ok((read > 0).then_some(line))
    }

    /// Ask whether to keep playing
    ///
    /// # Errors
    ///
    /// Returns an error if the console cannot be read or written
    pub fn ask_continue(&mut self) -> Result<bool> {
        writeln!(self.output, "Keep playing? (y/n)")?;
        self.output.flush()?;
        let answer = self.read_line()?;
        Ok(answer.as_deref().is_some_and(parse_confirmation))
    }

    /// Read a valid move, asking again after every invalid answer
    ///
    /// Returns `None` if the input ends first.
    ///
    /// # Errors
    ///
    /// Returns an error if the console cannot be read or written
    pub fn read_move(&mut self, dimension: usize) -> Result<Option<Move>> {
        loop {
            writeln!(
                self.output,
                "Enter the cells to swap as: row col row col (1-{dimension})"
            )?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(None);
            };

            match parse_move(&line, dimension) {
                Ok(swap) => return Ok(Some(swap)),
                Err(GameError::Input { reason }) => {
                    writeln!(self.output, "{reason}. Please try again.")?;
                }
                Err(other) => return Err(other),
            }
        }
    }
}

impl<R: BufRead, W: Write> Actor for ConsoleActor<R, W> {
    fn next_move(&mut self, grid: &Grid, _suggestion: Option<ScoredMove>) -> Result<Option<Move>> {
        if !self.ask_continue()? {
            writeln!(self.output, "Thanks for playing!")?;
            return Ok(None);
        }
        self.read_move(grid.dimension())
    }
}
