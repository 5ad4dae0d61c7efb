//! Interactive console protocol
//!
//! Prints `Guessing word: <word>`, then reads the outcome as a five-letter
//! C/P/N token. `CCCCC` ends the game.

use crate::core::{Outcome, parse_outcome};
use crate::solver::WordleSolver;
use anyhow::{Context, Result, bail};
use std::io::{BufRead, Write};

/// Play one game against outcomes typed by the user
///
/// Returns the number of attempts it took.
///
/// # Errors
///
/// Returns an error on I/O failure, end of input, a malformed outcome token,
/// or when the outcomes entered leave no possible word.
pub fn run_simple<S, R, W>(solver: &mut S, mut input: R, mut output: W) -> Result<usize>
where
    S: WordleSolver,
    R: BufRead,
    W: Write,
{
    let mut attempts = 0;

    loop {
        attempts += 1;
        let guess = solver
            .next_guess()
            .context("cannot suggest a guess")?
            .clone();
        writeln!(output, "Guessing word: {guess}")?;
        write!(output, "Enter result for guess: ")?;
        output.flush()?;

        let token = read_token(&mut input)?;
        let outcome = parse_outcome(&token).context("error reading result")?;

        if outcome == Outcome::SOLVED {
            writeln!(output, "Guessed word: {guess} in {attempts} attempts")?;
            return Ok(attempts);
        }

        solver.add_result(&guess, outcome);
        log::info!("{} possible words after '{guess}' -> {outcome}", solver.remaining());
    }
}

/// Read the first whitespace-delimited token of the next line
fn read_token<R: BufRead>(input: &mut R) -> Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("error reading result: unexpected end of input");
    }
    line.split_whitespace()
        .next()
        .map(str::to_string)
        .context("error reading result: empty line")
}
