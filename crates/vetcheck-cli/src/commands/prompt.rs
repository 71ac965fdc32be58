//! Validated console input
//!
//! Each prompt is repeated until the line converts to the requested value.
//! `Ok(None)` means the input stream closed before a valid answer arrived.

use super::{io_error, Result};
use std::io::{self, BufRead, Write};
use vetcheck_core::Species;

pub const INVALID_INPUT: &str = "Invalid input. Please try again.";

/// Prompt until `parse` accepts the line
pub fn read_valid<R, W, T, F>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    parse: F,
) -> Result<Option<T>>
where
    R: BufRead,
    W: Write,
    F: Fn(&str) -> Option<T>,
{
    loop {
        write!(output, "{}", prompt).map_err(|e| io_error("prompt", e))?;
        output.flush().map_err(|e| io_error("prompt", e))?;

        let mut line = String::new();
        let read = match input.read_line(&mut line) {
            Ok(read) => read,
            // The undecodable line is already consumed
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                writeln!(output, "{}", INVALID_INPUT).map_err(|e| io_error("prompt", e))?;
                continue;
            }
            Err(e) => return Err(io_error("read_input", e)),
        };
        if read == 0 {
            return Ok(None);
        }

        match parse(line.trim_end_matches(['\r', '\n'])) {
            Some(value) => return Ok(Some(value)),
            None => writeln!(output, "{}", INVALID_INPUT).map_err(|e| io_error("prompt", e))?,
        }
    }
}

/// Any line, as typed
pub fn text(line: &str) -> Option<String> {
    Some(line.to_string())
}

pub fn integer(line: &str) -> Option<i64> {
    line.trim().parse().ok()
}

/// An integer from a fixed set of choices
pub fn choice(options: &'static [i64]) -> impl Fn(&str) -> Option<i64> {
    move |line: &str| integer(line).filter(|n| options.contains(n))
}

/// A species by menu number or by name
pub fn species(line: &str) -> Option<Species> {
    match integer(line) {
        Some(n) => usize::try_from(n).ok().and_then(Species::from_menu_index),
        None => line.parse().ok(),
    }
}

/// `y` or `n`, case-insensitive
pub fn yes_no(line: &str) -> Option<bool> {
    match line.trim().to_lowercase().as_str() {
        "y" => Some(true),
        "n" => Some(false),
        _ => None,
    }
}
