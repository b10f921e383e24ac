//! Line-oriented calculator session.
//!
//! Each input line is a key sequence (`3 + 12 =`, `3+12=`, `clear`). The
//! display is printed after every line. An engine error stops the line: it is
//! reported inline together with the keys it left unpressed, and the registers
//! stay as they were before the failing key.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use tally_core::{Accumulator, DisplayState, EngineError, Key};
use tally_types::KeyParseError;
use thiserror::Error;

/// An engine error partway through a line, with the keys after it that were never pressed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{error}{}", unpressed_note(.skipped))]
pub(crate) struct PressError {
    #[source]
    pub(crate) error: EngineError,
    pub(crate) skipped: Vec<Key>,
}

fn unpressed_note(skipped: &[Key]) -> String {
    let keys = skipped
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    match skipped.len() {
        0 => String::new(),
        1 => format!(" (1 key not pressed: {keys})"),
        n => format!(" ({n} keys not pressed: {keys})"),
    }
}

/// Split a line into keys.
///
/// Whole words (`plus`, `clear`, `=`) are tried first; anything else is read
/// one character at a time, so `3+12=` and `3 + 12 =` are the same sequence.
pub(crate) fn parse_keys(line: &str) -> Result<Vec<Key>, KeyParseError> {
    let mut keys = Vec::new();
    for token in line.split_whitespace() {
        if let Ok(key) = token.parse::<Key>() {
            keys.push(key);
            continue;
        }
        for c in token.chars() {
            keys.push(Key::from_char(c)?);
        }
    }
    Ok(keys)
}

/// Press `keys` in order, stopping at the first engine error.
pub(crate) fn press_all(acc: &mut Accumulator, keys: &[Key]) -> Result<DisplayState, PressError> {
    let mut state = acc.display();
    for (i, &key) in keys.iter().enumerate() {
        state = acc.press(key).map_err(|error| PressError {
            error,
            skipped: keys[i + 1..].to_vec(),
        })?;
    }
    Ok(state)
}

/// Parse and run one line against `acc`. A line that fails to parse presses nothing.
pub(crate) fn evaluate_line(acc: &mut Accumulator, line: &str) -> Result<DisplayState> {
    let keys = parse_keys(line)?;
    Ok(press_all(acc, &keys)?)
}

/// The main display, plus the Y and operator registers when asked for.
pub(crate) fn render(state: &DisplayState, show_registers: bool) -> String {
    if !show_registers {
        return state.primary().to_string();
    }
    let y = if state.y().is_empty() { "-" } else { state.y() };
    let op = state
        .operator()
        .map_or_else(|| "-".to_string(), |op| op.to_string());
    format!("{}\n  Y: {y}  Op: {op}", state.primary())
}

pub(crate) fn run_session<R: BufRead, W: Write>(
    input: R,
    mut output: W,
    show_registers: bool,
) -> io::Result<()> {
    let mut acc = Accumulator::new();
    writeln!(output, "{}", render(&acc.display(), show_registers))?;

    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        match line {
            "" => continue,
            "q" | "quit" => break,
            _ => {}
        }

        match evaluate_line(&mut acc, line) {
            Ok(state) => writeln!(output, "{}", render(&state, show_registers))?,
            Err(err) => {
                tracing::debug!(line, %err, "rejected input line");
                writeln!(output, "error: {err}")?;
            }
        }
    }

    tracing::debug!("calculator session ended");
    Ok(())
}
