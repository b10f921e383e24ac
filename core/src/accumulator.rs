//! The X/Y/Operator register machine.
//!
//! ```text
//!   3        x = "3"    y = ""   op = none     Entering
//!   3 +      x = ""     y = "3"  op = +        OperatorPending
//!   3 + 12   x = "12"   y = "3"  op = +        OperatorPending
//!   3 + 12 = x = "15.0" y = ""   op = none     Entering
//! ```
//!
//! Evaluation is immediate and left-to-right with no precedence: an operator
//! press replaces any pending operation, and equals applies `y op x`.

use tally_types::{Digit, DisplayState, EngineError, Key, Operator, RegisterName};

use crate::arithmetic::apply;
use crate::numeral::{format_result, parse_numeral};

/// Left operand used when an operator is pressed before any digit.
const IMPLICIT_LEFT_OPERAND: &str = "0";

/// Which half of a binary operation is being typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No operator pending; digits build the value in X.
    Entering,
    /// An operator and its left operand are stored; digits build the right operand in X.
    OperatorPending,
}

/// A stored left operand together with the operator waiting for its right operand.
///
/// Keeping the two in one value makes "operator pending without a left
/// operand" unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingOperation {
    y: String,
    operator: Operator,
}

/// The complete state of one calculator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registers {
    x: String,
    pending: Option<PendingOperation>,
}

impl Registers {
    #[must_use]
    pub fn x(&self) -> &str {
        &self.x
    }

    /// The stored left operand, or `""` when no operator is pending.
    #[must_use]
    pub fn y(&self) -> &str {
        self.pending.as_ref().map_or("", |pending| pending.y.as_str())
    }

    #[must_use]
    pub fn operator(&self) -> Option<Operator> {
        self.pending.as_ref().map(|pending| pending.operator)
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.pending.is_some() {
            Phase::OperatorPending
        } else {
            Phase::Entering
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> DisplayState {
        DisplayState::new(self.x.clone(), self.y(), self.operator())
    }
}

/// Four-function calculator engine.
///
/// Every operation runs to completion and returns the new [`DisplayState`].
/// `on_equals` is the only fallible operation and leaves the registers exactly
/// as they were when it fails.
#[derive(Debug, Clone, Default)]
pub struct Accumulator {
    registers: Registers,
}

impl Accumulator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn registers(&self) -> &Registers {
        &self.registers
    }

    #[inline]
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.registers.phase()
    }

    #[must_use]
    pub fn display(&self) -> DisplayState {
        self.registers.snapshot()
    }

    /// Append `digit` to X.
    ///
    /// Purely textual: X may hold a previous result (`15.0` then `3` gives `15.03`).
    pub fn on_digit(&mut self, digit: Digit) -> DisplayState {
        self.registers.x.push(digit.as_char());
        tracing::trace!(x = %self.registers.x, "digit");
        self.display()
    }

    /// Move X into Y, clear X and record `operator`.
    ///
    /// With X empty, a pending left operand is kept and only the operator is
    /// replaced (`3 + + 2 =` is `3 + 2 =`). With X empty and nothing pending,
    /// the left operand is `0`.
    pub fn on_operator(&mut self, operator: Operator) -> DisplayState {
        let x = std::mem::take(&mut self.registers.x);
        let y = match self.registers.pending.take() {
            Some(pending) if x.is_empty() => pending.y,
            _ if x.is_empty() => IMPLICIT_LEFT_OPERAND.to_string(),
            _ => x,
        };
        tracing::debug!(%operator, y = %y, "operator pending");
        self.registers.pending = Some(PendingOperation { y, operator });
        self.display()
    }

    /// Apply the pending operation as `y op x`.
    ///
    /// Identity when nothing is pending. On success X holds the canonical
    /// text of the result and the pending operation is cleared.
    pub fn on_equals(&mut self) -> Result<DisplayState, EngineError> {
        let Some(pending) = self.registers.pending.as_ref() else {
            return Ok(self.display());
        };

        let lhs = parse_numeral(RegisterName::Y, &pending.y)?;
        let rhs = parse_numeral(RegisterName::X, &self.registers.x)?;
        let value = match apply(pending.operator, lhs, rhs) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(
                    operator = %pending.operator,
                    y = %pending.y,
                    x = %self.registers.x,
                    "{err}"
                );
                return Err(err);
            }
        };

        self.registers.x = format_result(value);
        self.registers.pending = None;
        tracing::debug!(x = %self.registers.x, "evaluated");
        Ok(self.display())
    }

    /// Reset to the initial state.
    pub fn clear(&mut self) -> DisplayState {
        self.registers = Registers::default();
        tracing::trace!("cleared");
        self.display()
    }

    /// Dispatch one keypad event.
    pub fn press(&mut self, key: Key) -> Result<DisplayState, EngineError> {
        match key {
            Key::Digit(digit) => Ok(self.on_digit(digit)),
            Key::Operator(operator) => Ok(self.on_operator(operator)),
            Key::Equals => self.on_equals(),
            Key::Clear => Ok(self.clear()),
        }
    }
}
