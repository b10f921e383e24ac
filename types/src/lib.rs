//! Core domain types for Tally.
//!
//! This crate contains pure domain types with no IO and minimal dependencies.
//! The arithmetic that gives these types meaning lives in `tally-core`.

#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory

mod contact;
mod ids;

pub use contact::Contact;
pub use ids::ContactId;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// ============================================================================
// Digit
// ============================================================================

/// A single decimal digit, 0 through 9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DigitError {
    #[error("digit out of range: {0} (expected 0-9)")]
    OutOfRange(u8),
    #[error("not a decimal digit: {0:?}")]
    NotADigit(char),
}

impl Digit {
    pub const NINE: Digit = Digit(9);

    pub fn new(value: u8) -> Result<Self, DigitError> {
        if value <= 9 {
            Ok(Self(value))
        } else {
            Err(DigitError::OutOfRange(value))
        }
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn as_char(self) -> char {
        (b'0' + self.0) as char
    }

    /// All ten digits in ascending order.
    pub fn all() -> impl Iterator<Item = Digit> {
        (0..=9).map(Digit)
    }
}

impl TryFrom<u8> for Digit {
    type Error = DigitError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<char> for Digit {
    type Error = DigitError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        value
            .to_digit(10)
            .map(|d| Self(d as u8))
            .ok_or(DigitError::NotADigit(value))
    }
}

impl From<Digit> for u8 {
    fn from(value: Digit) -> Self {
        value.0
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

// ============================================================================
// Operator
// ============================================================================

/// A binary operation waiting for its right operand.
///
/// "No operation pending" is `Option<Operator>::None`, never a variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown operator: {0:?} (expected one of + - * /)")]
pub struct OperatorParseError(pub String);

impl Operator {
    /// Keypad order, top to bottom.
    pub const ALL: [Operator; 4] = [Operator::Div, Operator::Mul, Operator::Sub, Operator::Add];

    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }

    /// Accepts the ASCII symbols plus the usual keypad glyphs for multiply and divide.
    #[must_use]
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operator::Add),
            '-' | '−' => Some(Operator::Sub),
            '*' | 'x' | 'X' | '×' => Some(Operator::Mul),
            '/' | '÷' => Some(Operator::Div),
            _ => None,
        }
    }
}

impl TryFrom<char> for Operator {
    type Error = OperatorParseError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        Self::from_symbol(value).ok_or_else(|| OperatorParseError(value.to_string()))
    }
}

impl FromStr for Operator {
    type Err = OperatorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::try_from(c),
            _ => match trimmed.to_ascii_lowercase().as_str() {
                "add" | "plus" => Ok(Operator::Add),
                "sub" | "minus" => Ok(Operator::Sub),
                "mul" | "times" => Ok(Operator::Mul),
                "div" => Ok(Operator::Div),
                _ => Err(OperatorParseError(trimmed.to_string())),
            },
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

// ============================================================================
// Key (input events)
// ============================================================================

/// One press on the calculator keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Digit(Digit),
    Operator(Operator),
    Equals,
    Clear,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyParseError {
    #[error("empty key")]
    Empty,
    #[error("unknown key: {0:?}")]
    Unknown(String),
}

impl Key {
    pub fn from_char(c: char) -> Result<Self, KeyParseError> {
        if let Ok(digit) = Digit::try_from(c) {
            return Ok(Key::Digit(digit));
        }
        if let Some(op) = Operator::from_symbol(c) {
            return Ok(Key::Operator(op));
        }
        match c {
            '=' => Ok(Key::Equals),
            'c' | 'C' => Ok(Key::Clear),
            _ => Err(KeyParseError::Unknown(c.to_string())),
        }
    }
}

impl FromStr for Key {
    type Err = KeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Err(KeyParseError::Empty),
            (Some(c), None) => Self::from_char(c),
            _ => match trimmed.to_ascii_lowercase().as_str() {
                "clear" => Ok(Key::Clear),
                "equals" | "enter" => Ok(Key::Equals),
                other => other
                    .parse::<Operator>()
                    .map(Key::Operator)
                    .map_err(|_| KeyParseError::Unknown(trimmed.to_string())),
            },
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Digit(d) => write!(f, "{d}"),
            Key::Operator(op) => write!(f, "{op}"),
            Key::Equals => write!(f, "="),
            Key::Clear => write!(f, "C"),
        }
    }
}

// ============================================================================
// Registers & display
// ============================================================================

/// Names the two operand registers, for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegisterName {
    X,
    Y,
}

impl fmt::Display for RegisterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegisterName::X => write!(f, "X"),
            RegisterName::Y => write!(f, "Y"),
        }
    }
}

/// Snapshot of the register set handed to the presentation layer after each key.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DisplayState {
    x: String,
    y: String,
    operator: Option<Operator>,
}

impl DisplayState {
    #[must_use]
    pub fn new(x: impl Into<String>, y: impl Into<String>, operator: Option<Operator>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
            operator,
        }
    }

    /// Text of the X register; empty right after an operator press.
    #[must_use]
    pub fn x(&self) -> &str {
        &self.x
    }

    /// Text of the Y register; empty when no operator is pending.
    #[must_use]
    pub fn y(&self) -> &str {
        &self.y
    }

    #[must_use]
    pub fn operator(&self) -> Option<Operator> {
        self.operator
    }

    /// What the main display cell shows: X, or `0` for an empty X.
    #[must_use]
    pub fn primary(&self) -> &str {
        if self.x.is_empty() { "0" } else { &self.x }
    }
}

impl fmt::Display for DisplayState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.primary())
    }
}

// ============================================================================
// Errors
// ============================================================================

/// Failures of the equals key. Registers are left untouched when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("register {register} does not hold a number: {text:?}")]
    Parse { register: RegisterName, text: String },
}
