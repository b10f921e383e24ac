//! Core domain logic for Tally.
//!
//! This crate contains the calculator engine and the small amount of arithmetic
//! around it:
//!
//! - [`Accumulator`]: the X/Y/Operator register machine driven by keypad events
//! - [`parse_numeral`] / [`format_result`]: the single parse and format points
//! - [`loan`]: monthly payment computation for amortized loans
//!
//! Nothing here performs IO. One accumulator is owned by one caller; separate
//! instances share no state.

mod accumulator;
mod arithmetic;
pub mod loan;
mod numeral;

pub use accumulator::{Accumulator, Phase, Registers};
pub use arithmetic::apply;
pub use numeral::{format_result, parse_numeral};

pub use tally_types::{DisplayState, EngineError, Key, Operator, RegisterName};
