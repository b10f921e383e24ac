//! Numeral text <-> `f64`.
//!
//! Registers hold text; numbers exist only for the duration of an equals press.

use tally_types::{EngineError, RegisterName};

/// Parse the text held in `register`.
///
/// Empty text is not a number: `3 + =` fails here rather than treating the
/// missing operand as zero.
pub fn parse_numeral(register: RegisterName, text: &str) -> Result<f64, EngineError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(EngineError::Parse {
            register,
            text: text.to_string(),
        });
    }
    trimmed.parse::<f64>().map_err(|_| EngineError::Parse {
        register,
        text: text.to_string(),
    })
}

/// Canonical text form of a result.
///
/// Shortest round-trip rendering with a mandatory fractional part for integral
/// values (`15.0`), exponent form outside `1e-4..1e16`, and `inf`/`NaN` for
/// non-finite values. Negative zero is folded to `0.0`.
#[must_use]
pub fn format_result(value: f64) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{value:?}")
}
