//! Monthly payment for a fixed-rate amortized loan.
//!
//! `M = P * r(1+r)^n / ((1+r)^n - 1)` with `r` the monthly rate and `n` the
//! number of monthly payments. A zero rate degenerates to `P / n`.

use std::fmt;

use thiserror::Error;

const MONTHS_PER_YEAR: f64 = 12.0;

/// Which input field a loan error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoanField {
    Amount,
    Rate,
    Term,
}

impl fmt::Display for LoanField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LoanField::Amount => "loan amount",
            LoanField::Rate => "annual interest rate",
            LoanField::Term => "loan term",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LoanError {
    #[error("please enter a valid number for the {field}: {text:?}")]
    InvalidNumber { field: LoanField, text: String },
    #[error("invalid loan term: {years} years")]
    InvalidTerm { years: f64 },
    #[error("payment is not a finite number")]
    NonFinite,
}

/// Inputs of a payment calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoanTerms {
    principal: f64,
    annual_rate_percent: f64,
    years: f64,
}

impl LoanTerms {
    #[must_use]
    pub const fn new(principal: f64, annual_rate_percent: f64, years: f64) -> Self {
        Self {
            principal,
            annual_rate_percent,
            years,
        }
    }

    /// Build terms from raw text fields, as typed by a user.
    pub fn parse(amount: &str, rate: &str, years: &str) -> Result<Self, LoanError> {
        Ok(Self::new(
            parse_field(LoanField::Amount, amount)?,
            parse_field(LoanField::Rate, rate)?,
            parse_field(LoanField::Term, years)?,
        ))
    }

    #[must_use]
    pub const fn principal(&self) -> f64 {
        self.principal
    }

    #[must_use]
    pub const fn annual_rate_percent(&self) -> f64 {
        self.annual_rate_percent
    }

    #[must_use]
    pub const fn years(&self) -> f64 {
        self.years
    }

    #[must_use]
    pub fn monthly_rate(&self) -> f64 {
        self.annual_rate_percent / 100.0 / MONTHS_PER_YEAR
    }

    #[must_use]
    pub fn payment_count(&self) -> f64 {
        self.years * MONTHS_PER_YEAR
    }
}

fn parse_field(field: LoanField, text: &str) -> Result<f64, LoanError> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| LoanError::InvalidNumber {
            field,
            text: text.to_string(),
        })
}

/// Compute the monthly payment. A term of zero or fewer payments is rejected.
pub fn monthly_payment(terms: &LoanTerms) -> Result<f64, LoanError> {
    let n = terms.payment_count();
    if n <= 0.0 {
        return Err(LoanError::InvalidTerm { years: terms.years });
    }

    let r = terms.monthly_rate();
    let payment = if r == 0.0 {
        terms.principal / n
    } else {
        let growth = (1.0 + r).powf(n);
        terms.principal * (r * growth) / (growth - 1.0)
    };

    if payment.is_finite() {
        tracing::debug!(payment, principal = terms.principal, n, "monthly payment");
        Ok(payment)
    } else {
        Err(LoanError::NonFinite)
    }
}

#[must_use]
pub fn format_payment(payment: f64) -> String {
    format!("Monthly Payment: ${payment:.2}")
}
