//! Loan payment tests

use tally_core::loan::{LoanError, LoanField, LoanTerms, format_payment, monthly_payment};

use crate::common::evaluate;

#[test]
fn thirty_year_mortgage_at_six_percent() {
    let terms = LoanTerms::parse("200000", "6", "30").unwrap();
    let payment = monthly_payment(&terms).unwrap();
    assert_eq!(format_payment(payment), "Monthly Payment: $1199.10");
}

#[test]
fn amount_from_calculator_result() {
    let amount = evaluate("150000+50000=").unwrap();
    let terms = LoanTerms::parse(amount.x(), "6", "30").unwrap();
    assert_eq!(terms.principal(), 200_000.0);
    let payment = monthly_payment(&terms).unwrap();
    assert_eq!(format_payment(payment), "Monthly Payment: $1199.10");
}

#[test]
fn zero_rate_splits_principal_evenly() {
    let terms = LoanTerms::new(24_000.0, 0.0, 2.0);
    assert_eq!(monthly_payment(&terms).unwrap(), 1000.0);
}

#[test]
fn zero_term_is_rejected() {
    let terms = LoanTerms::new(1000.0, 5.0, 0.0);
    assert_eq!(
        monthly_payment(&terms),
        Err(LoanError::InvalidTerm { years: 0.0 })
    );
}

#[test]
fn unparsable_field_is_named() {
    let err = LoanTerms::parse("lots", "6", "30").unwrap_err();
    assert_eq!(
        err,
        LoanError::InvalidNumber {
            field: LoanField::Amount,
            text: "lots".to_string(),
        }
    );
}
