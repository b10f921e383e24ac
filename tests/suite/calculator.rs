//! Accumulator engine properties

use tally_core::{
    Accumulator, EngineError, Operator, Phase, RegisterName, format_result, parse_numeral,
};
use tally_types::Digit;

use crate::common::{digit, evaluate, press};

#[test]
fn p1_digits_accumulate_as_text() {
    let sequences: [&[u8]; 4] = [&[7], &[1, 2, 3], &[0, 0, 5], &[9, 8, 7, 6, 5, 4, 3, 2, 1, 0]];
    for sequence in sequences {
        let mut acc = Accumulator::new();
        for &d in sequence {
            acc.on_digit(digit(d));
        }
        let expected: String = sequence.iter().map(|d| char::from(b'0' + d)).collect();
        assert_eq!(acc.registers().x(), expected);
        assert_eq!(acc.phase(), Phase::Entering);
    }
}

#[test]
fn p2_operator_shifts_x_into_y() {
    for op in Operator::ALL {
        let mut acc = Accumulator::new();
        press(&mut acc, "42").unwrap();
        let state = acc.on_operator(op);
        assert_eq!(state.y(), "42");
        assert_eq!(state.x(), "");
        assert_eq!(state.operator(), Some(op));
    }
}

#[test]
fn p3_three_plus_twelve() {
    let state = evaluate("3+12=").unwrap();
    assert_eq!(state.x(), "15.0");
    assert_eq!(state.y(), "");
    assert_eq!(state.operator(), None);
}

#[test]
fn p4_equals_without_operator_is_identity() {
    let mut acc = Accumulator::new();
    press(&mut acc, "58").unwrap();
    let before = acc.registers().clone();
    acc.on_equals().unwrap();
    assert_eq!(acc.registers(), &before);

    // Also after a completed calculation.
    let state = press(&mut acc, "+2==").unwrap();
    assert_eq!(state.x(), "60.0");
}

#[test]
fn p5_all_four_operators() {
    for (sequence, expected) in [("6*7=", 42.0), ("9-4=", 5.0), ("8/2=", 4.0), ("2+2=", 4.0)] {
        let state = evaluate(sequence).unwrap();
        assert_eq!(state.x(), format_result(expected), "{sequence}");
    }
    assert_eq!(evaluate("6*7=").unwrap().x(), "42.0");
}

#[test]
fn p6_division_by_zero_leaves_registers_pending() {
    let mut acc = Accumulator::new();
    press(&mut acc, "5/0").unwrap();
    let before = acc.registers().clone();

    let err = acc.on_equals().unwrap_err();
    assert_eq!(err, EngineError::DivisionByZero);
    assert_eq!(acc.registers(), &before);
    assert_eq!(acc.registers().x(), "0");
    assert_eq!(acc.registers().y(), "5");
    assert_eq!(acc.registers().operator(), Some(Operator::Div));
    assert_eq!(acc.phase(), Phase::OperatorPending);
}

#[test]
fn p6_zero_divisor_with_leading_zeros() {
    assert_eq!(evaluate("5/00="), Err(EngineError::DivisionByZero));
}

#[test]
fn p7_repeated_operator_is_permissive() {
    assert_eq!(evaluate("3++2=").unwrap(), evaluate("3+2=").unwrap());
    assert_eq!(evaluate("3++2=").unwrap().x(), "5.0");
}

#[test]
fn p8_instances_are_independent() {
    let mut left = Accumulator::new();
    let mut right = Accumulator::new();

    press(&mut left, "12+").unwrap();
    press(&mut right, "9*").unwrap();
    press(&mut left, "3").unwrap();
    press(&mut right, "4=").unwrap();

    assert_eq!(left.registers().x(), "3");
    assert_eq!(left.registers().y(), "12");
    assert_eq!(left.registers().operator(), Some(Operator::Add));
    assert_eq!(right.registers().x(), "36.0");
    assert_eq!(right.registers().y(), "");

    assert_eq!(left.on_equals().unwrap().x(), "15.0");
    assert_eq!(right.registers().x(), "36.0");
}

#[test]
fn fractional_results_use_shortest_form() {
    assert_eq!(evaluate("1/4=").unwrap().x(), "0.25");
    assert_eq!(evaluate("1/3=").unwrap().x(), "0.3333333333333333");
}

#[test]
fn results_round_trip_through_parse() {
    let state = evaluate("7/8=").unwrap();
    let value = parse_numeral(RegisterName::X, state.x()).unwrap();
    assert_eq!(format_result(value), state.x());
}

#[test]
fn clear_returns_to_initial_state() {
    let mut acc = Accumulator::new();
    press(&mut acc, "9*").unwrap();
    let state = press(&mut acc, "C").unwrap();
    assert_eq!(state, Accumulator::new().display());
    assert_eq!(state.primary(), "0");
}

#[test]
fn digit_keys_cover_zero_through_nine() {
    let mut acc = Accumulator::new();
    for d in Digit::all() {
        acc.on_digit(d);
    }
    assert_eq!(acc.registers().x(), "0123456789");
}
