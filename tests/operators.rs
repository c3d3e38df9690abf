mod cases;

use pretty_assertions::assert_eq;
use tally::{Assoc, Calculator};

eval_case! {
    name: power_is_right_associative,
    input: "2 ^ 3 ^ 2",
    value: 512.0,
}

eval_case! {
    name: division_is_left_associative,
    input: "8 / 4 / 2",
    value: 1.0,
}

eval_case! {
    name: subtraction_is_left_associative,
    input: "10 - 4 - 3",
    value: 3.0,
}

eval_case! {
    name: power_binds_tighter_than_mul,
    input: "2 ^ 3 + 4 * 2",
    value: 16.0,
}

eval_case! {
    name: power_with_grouped_exponent,
    input: "2 ^ (3 + 1)",
    value: 16.0,
}

#[test]
fn registering_a_remainder_operator() {
    let mut calc = Calculator::new();
    calc.add_operator('%', 2, Assoc::Left, |a, b| Ok(a % b));
    assert_eq!(calc.evaluate("7 % 3").unwrap(), 1.0);
    // Same precedence tier as * and /, left associative
    assert_eq!(calc.evaluate("10 % 4 % 3").unwrap(), 2.0);
    assert_eq!(calc.evaluate("1 + 7 % 3").unwrap(), 2.0);
}

#[test]
fn re_registering_overwrites_the_descriptor() {
    let mut calc = Calculator::new();
    assert_eq!(calc.evaluate("2 + 3").unwrap(), 5.0);

    calc.add_operator('+', 2, Assoc::Left, |a, b| Ok(a * b));
    assert_eq!(calc.evaluate("2 + 3").unwrap(), 6.0);
}

#[test]
fn unregistered_symbol_is_rejected_until_registered() {
    let mut calc = Calculator::new();
    assert!(matches!(
        calc.evaluate("7 % 3"),
        Err(tally::EvalError::UnexpectedChar { ch: '%', .. })
    ));

    calc.add_operator('%', 2, Assoc::Left, |a, b| Ok(a % b));
    assert_eq!(calc.evaluate("7 % 3").unwrap(), 1.0);
}
