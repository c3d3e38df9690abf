mod cases;

use pretty_assertions::assert_eq;
use tally::EvalError;

eval_case! {
    name: division_by_zero,
    input: "5 / 0",
    error: EvalError::DivisionByZero,
}

eval_case! {
    name: division_by_computed_zero,
    input: "10 / (5 - 5)",
    error: EvalError::DivisionByZero,
}

eval_case! {
    name: unexpected_character,
    input: "2 # 3",
    error: EvalError::UnexpectedChar { ch: '#', pos: 2 },
}

eval_case! {
    name: stray_close_paren,
    input: "1 + 2)",
    error: EvalError::UnbalancedParen { pos: 5 },
}

eval_case! {
    name: unclosed_open_paren,
    input: "(1 + 2",
    error: EvalError::UnbalancedParen { pos: 0 },
}

eval_case! {
    name: empty_expression,
    input: "",
    error: EvalError::EmptyExpression,
}

eval_case! {
    name: whitespace_only,
    input: "   ",
    error: EvalError::EmptyExpression,
}

eval_case! {
    name: dangling_operator,
    input: "1 +",
    error: EvalError::MissingOperand { symbol: '+', .. },
}

eval_case! {
    name: operator_without_left_operand,
    input: "* 2",
    error: EvalError::MissingOperand { symbol: '*', .. },
}

eval_case! {
    name: two_numbers_no_operator,
    input: "1 2",
    error: EvalError::TrailingOperand,
}

#[test]
fn division_by_zero_propagates_through_enclosing_operations() {
    let calc = tally::Calculator::new();
    // The failure inside the parens aborts the whole evaluation instead of
    // leaking a sentinel into the outer addition.
    assert_eq!(calc.evaluate("1 + 4 / 0"), Err(EvalError::DivisionByZero));
}

#[test]
fn identical_inputs_fail_identically() {
    let calc = tally::Calculator::new();
    assert_eq!(calc.evaluate("5 / 0"), calc.evaluate("5 / 0"));
}
