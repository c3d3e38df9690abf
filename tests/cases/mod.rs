//! Shared case macro for the evaluator integration tests.
//!
//! `value:` cases compare within floating-point tolerance; `error:` cases
//! match the expected `EvalError` pattern.

#[macro_export]
macro_rules! eval_case {
    (name: $name:ident, input: $input:expr, value: $value:expr $(,)?) => {
        #[test]
        fn $name() {
            let calc = tally::Calculator::new();
            let result = calc.evaluate($input).unwrap();
            let expected: f64 = $value;
            assert!(
                (result - expected).abs() < 1e-9,
                "evaluate({:?}) = {result}, expected {expected}",
                $input,
            );
        }
    };
    (name: $name:ident, input: $input:expr, error: $err:pat $(,)?) => {
        #[test]
        fn $name() {
            let calc = tally::Calculator::new();
            let result = calc.evaluate($input);
            assert!(
                matches!(result, Err($err)),
                "evaluate({:?}) = {result:?}",
                $input,
            );
        }
    };
}
