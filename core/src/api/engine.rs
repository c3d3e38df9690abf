//! The calculator engine.

use tracing::debug;

use crate::errors::EvalError;
use crate::evaluator::eval_postfix;
use crate::lexer::tokenize;
use crate::operators::{Assoc, BinaryFn, OperatorTable};
use crate::parser::to_postfix;

/// Arithmetic expression engine.
///
/// Owns the operator table and runs lexer → shunting-yard parser → postfix
/// evaluator over an input string. Evaluation takes `&self` and keeps no
/// state between calls, so a `Calculator` behind an `Arc` can serve
/// concurrent callers; registering an operator takes `&mut self`, which
/// rules out mutation while evaluations are in flight.
///
/// # Example
///
/// ```
/// use tally_core::{Assoc, Calculator};
///
/// let mut calc = Calculator::new();
/// assert_eq!(calc.evaluate("1 + 2 * 3").unwrap(), 7.0);
///
/// calc.add_operator('%', 2, Assoc::Left, |a, b| Ok(a % b));
/// assert_eq!(calc.evaluate("7 % 3").unwrap(), 1.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    operators: OperatorTable,
}

impl Calculator {
    /// Engine with the default operators `+ - * / ^`.
    pub fn new() -> Self {
        Self {
            operators: OperatorTable::with_defaults(),
        }
    }

    /// Register (or overwrite) an operator.
    pub fn add_operator(&mut self, symbol: char, precedence: u8, assoc: Assoc, apply: BinaryFn) {
        self.operators.register(symbol, precedence, assoc, apply);
    }

    /// Access the operator table.
    pub fn operators(&self) -> &OperatorTable {
        &self.operators
    }

    /// Evaluate an infix arithmetic expression.
    ///
    /// Whitespace anywhere in the input is ignored.
    pub fn evaluate(&self, expression: &str) -> Result<f64, EvalError> {
        debug!(expression, "evaluate");
        let tokens = tokenize(expression, &self.operators)?;
        let postfix = to_postfix(&tokens, &self.operators)?;
        eval_postfix(&postfix, &self.operators)
    }
}
