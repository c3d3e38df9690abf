//! Postfix evaluation over a value stack.

use crate::errors::EvalError;
use crate::operators::OperatorTable;
use crate::parser::PostfixItem;

/// Evaluate a postfix sequence down to a single value.
///
/// Operand underflow and leftover operands are errors; the reference
/// behavior of returning "whatever is on top" is deliberately not kept.
pub fn eval_postfix(items: &[PostfixItem], table: &OperatorTable) -> Result<f64, EvalError> {
    let mut stack: Vec<f64> = Vec::new();

    for item in items {
        match *item {
            PostfixItem::Number(value) => stack.push(value),
            PostfixItem::Op { symbol, pos } => {
                // b was pushed after a, so it comes off first.
                let b = stack
                    .pop()
                    .ok_or(EvalError::MissingOperand { symbol, pos })?;
                let a = stack
                    .pop()
                    .ok_or(EvalError::MissingOperand { symbol, pos })?;
                let op = table
                    .get(symbol)
                    .ok_or(EvalError::UnknownOperator { symbol, pos })?;
                stack.push((op.apply)(a, b)?);
            }
        }
    }

    match stack.len() {
        0 => Err(EvalError::EmptyExpression),
        1 => Ok(stack[0]),
        _ => Err(EvalError::TrailingOperand),
    }
}
