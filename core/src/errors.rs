//! Evaluation errors.
//!
//! Every anomaly the core can hit is a variant here, returned as an ordinary
//! `Result` value. Lexing and parsing errors carry the byte offset of the
//! offending character so callers can point at the source.

use core::ops::Range;
use thiserror::Error;

/// Error produced while lexing, parsing, or evaluating an expression.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// A character that is neither a digit, a registered operator symbol,
    /// nor a parenthesis.
    #[error("unexpected character '{ch}' at offset {pos}")]
    UnexpectedChar { ch: char, pos: usize },

    /// A `)` with no matching `(`, or a `(` never closed.
    #[error("unbalanced parenthesis at offset {pos}")]
    UnbalancedParen { pos: usize },

    /// An operator symbol with no descriptor in the table.
    ///
    /// The lexer only emits registered symbols, so this can only surface if
    /// the table and token stream disagree.
    #[error("unknown operator '{symbol}' at offset {pos}")]
    UnknownOperator { symbol: char, pos: usize },

    /// An operator was applied with fewer than two operands on the stack.
    #[error("operator '{symbol}' at offset {pos} is missing an operand")]
    MissingOperand { symbol: char, pos: usize },

    /// More than one value left on the stack after evaluation.
    #[error("expression leaves a dangling operand")]
    TrailingOperand,

    /// Nothing to evaluate.
    #[error("empty expression")]
    EmptyExpression,

    /// Division with a zero divisor.
    #[error("division by zero")]
    DivisionByZero,
}

impl EvalError {
    /// Byte range of the offending input, when the error has a location.
    pub fn span(&self) -> Option<Range<usize>> {
        match self {
            EvalError::UnexpectedChar { ch, pos } => Some(*pos..*pos + ch.len_utf8()),
            EvalError::UnbalancedParen { pos } => Some(*pos..*pos + 1),
            EvalError::UnknownOperator { symbol, pos }
            | EvalError::MissingOperand { symbol, pos } => {
                Some(*pos..*pos + symbol.len_utf8())
            }
            EvalError::TrailingOperand
            | EvalError::EmptyExpression
            | EvalError::DivisionByZero => None,
        }
    }
}
