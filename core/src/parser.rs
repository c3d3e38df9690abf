//! Infix → postfix conversion (shunting-yard).
//!
//! Precedence and associativity come from the operator table; the algorithm
//! itself only compares them. Unary `+` and `-` are rewritten on the fly:
//! `-x` becomes `-1 x *`, so the evaluator never sees a unary operator.

use tracing::trace;

use crate::errors::EvalError;
use crate::lexer::{Token, TokenKind};
use crate::operators::{Assoc, OperatorTable};

/// One element of a postfix (RPN) sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PostfixItem {
    Number(f64),
    Op { symbol: char, pos: usize },
}

/// Operator-stack entry. Parentheses sit on the same stack as operators and
/// act as a barrier when popping.
#[derive(Debug, Clone, Copy)]
enum StackEntry {
    Op { symbol: char, pos: usize },
    OpenParen { pos: usize },
}

/// Convert a token sequence into postfix order.
///
/// Unbalanced parentheses are rejected rather than tolerated: a stray `)`
/// and a `(` still open at the end of input both fail with the offset of
/// the offending parenthesis.
pub fn to_postfix(tokens: &[Token], table: &OperatorTable) -> Result<Vec<PostfixItem>, EvalError> {
    let mut output: Vec<PostfixItem> = Vec::new();
    let mut stack: Vec<StackEntry> = Vec::new();

    for (i, token) in tokens.iter().enumerate() {
        match token.kind {
            TokenKind::Number(value) => output.push(PostfixItem::Number(value)),

            TokenKind::OpenParen => stack.push(StackEntry::OpenParen { pos: token.pos }),

            TokenKind::CloseParen => loop {
                match stack.pop() {
                    Some(StackEntry::Op { symbol, pos }) => {
                        output.push(PostfixItem::Op { symbol, pos });
                    }
                    Some(StackEntry::OpenParen { .. }) => break,
                    None => return Err(EvalError::UnbalancedParen { pos: token.pos }),
                }
            },

            TokenKind::Symbol(symbol) => {
                // Unary context: a sign at the start of the expression, right
                // after another operator, or right after '('. Rewrite as a
                // multiplication by a signed unit.
                if (symbol == '-' || symbol == '+') && is_unary_position(tokens, i) {
                    output.push(PostfixItem::Number(if symbol == '-' { -1.0 } else { 1.0 }));
                    stack.push(StackEntry::Op {
                        symbol: '*',
                        pos: token.pos,
                    });
                    continue;
                }

                let op = table
                    .get(symbol)
                    .ok_or(EvalError::UnknownOperator {
                        symbol,
                        pos: token.pos,
                    })?;

                while let Some(&StackEntry::Op { symbol: top, pos }) = stack.last() {
                    let Some(top_op) = table.get(top) else { break };
                    // Left-assoc pops equal precedence, right-assoc does not;
                    // that is what makes 2^3^2 group as 2^(3^2).
                    let pops = match op.assoc {
                        Assoc::Left => op.precedence <= top_op.precedence,
                        Assoc::Right => op.precedence < top_op.precedence,
                    };
                    if !pops {
                        break;
                    }
                    stack.pop();
                    output.push(PostfixItem::Op { symbol: top, pos });
                }

                stack.push(StackEntry::Op {
                    symbol,
                    pos: token.pos,
                });
            }
        }
    }

    while let Some(entry) = stack.pop() {
        match entry {
            StackEntry::Op { symbol, pos } => output.push(PostfixItem::Op { symbol, pos }),
            StackEntry::OpenParen { pos } => return Err(EvalError::UnbalancedParen { pos }),
        }
    }

    trace!(?output, "postfix");
    Ok(output)
}

fn is_unary_position(tokens: &[Token], i: usize) -> bool {
    if i == 0 {
        return true;
    }
    matches!(
        tokens[i - 1].kind,
        TokenKind::Symbol(_) | TokenKind::OpenParen
    )
}
