//! Lexer for infix arithmetic expressions.
//!
//! Produces a flat token stream: decimal number literals, registered
//! single-character operator symbols, and parentheses. Whitespace is skipped
//! in place so token offsets always point into the original input.
//! Anything else is an error, not a silently dropped character.

use crate::errors::EvalError;
use crate::operators::OperatorTable;

/// Lexical category of a token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenKind {
    /// Decimal literal: a run of digits, optionally followed by a decimal
    /// point and more digits (`42`, `3.14`, `1.`).
    Number(f64),
    /// A symbol present in the operator table.
    Symbol(char),
    OpenParen,
    CloseParen,
}

/// A token plus the byte offset where it starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub pos: usize,
}

/// Tokenize `text` against the registered operator symbols.
///
/// Empty (or all-whitespace) input yields an empty sequence; the parser is
/// the one that rejects it.
pub fn tokenize(text: &str, table: &OperatorTable) -> Result<Vec<Token>, EvalError> {
    let mut tokens = Vec::new();
    let mut chars = text.char_indices().peekable();

    while let Some(&(pos, ch)) = chars.peek() {
        if ch.is_whitespace() {
            chars.next();
        } else if ch.is_ascii_digit() {
            let mut end = pos;
            while let Some(&(i, c)) = chars.peek() {
                if c.is_ascii_digit() {
                    end = i + c.len_utf8();
                    chars.next();
                } else {
                    break;
                }
            }
            // Optional fractional part; a bare trailing '.' is allowed and
            // reads as ".0".
            if let Some(&(i, '.')) = chars.peek() {
                end = i + 1;
                chars.next();
                while let Some(&(i, c)) = chars.peek() {
                    if c.is_ascii_digit() {
                        end = i + c.len_utf8();
                        chars.next();
                    } else {
                        break;
                    }
                }
            }
            let literal = &text[pos..end];
            let value: f64 = literal
                .parse()
                .unwrap_or_else(|_| unreachable!("lexer produced invalid literal {literal:?}"));
            tokens.push(Token {
                kind: TokenKind::Number(value),
                pos,
            });
        } else if ch == '(' {
            chars.next();
            tokens.push(Token {
                kind: TokenKind::OpenParen,
                pos,
            });
        } else if ch == ')' {
            chars.next();
            tokens.push(Token {
                kind: TokenKind::CloseParen,
                pos,
            });
        } else if table.contains(ch) {
            chars.next();
            tokens.push(Token {
                kind: TokenKind::Symbol(ch),
                pos,
            });
        } else {
            return Err(EvalError::UnexpectedChar { ch, pos });
        }
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn kinds(text: &str) -> Vec<TokenKind> {
        let table = OperatorTable::with_defaults();
        tokenize(text, &table)
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn numbers_and_operators() {
        assert_eq!(
            kinds("1+2*3"),
            vec![
                TokenKind::Number(1.0),
                TokenKind::Symbol('+'),
                TokenKind::Number(2.0),
                TokenKind::Symbol('*'),
                TokenKind::Number(3.0),
            ]
        );
    }

    #[test]
    fn decimals() {
        assert_eq!(kinds("3.14"), vec![TokenKind::Number(3.14)]);
        assert_eq!(kinds("1."), vec![TokenKind::Number(1.0)]);
        assert_eq!(kinds("0.5"), vec![TokenKind::Number(0.5)]);
    }

    #[test]
    fn whitespace_is_skipped_but_offsets_are_kept() {
        let table = OperatorTable::with_defaults();
        let tokens = tokenize(" 1 +  2 ", &table).unwrap();
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].pos, 1);
        assert_eq!(tokens[1].pos, 3);
        assert_eq!(tokens[2].pos, 6);
    }

    #[test]
    fn parens() {
        assert_eq!(
            kinds("(1)"),
            vec![
                TokenKind::OpenParen,
                TokenKind::Number(1.0),
                TokenKind::CloseParen,
            ]
        );
    }

    #[test]
    fn empty_input_is_an_empty_sequence() {
        assert_eq!(kinds(""), vec![]);
        assert_eq!(kinds("   "), vec![]);
    }

    #[test]
    fn unregistered_symbol_is_rejected() {
        let table = OperatorTable::with_defaults();
        assert_eq!(
            tokenize("7 % 3", &table),
            Err(EvalError::UnexpectedChar { ch: '%', pos: 2 })
        );
    }

    #[test]
    fn registered_symbol_is_accepted() {
        let mut table = OperatorTable::with_defaults();
        fn rem(a: f64, b: f64) -> Result<f64, crate::errors::EvalError> {
            Ok(a % b)
        }
        table.register('%', 2, crate::operators::Assoc::Left, rem);
        let tokens = tokenize("7%3", &table).unwrap();
        assert_eq!(tokens[1].kind, TokenKind::Symbol('%'));
    }
}
