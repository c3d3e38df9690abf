//! The operator table: symbol → precedence, associativity, behavior.
//!
//! Both the parser and the postfix evaluator are driven by this table, so
//! registering a new symbol is all it takes to extend the language.

use hashbrown::HashMap;

use crate::errors::EvalError;

/// Grouping direction for operators of equal precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assoc {
    Left,
    Right,
}

/// Behavior of a binary operator.
pub type BinaryFn = fn(f64, f64) -> Result<f64, EvalError>;

/// Descriptor bound to an operator symbol.
#[derive(Debug, Clone, Copy)]
pub struct Operator {
    pub precedence: u8,
    pub assoc: Assoc,
    pub apply: BinaryFn,
}

/// Mapping from single-character symbols to operator descriptors.
///
/// Descriptors are only ever inserted or overwritten, never removed.
#[derive(Debug, Clone)]
pub struct OperatorTable {
    ops: HashMap<char, Operator>,
}

fn add(a: f64, b: f64) -> Result<f64, EvalError> {
    Ok(a + b)
}

fn sub(a: f64, b: f64) -> Result<f64, EvalError> {
    Ok(a - b)
}

fn mul(a: f64, b: f64) -> Result<f64, EvalError> {
    Ok(a * b)
}

fn div(a: f64, b: f64) -> Result<f64, EvalError> {
    if b == 0.0 {
        Err(EvalError::DivisionByZero)
    } else {
        Ok(a / b)
    }
}

fn pow(a: f64, b: f64) -> Result<f64, EvalError> {
    Ok(a.powf(b))
}

impl OperatorTable {
    /// Table with the default descriptors for `+ - * / ^`.
    pub fn with_defaults() -> Self {
        let mut table = Self::empty();
        table.register('+', 1, Assoc::Left, add);
        table.register('-', 1, Assoc::Left, sub);
        table.register('*', 2, Assoc::Left, mul);
        table.register('/', 2, Assoc::Left, div);
        table.register('^', 3, Assoc::Right, pow);
        table
    }

    /// Table with no operators at all.
    pub fn empty() -> Self {
        Self {
            ops: HashMap::new(),
        }
    }

    /// Insert or replace the descriptor for `symbol`.
    ///
    /// A later registration with the same symbol overwrites the earlier one.
    /// Precedence values are only compared, never validated.
    pub fn register(&mut self, symbol: char, precedence: u8, assoc: Assoc, apply: BinaryFn) {
        self.ops.insert(
            symbol,
            Operator {
                precedence,
                assoc,
                apply,
            },
        );
    }

    /// Look up the descriptor for `symbol`.
    pub fn get(&self, symbol: char) -> Option<&Operator> {
        self.ops.get(&symbol)
    }

    /// Whether `symbol` is a registered operator.
    pub fn contains(&self, symbol: char) -> bool {
        self.ops.contains_key(&symbol)
    }
}

impl Default for OperatorTable {
    fn default() -> Self {
        Self::with_defaults()
    }
}
