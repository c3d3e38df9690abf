//! Tally - an extensible arithmetic expression evaluator
//!
//! # Overview
//!
//! Tally evaluates infix arithmetic supplied as text: the five default
//! operators `+ - * / ^`, parenthesized grouping, unary sign prefixes, and
//! decimal literals. The operator table is open: registering a new
//! single-character operator extends the language at runtime.
//!
//! # Quick Start
//!
//! ```
//! use tally::{Assoc, Calculator};
//!
//! let mut calc = Calculator::new();
//! assert_eq!(calc.evaluate("1 + (2 + 3) * 4 - 12").unwrap(), 9.0);
//!
//! // Extend with a remainder operator
//! calc.add_operator('%', 2, Assoc::Left, |a, b| Ok(a % b));
//! assert_eq!(calc.evaluate("7 % 3").unwrap(), 1.0);
//! ```
//!
//! # Errors
//!
//! Nothing in the pipeline panics on bad input: lexing, parsing, and
//! evaluation all return [`EvalError`], and [`render_error`] pretty-prints
//! one against the offending source.

// Re-export public API from tally_core
pub use tally_core::api::Calculator;
pub use tally_core::errors::EvalError;
pub use tally_core::operators::{Assoc, BinaryFn, Operator, OperatorTable};

mod error_renderer;
pub use error_renderer::{render_error, render_error_to, render_error_to_string};
