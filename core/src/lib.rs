pub mod api;
pub mod errors;
pub mod evaluator;
pub mod lexer;
pub mod operators;
pub mod parser;

pub use api::Calculator;
pub use errors::EvalError;
pub use operators::{Assoc, BinaryFn, Operator, OperatorTable};
