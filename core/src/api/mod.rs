//! Public API surface.

mod engine;

pub use engine::Calculator;
