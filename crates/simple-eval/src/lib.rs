//! Big-step evaluation for SIMPLE.
//!
//! Computes the same result as driving the small-step reducer to its
//! fixpoint, but directly and recursively, without materializing any
//! intermediate AST states. Used as the golden reference the other two
//! strategies are checked against.

mod evaluator;

pub use evaluator::{evaluate_expr, evaluate_stmt};
