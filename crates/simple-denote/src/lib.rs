//! Denotational semantics for SIMPLE.
//!
//! Translates an AST into first-class Rust closures over environments:
//! built once, reusable across arbitrarily many environments, never
//! re-walking the tree.

mod compiler;

pub use compiler::{compile_expr, compile_stmt, ExprClosure, StmtClosure};
