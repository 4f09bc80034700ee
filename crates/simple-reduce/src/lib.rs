//! Small-step operational semantics for SIMPLE.
//!
//! One-redex-at-a-time rewriting over the shared AST, plus the [`Machine`]
//! driver that repeatedly applies it until the statement reaches
//! `do-nothing`. Every intermediate configuration is a plain value and can
//! be inspected or rendered.

mod machine;
mod reducer;

pub use machine::Machine;
pub use reducer::{reduce_expr, reduce_stmt};
