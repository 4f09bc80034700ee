//! Facade over the SIMPLE semantics workspace.
//!
//! Callers build an AST (or deserialize one), seed an [`Environment`],
//! and pick an execution strategy over the same tree:
//!
//! - drive a [`Machine`] to its fixpoint one inspectable rewrite at a time,
//! - evaluate directly with [`evaluate_stmt`] / [`evaluate_expr`],
//! - or [`compile_stmt`] / [`compile_expr`] once and apply the resulting
//!   closure to as many environments as needed.
//!
//! All three agree on every terminating program; the integration tests in
//! this crate hold them to that.

pub use simple_types::ast::{Expr, Stmt};
pub use simple_types::{Environment, Result, RuntimeError, Value};

pub use simple_denote::{compile_expr, compile_stmt, ExprClosure, StmtClosure};
pub use simple_eval::{evaluate_expr, evaluate_stmt};
pub use simple_reduce::{reduce_expr, reduce_stmt, Machine};
