//! Runtime error taxonomy shared by every execution strategy.

use thiserror::Error;

/// An unrecoverable semantic failure.
///
/// Every variant aborts the current reduction/evaluation and surfaces to
/// the caller — no coercion, no default substitution. Non-termination of
/// a source program is not an error; a loop whose condition never becomes
/// false simply never finishes, and bounding it is the caller's job.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// A variable was looked up with no binding in scope.
    #[error("unbound variable: {0}")]
    UnboundVariable(String),

    /// A rule was applied to operand values of the wrong kind, e.g. `+`
    /// over two booleans. The calculus is untyped, so this only surfaces
    /// at run time.
    #[error("type mismatch: {0}")]
    TypeMismatch(String),

    /// A caller-side contract was broken, e.g. asking for a reduction
    /// step on a node that is already a terminal form.
    #[error("precondition violated: {0}")]
    PreconditionViolation(String),
}
