//! Literal values: the subset of expressions that evaluation produces.

use crate::error::RuntimeError;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A fully reduced value.
///
/// Exactly the literal forms an [`Environment`](crate::Environment) may
/// store: making this its own type (rather than reusing literal `Expr`
/// nodes) means a composite expression can never leak into a binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Value {
    Number(i64),
    Boolean(bool),
}

impl Value {
    /// Extract the number, or fail with a type mismatch.
    pub fn as_number(&self) -> Result<i64> {
        match self {
            Value::Number(n) => Ok(*n),
            Value::Boolean(_) => Err(RuntimeError::TypeMismatch(format!(
                "expected a number, got {self}"
            ))),
        }
    }

    /// Extract the boolean, or fail with a type mismatch.
    pub fn as_boolean(&self) -> Result<bool> {
        match self {
            Value::Boolean(b) => Ok(*b),
            Value::Number(_) => Err(RuntimeError::TypeMismatch(format!(
                "expected a boolean, got {self}"
            ))),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Boolean(b) => write!(f, "{b}"),
        }
    }
}
