//! AST node types for the SIMPLE language.
//!
//! Nodes are immutable once constructed: a reduction step builds new
//! nodes rather than editing existing ones. Recursive positions are boxed
//! to keep enum sizes reasonable. Equality is structural throughout, so
//! two separately built `Number(3)` nodes compare equal.

use crate::Value;
use serde::{Deserialize, Serialize};
use std::fmt;

// ══════════════════════════════════════════════════════════════════════════════
// Expressions
// ══════════════════════════════════════════════════════════════════════════════

/// A SIMPLE expression.
///
/// `Number` and `Boolean` are the terminal forms; every other variant is
/// a redex. There is no static type discipline — mixing numbers and
/// booleans under an operator surfaces as a runtime type mismatch, not a
/// construction error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Expr {
    /// Integer literal: `3`
    Number(i64),
    /// Boolean literal: `true` / `false`
    Boolean(bool),
    /// `left + right`
    Add(Box<Expr>, Box<Expr>),
    /// `left * right`
    Multiply(Box<Expr>, Box<Expr>),
    /// `left < right`
    LessThan(Box<Expr>, Box<Expr>),
    /// Variable reference: `x`
    Variable(String),
}

impl Expr {
    /// Build an `Add` node without explicit boxing.
    pub fn add(left: Expr, right: Expr) -> Expr {
        Expr::Add(Box::new(left), Box::new(right))
    }

    /// Build a `Multiply` node without explicit boxing.
    pub fn multiply(left: Expr, right: Expr) -> Expr {
        Expr::Multiply(Box::new(left), Box::new(right))
    }

    /// Build a `LessThan` node without explicit boxing.
    pub fn less_than(left: Expr, right: Expr) -> Expr {
        Expr::LessThan(Box::new(left), Box::new(right))
    }

    /// Build a `Variable` node from anything string-like.
    pub fn variable(name: impl Into<String>) -> Expr {
        Expr::Variable(name.into())
    }

    /// Whether this node is a redex position.
    ///
    /// Static per variant: literals are terminal, everything else takes a
    /// reduction step. Contents are never consulted.
    pub fn is_reducible(&self) -> bool {
        !matches!(self, Expr::Number(_) | Expr::Boolean(_))
    }

    /// The literal value of a terminal expression.
    ///
    /// `None` exactly when [`is_reducible`](Expr::is_reducible) is true.
    pub fn as_value(&self) -> Option<Value> {
        match self {
            Expr::Number(n) => Some(Value::Number(*n)),
            Expr::Boolean(b) => Some(Value::Boolean(*b)),
            _ => None,
        }
    }
}

impl From<Value> for Expr {
    fn from(value: Value) -> Expr {
        match value {
            Value::Number(n) => Expr::Number(n),
            Value::Boolean(b) => Expr::Boolean(b),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Number(n) => write!(f, "{n}"),
            Expr::Boolean(b) => write!(f, "{b}"),
            Expr::Add(left, right) => write!(f, "{left} + {right}"),
            Expr::Multiply(left, right) => write!(f, "{left} * {right}"),
            Expr::LessThan(left, right) => write!(f, "{left} < {right}"),
            Expr::Variable(name) => write!(f, "{name}"),
        }
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Statements
// ══════════════════════════════════════════════════════════════════════════════

/// A SIMPLE statement.
///
/// `DoNothing` is the only terminal form; a statement has finished
/// executing exactly when it has rewritten to `DoNothing`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stmt {
    /// `do-nothing`
    DoNothing,
    /// `name = expr`
    Assign(String, Expr),
    /// `if (condition) { consequence } else { alternative }`
    If(Expr, Box<Stmt>, Box<Stmt>),
    /// `first; second`
    Sequence(Box<Stmt>, Box<Stmt>),
    /// `while (condition) { body }`
    While(Expr, Box<Stmt>),
}

impl Stmt {
    /// Build an `Assign` node.
    pub fn assign(name: impl Into<String>, expr: Expr) -> Stmt {
        Stmt::Assign(name.into(), expr)
    }

    /// Build an `If` node without explicit boxing.
    pub fn if_else(condition: Expr, consequence: Stmt, alternative: Stmt) -> Stmt {
        Stmt::If(condition, Box::new(consequence), Box::new(alternative))
    }

    /// Build a `Sequence` node without explicit boxing.
    pub fn sequence(first: Stmt, second: Stmt) -> Stmt {
        Stmt::Sequence(Box::new(first), Box::new(second))
    }

    /// Build a `While` node without explicit boxing.
    pub fn while_loop(condition: Expr, body: Stmt) -> Stmt {
        Stmt::While(condition, Box::new(body))
    }

    /// Whether this node is a redex position. Static per variant.
    pub fn is_reducible(&self) -> bool {
        !matches!(self, Stmt::DoNothing)
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stmt::DoNothing => write!(f, "do-nothing"),
            Stmt::Assign(name, expr) => write!(f, "{name} = {expr}"),
            Stmt::If(condition, consequence, alternative) => {
                write!(f, "if ({condition}) {{ {consequence} }} else {{ {alternative} }}")
            }
            Stmt::Sequence(first, second) => write!(f, "{first}; {second}"),
            Stmt::While(condition, body) => write!(f, "while ({condition}) {{ {body} }}"),
        }
    }
}
