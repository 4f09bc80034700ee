//! One-redex-at-a-time rewriting rules.
//!
//! Each call performs exactly one rewrite, always at the leftmost
//! reducible subterm, and builds a fresh node around the result. The
//! fixed strategy makes reduction a partial function rather than a
//! relation: no choice points, same input always same output.

use simple_types::ast::{Expr, Stmt};
use simple_types::{Environment, Result, RuntimeError};

/// Perform one reduction step on an expression.
///
/// Expressions never change the environment; only statements do. Asking
/// for a step on a terminal form (`Number`, `Boolean`) is a caller bug
/// and fails with [`RuntimeError::PreconditionViolation`].
pub fn reduce_expr(expr: &Expr, env: &Environment) -> Result<Expr> {
    match expr {
        Expr::Add(left, right) => {
            if left.is_reducible() {
                Ok(Expr::Add(Box::new(reduce_expr(left, env)?), right.clone()))
            } else if right.is_reducible() {
                Ok(Expr::Add(left.clone(), Box::new(reduce_expr(right, env)?)))
            } else {
                match (left.as_ref(), right.as_ref()) {
                    (Expr::Number(a), Expr::Number(b)) => Ok(Expr::Number(a + b)),
                    _ => Err(RuntimeError::TypeMismatch(format!(
                        "cannot add {left} and {right}"
                    ))),
                }
            }
        }
        Expr::Multiply(left, right) => {
            if left.is_reducible() {
                Ok(Expr::Multiply(Box::new(reduce_expr(left, env)?), right.clone()))
            } else if right.is_reducible() {
                Ok(Expr::Multiply(left.clone(), Box::new(reduce_expr(right, env)?)))
            } else {
                match (left.as_ref(), right.as_ref()) {
                    (Expr::Number(a), Expr::Number(b)) => Ok(Expr::Number(a * b)),
                    _ => Err(RuntimeError::TypeMismatch(format!(
                        "cannot multiply {left} and {right}"
                    ))),
                }
            }
        }
        Expr::LessThan(left, right) => {
            if left.is_reducible() {
                Ok(Expr::LessThan(Box::new(reduce_expr(left, env)?), right.clone()))
            } else if right.is_reducible() {
                Ok(Expr::LessThan(left.clone(), Box::new(reduce_expr(right, env)?)))
            } else {
                match (left.as_ref(), right.as_ref()) {
                    (Expr::Number(a), Expr::Number(b)) => Ok(Expr::Boolean(a < b)),
                    _ => Err(RuntimeError::TypeMismatch(format!(
                        "cannot compare {left} and {right}"
                    ))),
                }
            }
        }
        // A variable reduces in one step to its bound value.
        Expr::Variable(name) => Ok(env.lookup(name)?.into()),
        Expr::Number(_) | Expr::Boolean(_) => Err(RuntimeError::PreconditionViolation(format!(
            "cannot reduce terminal expression {expr}"
        ))),
    }
}

/// Perform one reduction step on a statement, yielding the rewritten
/// statement and the (possibly extended) environment.
pub fn reduce_stmt(stmt: &Stmt, env: &Environment) -> Result<(Stmt, Environment)> {
    match stmt {
        Stmt::Assign(name, expr) => match expr.as_value() {
            // Expression still reducible: step it, environment untouched.
            None => Ok((
                Stmt::Assign(name.clone(), reduce_expr(expr, env)?),
                env.clone(),
            )),
            // Expression is a literal: commit the binding.
            Some(value) => Ok((Stmt::DoNothing, env.extend(name.clone(), value))),
        },
        Stmt::If(condition, consequence, alternative) => {
            if condition.is_reducible() {
                Ok((
                    Stmt::If(
                        reduce_expr(condition, env)?,
                        consequence.clone(),
                        alternative.clone(),
                    ),
                    env.clone(),
                ))
            } else {
                match condition {
                    Expr::Boolean(true) => Ok(((**consequence).clone(), env.clone())),
                    Expr::Boolean(false) => Ok(((**alternative).clone(), env.clone())),
                    _ => Err(RuntimeError::TypeMismatch(format!(
                        "if condition must be a boolean, got {condition}"
                    ))),
                }
            }
        }
        Stmt::Sequence(first, second) => match first.as_ref() {
            Stmt::DoNothing => Ok(((**second).clone(), env.clone())),
            _ => {
                let (reduced, env) = reduce_stmt(first, env)?;
                Ok((Stmt::Sequence(Box::new(reduced), second.clone()), env))
            }
        },
        // One unrolling per step. Looping is driven entirely by the
        // caller re-reducing the resulting `If`, never by recursion here.
        Stmt::While(condition, body) => Ok((
            Stmt::If(
                condition.clone(),
                Box::new(Stmt::Sequence(body.clone(), Box::new(stmt.clone()))),
                Box::new(Stmt::DoNothing),
            ),
            env.clone(),
        )),
        Stmt::DoNothing => Err(RuntimeError::PreconditionViolation(
            "cannot reduce do-nothing".to_string(),
        )),
    }
}
