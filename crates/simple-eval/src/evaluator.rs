//! Structural recursion over AST nodes, straight to final results.

use simple_types::ast::{Expr, Stmt};
use simple_types::{Environment, Result, Value};

/// Evaluate an expression to its final value under `env`.
pub fn evaluate_expr(expr: &Expr, env: &Environment) -> Result<Value> {
    match expr {
        Expr::Number(n) => Ok(Value::Number(*n)),
        Expr::Boolean(b) => Ok(Value::Boolean(*b)),
        Expr::Variable(name) => env.lookup(name),
        Expr::Add(left, right) => {
            let left = evaluate_expr(left, env)?.as_number()?;
            let right = evaluate_expr(right, env)?.as_number()?;
            Ok(Value::Number(left + right))
        }
        Expr::Multiply(left, right) => {
            let left = evaluate_expr(left, env)?.as_number()?;
            let right = evaluate_expr(right, env)?.as_number()?;
            Ok(Value::Number(left * right))
        }
        Expr::LessThan(left, right) => {
            let left = evaluate_expr(left, env)?.as_number()?;
            let right = evaluate_expr(right, env)?.as_number()?;
            Ok(Value::Boolean(left < right))
        }
    }
}

/// Evaluate a statement to the final environment it produces.
pub fn evaluate_stmt(stmt: &Stmt, env: &Environment) -> Result<Environment> {
    match stmt {
        Stmt::DoNothing => Ok(env.clone()),
        Stmt::Assign(name, expr) => {
            let value = evaluate_expr(expr, env)?;
            Ok(env.extend(name.clone(), value))
        }
        Stmt::If(condition, consequence, alternative) => {
            if evaluate_expr(condition, env)?.as_boolean()? {
                evaluate_stmt(consequence, env)
            } else {
                evaluate_stmt(alternative, env)
            }
        }
        Stmt::Sequence(first, second) => {
            let intermediate = evaluate_stmt(first, env)?;
            evaluate_stmt(second, &intermediate)
        }
        Stmt::While(condition, body) => {
            // Threads the environment through one body evaluation per
            // condition test; never terminates if the condition never
            // becomes false.
            let mut env = env.clone();
            while evaluate_expr(condition, &env)?.as_boolean()? {
                env = evaluate_stmt(body, &env)?;
            }
            Ok(env)
        }
    }
}
