//! Compositional translation from AST nodes to host closures.
//!
//! Compiling a composite node compiles its children once, up front, and
//! captures the resulting closures; applying the parent just applies
//! them. Compilation itself is total — unbound variables and type
//! mismatches only surface when a closure is applied to an environment.

use simple_types::ast::{Expr, Stmt};
use simple_types::{Environment, Result, Value};

/// A compiled expression: `Environment → Value`.
pub type ExprClosure = Box<dyn Fn(&Environment) -> Result<Value>>;

/// A compiled statement: `Environment → Environment`.
pub type StmtClosure = Box<dyn Fn(&Environment) -> Result<Environment>>;

/// Compile an expression into a reusable closure.
pub fn compile_expr(expr: &Expr) -> ExprClosure {
    match expr {
        Expr::Number(n) => {
            let n = *n;
            Box::new(move |_| Ok(Value::Number(n)))
        }
        Expr::Boolean(b) => {
            let b = *b;
            Box::new(move |_| Ok(Value::Boolean(b)))
        }
        Expr::Variable(name) => {
            let name = name.clone();
            Box::new(move |env| env.lookup(&name))
        }
        Expr::Add(left, right) => {
            let (left, right) = (compile_expr(left), compile_expr(right));
            Box::new(move |env| {
                Ok(Value::Number(
                    left(env)?.as_number()? + right(env)?.as_number()?,
                ))
            })
        }
        Expr::Multiply(left, right) => {
            let (left, right) = (compile_expr(left), compile_expr(right));
            Box::new(move |env| {
                Ok(Value::Number(
                    left(env)?.as_number()? * right(env)?.as_number()?,
                ))
            })
        }
        Expr::LessThan(left, right) => {
            let (left, right) = (compile_expr(left), compile_expr(right));
            Box::new(move |env| {
                Ok(Value::Boolean(
                    left(env)?.as_number()? < right(env)?.as_number()?,
                ))
            })
        }
    }
}

/// Compile a statement into a reusable closure.
pub fn compile_stmt(stmt: &Stmt) -> StmtClosure {
    match stmt {
        Stmt::DoNothing => Box::new(|env| Ok(env.clone())),
        Stmt::Assign(name, expr) => {
            let name = name.clone();
            let expr = compile_expr(expr);
            Box::new(move |env| Ok(env.extend(name.clone(), expr(env)?)))
        }
        Stmt::If(condition, consequence, alternative) => {
            let condition = compile_expr(condition);
            let (consequence, alternative) = (compile_stmt(consequence), compile_stmt(alternative));
            Box::new(move |env| {
                if condition(env)?.as_boolean()? {
                    consequence(env)
                } else {
                    alternative(env)
                }
            })
        }
        Stmt::Sequence(first, second) => {
            let (first, second) = (compile_stmt(first), compile_stmt(second));
            Box::new(move |env| second(&first(env)?))
        }
        Stmt::While(condition, body) => {
            let condition = compile_expr(condition);
            let body = compile_stmt(body);
            // The compiled loop iterates in the host instead of recursing,
            // so a long-running source loop cannot grow the call stack.
            Box::new(move |env| {
                let mut env = env.clone();
                while condition(&env)?.as_boolean()? {
                    env = body(&env)?;
                }
                Ok(env)
            })
        }
    }
}
