//! External representation tests.
//!
//! The AST construction interface is "hand the core a tree": an external
//! parser or harness can build nodes directly, or ship them (and an
//! initial environment) as JSON. These tests pin the serde form down so
//! external producers have a stable target.

use simple_semantics::{evaluate_stmt, Environment, Expr, Stmt, Value};

#[test]
fn expression_round_trips_through_json() {
    let expr = Expr::add(
        Expr::multiply(Expr::Number(1), Expr::Number(2)),
        Expr::variable("x"),
    );
    let json = serde_json::to_string(&expr).unwrap();
    let back: Expr = serde_json::from_str(&json).unwrap();
    assert_eq!(back, expr);
}

#[test]
fn statement_built_from_external_json() {
    // What an external front end would hand over for:
    //   while (x < 3) { x = x + 1 }
    let json = r#"
    {
      "While": [
        { "LessThan": [ { "Variable": "x" }, { "Number": 3 } ] },
        { "Assign": [ "x", { "Add": [ { "Variable": "x" }, { "Number": 1 } ] } ] }
      ]
    }
    "#;
    let stmt: Stmt = serde_json::from_str(json).unwrap();
    assert_eq!(
        stmt,
        Stmt::while_loop(
            Expr::less_than(Expr::variable("x"), Expr::Number(3)),
            Stmt::assign("x", Expr::add(Expr::variable("x"), Expr::Number(1))),
        )
    );

    let env: Environment = serde_json::from_str(r#"{"bindings": {"x": {"Number": 0}}}"#).unwrap();
    let result = evaluate_stmt(&stmt, &env).unwrap();
    assert_eq!(result.lookup("x"), Ok(Value::Number(3)));
}

#[test]
fn environment_round_trips_through_json() {
    let env = Environment::new()
        .extend("x", Value::Number(3))
        .extend("flag", Value::Boolean(true));
    let json = serde_json::to_string(&env).unwrap();
    let back: Environment = serde_json::from_str(&json).unwrap();
    assert_eq!(back, env);
}
