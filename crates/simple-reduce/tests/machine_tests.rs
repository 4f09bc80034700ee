//! Integration tests for the rewrite driver.
//!
//! Covers:
//! - step counting on the concrete scenarios
//! - the observation hook: every intermediate state plus the terminal one
//! - terminal stability (zero steps on an already-finished statement)
//! - error propagation out of `step` and `run`

use simple_reduce::Machine;
use simple_types::ast::{Expr, Stmt};
use simple_types::{Environment, RuntimeError, Value};

fn env_of(bindings: &[(&str, Value)]) -> Environment {
    bindings
        .iter()
        .map(|(name, value)| (name.to_string(), *value))
        .collect()
}

#[test]
fn assignment_terminates_in_two_steps() {
    // x = 1 + 1 from {}: one step to x = 2, one step to do-nothing.
    let mut machine = Machine::new(
        Stmt::assign("x", Expr::add(Expr::Number(1), Expr::Number(1))),
        Environment::new(),
    );

    machine.step().unwrap();
    assert_eq!(machine.stmt(), &Stmt::assign("x", Expr::Number(2)));
    assert!(machine.environment().is_empty());

    machine.step().unwrap();
    assert_eq!(machine.stmt(), &Stmt::DoNothing);
    assert_eq!(machine.environment(), &env_of(&[("x", Value::Number(2))]));
    assert!(!machine.is_running());
}

#[test]
fn if_scenario_reaches_the_expected_environment() {
    let mut machine = Machine::new(
        Stmt::if_else(
            Expr::Boolean(true),
            Stmt::assign("x", Expr::Number(1)),
            Stmt::assign("x", Expr::Number(2)),
        ),
        Environment::new(),
    );
    let final_env = machine.run().unwrap();
    assert_eq!(final_env, &env_of(&[("x", Value::Number(1))]));
}

#[test]
fn while_scenario_counts_to_three() {
    // while (x < 3) { x = x + 1 } from {x: 0} ends at {x: 3}.
    let mut machine = Machine::new(
        Stmt::while_loop(
            Expr::less_than(Expr::variable("x"), Expr::Number(3)),
            Stmt::assign("x", Expr::add(Expr::variable("x"), Expr::Number(1))),
        ),
        env_of(&[("x", Value::Number(0))]),
    );
    let final_env = machine.run().unwrap();
    assert_eq!(final_env, &env_of(&[("x", Value::Number(3))]));
}

#[test]
fn observer_sees_every_state_and_the_terminal_one() {
    let mut machine = Machine::new(
        Stmt::assign("x", Expr::add(Expr::Number(1), Expr::Number(1))),
        Environment::new(),
    );
    let mut trace = Vec::new();
    machine
        .run_with(|stmt, env| trace.push(format!("{stmt}, {env}")))
        .unwrap();
    assert_eq!(
        trace,
        vec![
            "x = 1 + 1, {}".to_string(),
            "x = 2, {}".to_string(),
            "do-nothing, {x = 2}".to_string(),
        ]
    );
}

#[test]
fn terminal_machine_runs_zero_steps() {
    let env = env_of(&[("x", Value::Number(1))]);
    let mut machine = Machine::new(Stmt::DoNothing, env.clone());
    let mut trace = Vec::new();
    machine
        .run_with(|stmt, env| trace.push((stmt.clone(), env.clone())))
        .unwrap();
    // A single emitted state, equal to the input configuration.
    assert_eq!(trace, vec![(Stmt::DoNothing, env)]);
}

#[test]
fn step_on_terminal_machine_is_a_precondition_violation() {
    let mut machine = Machine::new(Stmt::DoNothing, Environment::new());
    assert!(matches!(
        machine.step(),
        Err(RuntimeError::PreconditionViolation(_))
    ));
    // The configuration is unchanged after the failed step.
    assert_eq!(machine.stmt(), &Stmt::DoNothing);
}

#[test]
fn run_propagates_unbound_variable() {
    let mut machine = Machine::new(
        Stmt::assign("x", Expr::variable("y")),
        Environment::new(),
    );
    assert_eq!(
        machine.run(),
        Err(RuntimeError::UnboundVariable("y".to_string()))
    );
}

#[test]
fn run_stops_at_the_failing_state() {
    // x = 1; y = oops — the first assignment commits, then the machine
    // stops with the error instead of running on with a partial result.
    let mut machine = Machine::new(
        Stmt::sequence(
            Stmt::assign("x", Expr::Number(1)),
            Stmt::assign("y", Expr::variable("oops")),
        ),
        Environment::new(),
    );
    let result = machine.run();
    assert_eq!(result, Err(RuntimeError::UnboundVariable("oops".to_string())));
    assert_eq!(machine.environment(), &env_of(&[("x", Value::Number(1))]));
}

#[test]
fn bounded_execution_is_the_callers_job() {
    // while (true) { do-nothing } never reaches do-nothing; a caller
    // imposes a step budget between steps.
    let mut machine = Machine::new(
        Stmt::while_loop(Expr::Boolean(true), Stmt::DoNothing),
        Environment::new(),
    );
    for _ in 0..100 {
        assert!(machine.is_running());
        machine.step().unwrap();
    }
    assert!(machine.is_running());
}
