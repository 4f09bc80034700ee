//! The rewrite driver: drives a `(statement, environment)` configuration
//! to its fixpoint one reduction at a time.

use crate::reducer::reduce_stmt;
use simple_types::ast::Stmt;
use simple_types::{Environment, Result};

/// A small-step abstract machine configuration.
///
/// The one place in the core where mutation across steps is the intended
/// model: [`step`](Machine::step) replaces the held pair with the result
/// of a single reduction. Not meant to be shared across threads; clone it
/// to snapshot a configuration.
#[derive(Debug, Clone)]
pub struct Machine {
    stmt: Stmt,
    env: Environment,
}

impl Machine {
    /// Create a machine over an initial configuration.
    pub fn new(stmt: Stmt, env: Environment) -> Self {
        Self { stmt, env }
    }

    /// The current statement.
    pub fn stmt(&self) -> &Stmt {
        &self.stmt
    }

    /// The current environment.
    pub fn environment(&self) -> &Environment {
        &self.env
    }

    /// Whether the configuration can still take a step.
    pub fn is_running(&self) -> bool {
        self.stmt.is_reducible()
    }

    /// Perform exactly one reduction step.
    ///
    /// Stepping an already-terminal configuration fails with a
    /// precondition violation; on any failure the configuration is left
    /// as it was.
    pub fn step(&mut self) -> Result<()> {
        let (stmt, env) = reduce_stmt(&self.stmt, &self.env)?;
        self.stmt = stmt;
        self.env = env;
        Ok(())
    }

    /// Drive the configuration to its fixpoint, discarding intermediate
    /// states, and return the final environment.
    pub fn run(&mut self) -> Result<&Environment> {
        self.run_with(|_, _| ())
    }

    /// Drive to the fixpoint, emitting every configuration to `observer`:
    /// each intermediate `(statement, environment)` pair before its step,
    /// then the terminal configuration once more. A machine that is
    /// already terminal takes zero steps and emits exactly one state.
    ///
    /// Never returns if the statement never reaches `do-nothing`; a
    /// caller wanting bounded execution must count steps itself and stop
    /// calling [`step`](Machine::step) between reductions.
    pub fn run_with<F>(&mut self, mut observer: F) -> Result<&Environment>
    where
        F: FnMut(&Stmt, &Environment),
    {
        while self.stmt.is_reducible() {
            observer(&self.stmt, &self.env);
            self.step()?;
        }
        observer(&self.stmt, &self.env);
        Ok(&self.env)
    }
}
