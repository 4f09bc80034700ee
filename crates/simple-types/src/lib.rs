//! Shared types for the SIMPLE semantics workspace.
//!
//! This crate defines the AST node types, the literal [`Value`] type, the
//! persistent [`Environment`], and the runtime error taxonomy shared by
//! the small-step, big-step, and denotational execution strategies.

mod env;
mod error;
mod value;
pub mod ast;

pub use env::Environment;
pub use error::RuntimeError;
pub use value::Value;

/// Result type used throughout the SIMPLE semantics crates.
pub type Result<T> = std::result::Result<T, RuntimeError>;
