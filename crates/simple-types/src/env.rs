//! Persistent variable environment shared by all execution strategies.

use crate::error::RuntimeError;
use crate::{Result, Value};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// An immutable mapping from variable names to literal values.
///
/// `extend` never mutates: it returns a fresh environment and leaves the
/// receiver untouched, so machine snapshots and compiled closures may
/// hold environments from different points in history simultaneously.
/// `BTreeMap` keeps iteration and rendering order deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Environment {
    bindings: BTreeMap<String, Value>,
}

impl Environment {
    /// Create an empty environment.
    pub fn new() -> Self {
        Self {
            bindings: BTreeMap::new(),
        }
    }

    /// Look up a variable.
    ///
    /// An unbound name fails with [`RuntimeError::UnboundVariable`] at
    /// the lookup site — never a placeholder value that masquerades as a
    /// result further downstream.
    pub fn lookup(&self, name: &str) -> Result<Value> {
        self.bindings
            .get(name)
            .copied()
            .ok_or_else(|| RuntimeError::UnboundVariable(name.to_string()))
    }

    /// Bind (or rebind) `name` to `value`, returning the extended
    /// environment. All other bindings carry over; the receiver is
    /// unaffected.
    pub fn extend(&self, name: impl Into<String>, value: Value) -> Environment {
        let mut bindings = self.bindings.clone();
        bindings.insert(name.into(), value);
        Environment { bindings }
    }

    /// Iterate bindings in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Value)> {
        self.bindings.iter().map(|(name, value)| (name.as_str(), *value))
    }

    /// Number of bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether no variable is bound.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl FromIterator<(String, Value)> for Environment {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Environment {
            bindings: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Environment {
    /// Renders as `{x = 3, y = true}`, names sorted.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (name, value)) in self.bindings.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{name} = {value}")?;
        }
        write!(f, "}}")
    }
}
