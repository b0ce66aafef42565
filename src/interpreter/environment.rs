use std::collections::HashMap;

use crate::interpreter::value::Value;

/// The variable store of one program run.
///
/// There is a single flat scope: blocks, branches and loop bodies read and
/// write the same bindings as the top level, so a variable assigned inside a
/// loop is still visible after it.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Environment {
    variables: HashMap<String, Value>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Retrieves a variable, or `None` if it was never assigned.
    ///
    /// # Example
    /// ```
    /// use proofscript::interpreter::{environment::Environment, value::Value};
    ///
    /// let mut env = Environment::new();
    /// env.assign("x", Value::Integer(5));
    ///
    /// assert_eq!(env.get("x"), Some(&Value::Integer(5)));
    /// assert_eq!(env.get("y"), None);
    /// ```
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    /// Binds `name` to `value`, overwriting any previous binding.
    pub fn assign(&mut self, name: &str, value: Value) {
        if let Some(slot) = self.variables.get_mut(name) {
            *slot = value;
        } else {
            self.variables.insert(name.to_string(), value);
        }
    }

    /// Returns `true` if `name` is bound.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Number of distinct bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Returns `true` if nothing has been assigned yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}
