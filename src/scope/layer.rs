//! Scope implementation: a key map plus its value index.

use crate::index::ValueIndex;
use std::collections::HashMap;

/// Key/value bindings for one scope, with the value index kept in step.
///
/// Cloning a scope yields a fully independent copy; nothing is shared with
/// the original.
#[derive(Clone, Debug, Default)]
pub struct Scope {
    /// Key to value.
    keys: HashMap<String, String>,

    /// Value to number of keys holding it.
    values: ValueIndex,
}

impl Scope {
    /// Create an empty scope.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `key` to `value`, replacing any previous binding.
    pub fn set(&mut self, key: &str, value: &str) {
        if let Some(old) = self.keys.get(key) {
            if old == value {
                return;
            }
            self.values.decrement(old);
        }
        self.values.increment(value);
        self.keys.insert(key.to_string(), value.to_string());
    }

    /// Value bound to `key`, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.keys.get(key).map(String::as_str)
    }

    /// Remove the binding for `key`. Unbound keys are ignored.
    ///
    /// Returns the removed value.
    pub fn unset(&mut self, key: &str) -> Option<String> {
        let old = self.keys.remove(key)?;
        self.values.decrement(&old);
        Some(old)
    }

    /// Number of keys bound to `value`.
    pub fn count_equal_to(&self, value: &str) -> usize {
        self.values.count_of(value)
    }

    /// Number of bound keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Number of distinct bound values.
    pub fn distinct_values(&self) -> usize {
        self.values.distinct()
    }

    /// Check that the value index matches the key map exactly.
    pub fn index_consistent(&self) -> bool {
        if self.values.total() != self.keys.len() {
            return false;
        }
        let mut expected: HashMap<&str, usize> = HashMap::new();
        for value in self.keys.values() {
            *expected.entry(value.as_str()).or_default() += 1;
        }
        expected.len() == self.values.distinct()
            && expected
                .iter()
                .all(|(value, &count)| self.values.count_of(value) == count)
    }
}
