//! Value reference counts.

use std::collections::HashMap;

/// Count of keys per value within one scope.
///
/// Values whose count drops to zero are pruned, so `count_of` is the only
/// meaningful observation.
#[derive(Clone, Debug, Default)]
pub struct ValueIndex {
    counts: HashMap<String, usize>,
}

impl ValueIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one more key holding `value`.
    pub fn increment(&mut self, value: &str) {
        match self.counts.get_mut(value) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(value.to_string(), 1);
            }
        }
    }

    /// Record one fewer key holding `value`.
    ///
    /// Decrementing a value that was never recorded is a no-op.
    pub fn decrement(&mut self, value: &str) {
        if let Some(count) = self.counts.get_mut(value) {
            *count -= 1;
            if *count == 0 {
                self.counts.remove(value);
            }
        }
    }

    /// Number of keys currently holding `value`.
    pub fn count_of(&self, value: &str) -> usize {
        self.counts.get(value).copied().unwrap_or(0)
    }

    /// Number of distinct values held by at least one key.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unseen_value_is_zero() {
        let index = ValueIndex::new();
        assert_eq!(index.count_of("10"), 0);
        assert_eq!(index.count_of(""), 0);
    }

    #[test]
    fn test_increment_decrement() {
        let mut index = ValueIndex::new();
        index.increment("10");
        index.increment("10");
        index.increment("20");
        assert_eq!(index.count_of("10"), 2);
        assert_eq!(index.count_of("20"), 1);
        assert_eq!(index.total(), 3);

        index.decrement("10");
        assert_eq!(index.count_of("10"), 1);

        index.decrement("10");
        assert_eq!(index.count_of("10"), 0);
        assert_eq!(index.distinct(), 1);
    }

    #[test]
    fn test_decrement_absent_is_noop() {
        let mut index = ValueIndex::new();
        index.decrement("missing");
        assert_eq!(index.count_of("missing"), 0);

        index.increment("a");
        index.decrement("a");
        index.decrement("a");
        assert_eq!(index.count_of("a"), 0);
        assert_eq!(index.total(), 0);
    }
}
