//! Main Store struct layering transactions over a base scope.

use crate::command::Command;
use crate::error::{Result, StoreError};
use crate::scope::Scope;
use crate::types::{Reply, StoreStats};
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// The transactional key-value store.
///
/// Holds a base scope and a stack of open transactions. Every read and write
/// goes to the active scope: the innermost open transaction, or the base
/// scope when none is open.
///
/// # Commit flattens every level
///
/// [`Store::commit`] does not close only the innermost transaction. It makes
/// the innermost scope the new base and discards the whole stack, so a single
/// `COMMIT` commits every open transaction at once:
///
/// ```
/// use scopekv::Store;
///
/// let mut store = Store::new();
/// store.begin();
/// store.set("a", "1");
/// store.begin();
/// store.set("b", "2");
/// store.commit().unwrap();
///
/// assert_eq!(store.depth(), 0);
/// assert_eq!(store.get("a"), Some("1"));
/// assert_eq!(store.get("b"), Some("2"));
/// assert!(store.rollback().is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Store {
    /// Committed state.
    base: Scope,

    /// Open transactions, outermost first.
    transactions: Vec<Scope>,
}

impl Store {
    /// Create an empty store with no open transaction.
    pub fn new() -> Self {
        Self::default()
    }

    fn active(&self) -> &Scope {
        self.transactions.last().unwrap_or(&self.base)
    }

    fn active_mut(&mut self) -> &mut Scope {
        match self.transactions.last_mut() {
            Some(scope) => scope,
            None => &mut self.base,
        }
    }

    // --- Data Operations ---

    /// Bind `key` to `value` in the active scope.
    pub fn set(&mut self, key: &str, value: &str) {
        trace!(key, value, depth = self.depth(), "set");
        self.active_mut().set(key, value);
    }

    /// Value bound to `key` in the active scope.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.active().get(key)
    }

    /// Remove `key` from the active scope. Unbound keys are ignored.
    pub fn unset(&mut self, key: &str) {
        trace!(key, depth = self.depth(), "unset");
        self.active_mut().unset(key);
    }

    /// Number of keys in the active scope bound to `value`.
    pub fn count_equal_to(&self, value: &str) -> usize {
        self.active().count_equal_to(value)
    }

    // --- Transaction Operations ---

    /// Open a transaction on top of the active scope.
    pub fn begin(&mut self) {
        let scope = self.active().clone();
        self.transactions.push(scope);
        debug!(depth = self.depth(), "transaction begun");
    }

    /// Discard the innermost transaction.
    pub fn rollback(&mut self) -> Result<()> {
        if self.transactions.pop().is_none() {
            warn!("rollback with no open transaction");
            return Err(StoreError::NoTransaction);
        }
        debug!(depth = self.depth(), "transaction rolled back");
        Ok(())
    }

    /// Commit every open transaction at once.
    ///
    /// The innermost scope becomes the new base; intermediate scopes are
    /// discarded.
    pub fn commit(&mut self) -> Result<()> {
        let Some(top) = self.transactions.pop() else {
            warn!("commit with no open transaction");
            return Err(StoreError::NoTransaction);
        };
        let levels = self.transactions.len() + 1;
        self.transactions.clear();
        self.base = top;
        debug!(levels, "transactions committed");
        Ok(())
    }

    /// Number of open transactions.
    pub fn depth(&self) -> usize {
        self.transactions.len()
    }

    /// Statistics for the active scope.
    pub fn stats(&self) -> StoreStats {
        let scope = self.active();
        StoreStats {
            depth: self.depth(),
            keys: scope.len(),
            distinct_values: scope.distinct_values(),
        }
    }

    /// Check the value index of every scope against its keys.
    pub fn verify(&self) -> bool {
        self.base.index_consistent() && self.transactions.iter().all(Scope::index_consistent)
    }

    // --- Dispatch ---

    /// Execute a parsed command.
    ///
    /// Returns `None` for commands that succeed without output.
    pub fn execute(&mut self, command: &Command) -> Option<Reply> {
        match command {
            Command::Set { key, value } => {
                self.set(key, value);
                None
            }
            Command::Get { key } => Some(match self.get(key) {
                Some(value) => Reply::Value(value.to_string()),
                None => Reply::Null,
            }),
            Command::Unset { key } => {
                self.unset(key);
                None
            }
            Command::NumEqualTo { value } => Some(Reply::Count(self.count_equal_to(value))),
            Command::Begin => {
                self.begin();
                None
            }
            Command::Rollback => self.rollback().err().map(|_| Reply::NoTransaction),
            Command::Commit => self.commit().err().map(|_| Reply::NoTransaction),
            Command::End => None,
        }
    }
}

/// A store guarded by a single exclusive lock.
///
/// Each call holds the lock for its whole duration, so commands from
/// different threads never interleave. Clones share the same store.
#[derive(Clone, Debug, Default)]
pub struct SharedStore {
    inner: Arc<Mutex<Store>>,
}

impl SharedStore {
    pub fn new(store: Store) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// Execute one command under the lock.
    pub fn execute(&self, command: &Command) -> Option<Reply> {
        self.inner.lock().execute(command)
    }

    /// Run `f` with exclusive access to the store.
    pub fn with<T>(&self, f: impl FnOnce(&mut Store) -> T) -> T {
        f(&mut self.inner.lock())
    }
}
