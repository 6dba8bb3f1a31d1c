//! Core types shared by the store and the command front end.

use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Text written for a `GET` on an unbound key.
pub const NULL_REPLY: &str = "NULL";

/// The printable outcome of one dispatched command.
///
/// Commands that succeed silently (SET, UNSET, BEGIN, a successful ROLLBACK or
/// COMMIT) produce no reply at all rather than an empty one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reply {
    /// Value bound to the requested key.
    Value(String),
    /// The requested key is unbound.
    Null,
    /// Number of keys holding the requested value.
    Count(usize),
    /// ROLLBACK or COMMIT with no open transaction.
    NoTransaction,
    /// The command name was not recognized.
    Unrecognized,
    /// The command had the wrong number of arguments.
    InvalidArguments,
}

impl From<ParseError> for Reply {
    fn from(e: ParseError) -> Self {
        match e {
            ParseError::Unrecognized(_) => Reply::Unrecognized,
            ParseError::Arity { .. } => Reply::InvalidArguments,
        }
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Value(v) => f.write_str(v),
            Reply::Null => f.write_str(NULL_REPLY),
            Reply::Count(n) => write!(f, "{}", n),
            Reply::NoTransaction => f.write_str("NO TRANSACTION"),
            Reply::Unrecognized => f.write_str("UNRECOGNIZED COMMAND"),
            Reply::InvalidArguments => f.write_str("INVALID ARGUMENTS"),
        }
    }
}

/// Store statistics for the active scope.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreStats {
    /// Number of open transactions.
    pub depth: usize,
    /// Keys bound in the active scope.
    pub keys: usize,
    /// Distinct values held by at least one key.
    pub distinct_values: usize,
}
