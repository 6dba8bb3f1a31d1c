//! Error types for the store and its command front end.

use thiserror::Error;

/// Main error type for store operations.
///
/// The `Display` form of each variant is the text written back to the client.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Rollback or commit was issued with no open transaction.
    #[error("NO TRANSACTION")]
    NoTransaction,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors produced while turning an input line into a command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("UNRECOGNIZED COMMAND")]
    Unrecognized(String),

    #[error("INVALID ARGUMENTS")]
    Arity {
        command: &'static str,
        expected: usize,
        got: usize,
    },
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_text() {
        assert_eq!(StoreError::NoTransaction.to_string(), "NO TRANSACTION");
        assert_eq!(
            ParseError::Unrecognized("FOO".into()).to_string(),
            "UNRECOGNIZED COMMAND"
        );
        assert_eq!(
            ParseError::Arity {
                command: "SET",
                expected: 2,
                got: 1
            }
            .to_string(),
            "INVALID ARGUMENTS"
        );
    }
}
