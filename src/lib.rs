//! # scopekv
//!
//! An in-memory key-value store with nested transactions and a reverse
//! index answering "how many keys hold this value".
//!
//! ## Core Concepts
//!
//! - **Scopes**: each scope holds its own key map and value-count index
//! - **Transactions**: `begin` pushes a full copy of the active scope;
//!   `rollback` discards the innermost one
//! - **Flattening commit**: `commit` makes the innermost scope the new base
//!   and closes every open transaction at once
//! - **Commands**: a line-oriented front end (`SET`, `GET`, `UNSET`,
//!   `NUMEQUALTO`, `BEGIN`, `ROLLBACK`, `COMMIT`, `END`)
//!
//! ## Example
//!
//! ```
//! use scopekv::{Session, SessionConfig, Store};
//!
//! let mut store = Store::new();
//! let input = "SET a 10\nSET b 10\nNUMEQUALTO 10\nBEGIN\nUNSET a\nGET a\nROLLBACK\nGET a\nEND\n";
//! let mut output = Vec::new();
//! Session::new(&mut store, SessionConfig::default())
//!     .run(input.as_bytes(), &mut output)?;
//!
//! assert_eq!(String::from_utf8(output).unwrap(), "2\nNULL\n10\n");
//! # Ok::<(), scopekv::StoreError>(())
//! ```

pub mod command;
pub mod error;
pub mod index;
pub mod scope;
pub mod session;
pub mod store;
pub mod types;

// Re-exports
pub use command::{parse_line, Command};
pub use error::{ParseError, Result, StoreError};
pub use index::ValueIndex;
pub use scope::Scope;
pub use session::{LineOutcome, Session, SessionConfig, SessionSummary};
pub use store::{SharedStore, Store};
pub use types::*;
