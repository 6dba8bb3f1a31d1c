//! Line-oriented command front end.
//!
//! Input lines are whitespace-delimited tokens, `COMMAND [ARG1 [ARG2]]`:
//!
//! | Command      | Arguments     |
//! |--------------|---------------|
//! | `SET`        | `key value`   |
//! | `GET`        | `key`         |
//! | `UNSET`      | `key`         |
//! | `NUMEQUALTO` | `value`       |
//! | `BEGIN`      |               |
//! | `ROLLBACK`   |               |
//! | `COMMIT`     |               |
//! | `END`        |               |
//!
//! Command names are case-sensitive.

mod parser;

pub use parser::{parse_line, Command};
