//! Command parsing.

use crate::error::ParseError;

/// A parsed command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Set { key: String, value: String },
    Get { key: String },
    Unset { key: String },
    NumEqualTo { value: String },
    Begin,
    Rollback,
    Commit,
    /// End of session. Handled by the session loop, not the store.
    End,
}

impl Command {
    /// Command name as written on the wire.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Set { .. } => "SET",
            Command::Get { .. } => "GET",
            Command::Unset { .. } => "UNSET",
            Command::NumEqualTo { .. } => "NUMEQUALTO",
            Command::Begin => "BEGIN",
            Command::Rollback => "ROLLBACK",
            Command::Commit => "COMMIT",
            Command::End => "END",
        }
    }
}

/// Check argument count, yielding the arguments as a fixed-size array.
fn take<'a, const N: usize>(
    command: &'static str,
    args: &[&'a str],
) -> Result<[&'a str; N], ParseError> {
    <[&str; N]>::try_from(args).map_err(|_| ParseError::Arity {
        command,
        expected: N,
        got: args.len(),
    })
}

/// Parse one input line.
///
/// Returns `Ok(None)` for a blank line.
pub fn parse_line(line: &str) -> Result<Option<Command>, ParseError> {
    let mut tokens = line.split_whitespace();
    let Some(name) = tokens.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = tokens.collect();

    let command = match name {
        "SET" => {
            let [key, value] = take("SET", &args)?;
            Command::Set {
                key: key.to_string(),
                value: value.to_string(),
            }
        }
        "GET" => {
            let [key] = take("GET", &args)?;
            Command::Get {
                key: key.to_string(),
            }
        }
        "UNSET" => {
            let [key] = take("UNSET", &args)?;
            Command::Unset {
                key: key.to_string(),
            }
        }
        "NUMEQUALTO" => {
            let [value] = take("NUMEQUALTO", &args)?;
            Command::NumEqualTo {
                value: value.to_string(),
            }
        }
        "BEGIN" => {
            take::<0>("BEGIN", &args)?;
            Command::Begin
        }
        "ROLLBACK" => {
            take::<0>("ROLLBACK", &args)?;
            Command::Rollback
        }
        "COMMIT" => {
            take::<0>("COMMIT", &args)?;
            Command::Commit
        }
        "END" => {
            take::<0>("END", &args)?;
            Command::End
        }
        other => return Err(ParseError::Unrecognized(other.to_string())),
    };

    Ok(Some(command))
}
