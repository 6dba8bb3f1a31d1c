//! Session loop: feeds input lines through the store and writes replies.

use crate::command::{parse_line, Command};
use crate::error::Result;
use crate::store::Store;
use crate::types::Reply;
use std::borrow::Cow;
use std::io::{BufRead, Write};
use tracing::{debug, warn};

/// Session configuration.
#[derive(Clone, Debug, Default)]
pub struct SessionConfig {
    /// Write each input line before its reply.
    pub echo: bool,
}

/// What a finished session saw.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Lines read, including blank lines and the `END` line.
    pub lines: usize,
    /// Lines that parsed into a command, including `END`. Rejected and blank
    /// lines are not counted.
    pub commands: usize,
    /// Whether the session stopped at `END` rather than end of input.
    pub ended: bool,
}

/// Outcome of handling one input line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LineOutcome {
    /// Blank line, nothing to do.
    Blank,
    /// The line was `END`.
    End,
    /// The command ran; the reply, if any, is to be printed.
    Executed(Option<Reply>),
    /// The line did not parse; the store was not touched.
    Rejected(Reply),
}

/// One run of the command loop over a store.
pub struct Session<'a> {
    store: &'a mut Store,
    config: SessionConfig,
}

impl<'a> Session<'a> {
    pub fn new(store: &'a mut Store, config: SessionConfig) -> Self {
        Self { store, config }
    }

    /// Handle one line.
    pub fn handle_line(&mut self, line: &str) -> LineOutcome {
        match parse_line(line) {
            Ok(None) => LineOutcome::Blank,
            Ok(Some(Command::End)) => LineOutcome::End,
            Ok(Some(command)) => {
                debug!(command = command.name(), "dispatch");
                LineOutcome::Executed(self.store.execute(&command))
            }
            Err(e) => {
                warn!(line, error = ?e, "rejected input line");
                LineOutcome::Rejected(Reply::from(e))
            }
        }
    }

    /// Read commands from `input` until `END` or end of input.
    ///
    /// Only I/O failures are returned as errors; command failures are
    /// written to `output` as replies. Bytes that are not valid UTF-8 are
    /// replaced with U+FFFD and the line is handled like any other.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        mut output: W,
    ) -> Result<SessionSummary> {
        let mut summary = SessionSummary::default();
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            summary.lines += 1;

            let line = String::from_utf8_lossy(strip_line_ending(&buf));
            if let Cow::Owned(_) = line {
                warn!(line_no = summary.lines, "input line is not valid UTF-8");
            }

            if self.config.echo {
                writeln!(output, "{}", line)?;
            }

            let reply = match self.handle_line(&line) {
                LineOutcome::Blank => None,
                LineOutcome::End => {
                    summary.commands += 1;
                    summary.ended = true;
                    break;
                }
                LineOutcome::Executed(reply) => {
                    summary.commands += 1;
                    reply
                }
                LineOutcome::Rejected(reply) => Some(reply),
            };
            if let Some(reply) = reply {
                writeln!(output, "{}", reply)?;
            }
        }

        output.flush()?;
        debug!(
            lines = summary.lines,
            commands = summary.commands,
            ended = summary.ended,
            "session finished"
        );
        Ok(summary)
    }
}

/// Drop a trailing `\n` or `\r\n`.
fn strip_line_ending(buf: &[u8]) -> &[u8] {
    let buf = buf.strip_suffix(b"\n").unwrap_or(buf);
    buf.strip_suffix(b"\r").unwrap_or(buf)
}
