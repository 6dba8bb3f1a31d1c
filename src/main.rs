//! scopekv command-line front end.
//!
//! Reads commands from a file, or from stdin when no file is given, and
//! writes replies to stdout. Logs go to stderr.

use clap::Parser;
use scopekv::{Session, SessionConfig, Store};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// In-memory key-value store with nested transactions.
#[derive(Parser)]
#[command(name = "scopekv")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// File of newline-separated commands (reads stdin if omitted)
    file: Option<PathBuf>,

    /// Echo each input line before its reply (default when reading a file)
    #[arg(long, conflicts_with = "no_echo")]
    echo: bool,

    /// Never echo input lines
    #[arg(long)]
    no_echo: bool,

    /// Print store statistics as JSON to stderr when the session ends
    #[arg(long)]
    stats: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn session_config(&self) -> SessionConfig {
        SessionConfig {
            echo: echo_input(self.file.is_some(), self.echo, self.no_echo),
        }
    }
}

/// File input echoes by default, stdin does not; either flag overrides.
fn echo_input(from_file: bool, echo: bool, no_echo: bool) -> bool {
    if echo {
        true
    } else if no_echo {
        false
    } else {
        from_file
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let mut store = Store::new();
    let config = cli.session_config();
    let stdout = io::stdout();

    let summary = match &cli.file {
        Some(path) => {
            let file = File::open(path)?;
            Session::new(&mut store, config).run(BufReader::new(file), stdout.lock())?
        }
        None => {
            let stdin = io::stdin();
            Session::new(&mut store, config).run(stdin.lock(), stdout.lock())?
        }
    };

    tracing::debug!(?summary, "done");

    if cli.stats {
        eprintln!("{}", serde_json::to_string(&store.stats())?);
    }

    Ok(())
}
