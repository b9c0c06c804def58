//! Conquid -- a two-player territory game played over a line protocol.
//!
//! This binary reads commands from stdin and writes responses to stdout.
//! Logs go to stderr and are filtered with `RUST_LOG`.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use conquid::board::BoardConfig;
use conquid::history::History;
use conquid::protocol::{parse_command, Command};
use conquid::session::DEFAULT_ACQUIRE_LIMIT;
use conquid::shell::Shell;

/// Command-line options.
#[derive(Debug, Parser)]
#[command(name = "conquid", version, about = "Two-player territory capture game")]
struct Cli {
    /// Board rows
    #[arg(long, default_value_t = 14)]
    rows: usize,

    /// Board columns
    #[arg(long, default_value_t = 28)]
    cols: usize,

    /// Base size (2 for a block, 3 for a ring); picked from the row count
    /// when omitted
    #[arg(long)]
    base_size: Option<u8>,

    /// Maximum cells claimed by one Acquire
    #[arg(long, default_value_t = DEFAULT_ACQUIRE_LIMIT)]
    acquire_limit: usize,

    /// Resume the game recorded in this file
    #[arg(long)]
    load: Option<PathBuf>,
}

impl Cli {
    fn shell(&self) -> Result<Shell> {
        if let Some(path) = &self.load {
            let json = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
            let history = History::from_json(&json)?;
            return Ok(Shell::from_history(history, self.acquire_limit)?);
        }
        let config = match self.base_size {
            Some(size) => BoardConfig::new(self.rows, self.cols, size)?,
            None => BoardConfig::with_default_base(self.rows, self.cols)?,
        };
        Ok(Shell::new(config, self.acquire_limit))
    }
}

/// Runs the main protocol loop, reading commands from stdin and writing
/// responses to stdout.
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut shell = cli.shell()?;
    info!(rows = cli.rows, cols = cli.cols, "conquid ready");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    shell.flush(&mut out)?;

    for line in stdin.lock().lines() {
        let line = line?;
        let Some(cmd) = parse_command(&line) else { continue };

        match cmd {
            Command::NewGame { rows, cols, base_size } => shell.handle_newgame(rows, cols, base_size, &mut out)?,
            Command::Move { intent } => shell.handle_move(&intent, &mut out)?,
            Command::Confirm => shell.handle_confirm(&mut out)?,
            Command::Discard => shell.handle_discard(&mut out)?,
            Command::Back => shell.handle_back(&mut out)?,
            Command::Forward => shell.handle_forward(&mut out)?,
            Command::Live => shell.handle_live(&mut out)?,
            Command::Show => shell.handle_show(&mut out)?,
            Command::History => shell.handle_history(&mut out)?,
            Command::Corners => shell.handle_corners(&mut out)?,
            Command::Save { path } => shell.handle_save(&path, &mut out)?,
            Command::Load { path } => shell.handle_load(&path, &mut out)?,
            Command::Quit => break,
        }
        out.flush()?;
    }
    Ok(())
}
