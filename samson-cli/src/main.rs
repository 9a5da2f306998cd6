//! # samson — terminal chatbot
//!
//! Reads one line per turn from stdin and answers with a random walk over
//! everything said so far. Runs until stdin is closed.

mod cli;
mod logging;
mod repl;

use std::io;

use anyhow::Context;
use clap::Parser;
use samson_core::session::ChatSession;
use tracing::info;

use crate::cli::Args;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = args.load_config().context("failed to load configuration")?;
    logging::init(
        args.log_level.as_deref(),
        &config.general.log_level,
        args.log_format,
    )?;

    let mut session = ChatSession::from_config(&config);
    let stdin = io::stdin();
    let stdout = io::stdout();
    let turns = repl::run(&mut session, stdin.lock(), &mut stdout.lock())
        .context("terminal I/O failed")?;

    let session_stats = serde_json::to_string(session.stats())?;
    let memory_stats = serde_json::to_string(&session.memory().stats())?;
    info!(turns, session = %session_stats, memory = %memory_stats, "Input closed");
    Ok(())
}
