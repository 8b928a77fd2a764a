//! Interop demo - the calling side of [`interop_types::PersonRecord`].
//!
//! ```text
//! interop [show] [--json] [words...]   walk every operation once
//! interop stats [--trials N]           measure the random branch split
//! ```
//!
//! Logs go to stderr (filtered by `RUST_LOG`); stdout carries only demo output.

mod demo;

use anyhow::Result;
use std::{env, io};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use interop_config::InteropConfig;
use interop_types::{PersonRecord, ThreadRandom};

use demo::Command;

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(env_filter)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let command = Command::parse(env::args().skip(1))?;

    tracing::debug!(path = ?InteropConfig::path(), "config location");
    let config = InteropConfig::load_or_default();

    let record = PersonRecord::new(config.person_name(), config.person_age());
    tracing::debug!(%record, "record constructed");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut source = ThreadRandom;

    match command {
        Command::Show { json, words } => demo::show(&record, &words, json, &mut source, &mut out),
        Command::Stats { trials } => {
            let trials = trials.unwrap_or_else(|| config.trials());
            tracing::info!(trials, "collecting stats");
            let report = demo::collect_stats(&record, trials, &mut source);
            demo::write_stats(&report, &mut out)
        }
    }
}
