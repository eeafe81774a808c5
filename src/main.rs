//! Asah Otak - CLI
//!
//! Terminal word-guessing game over a local SQLite store: a random word is
//! drawn each round, the clue and a partially revealed word are shown, and
//! a positional score can be saved under a player name.

use anyhow::{Context, Result};
use asah_otak::output::{print_banner, print_goodbye};
use asah_otak::session::run_session;
use asah_otak::storage::{GameStore, resolve_db_path};
use clap::Parser;
use colored::Colorize;
use std::process;

#[derive(Parser)]
#[command(
    name = "asah_otak",
    about = "Terminal word-guessing game backed by an embedded SQLite store",
    version,
    author
)]
struct Cli {}

fn main() {
    let Cli {} = Cli::parse();

    // Storage errors surface here as a single descriptive line, no backtrace.
    if let Err(err) = run() {
        eprintln!("{} {err:#}", "error:".red().bold());
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let db_path = resolve_db_path();

    let store = GameStore::open(&db_path)
        .with_context(|| format!("failed to open database at {}", db_path.display()))?;
    println!("Database ready at: {}", db_path.display());
    println!("Tables created successfully.");

    let seeded = store
        .seed_samples()
        .context("failed to seed sample words")?;
    println!("Sample data inserted successfully ({seeded} words).");

    print_banner();
    run_session(&store)?;
    print_goodbye();

    Ok(())
}
