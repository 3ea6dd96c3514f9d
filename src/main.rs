//! # SASM
//!
//! Runs a simple assembly program from a file on the console.
//!

use clap::Parser;
use std::path::PathBuf;

mod term;

/// Run a simple assembly program.
#[derive(Parser, Debug)]
#[command(name = "sasm", version, about)]
pub struct Args {
    /// Source file to run
    file: PathBuf,

    /// Stop after executing this many instructions
    #[arg(long)]
    steps: Option<u64>,

    /// Log every executed line
    #[arg(long)]
    trace: bool,

    /// Seed for the RAND operand
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    let args = Args::parse();
    let level = if args.trace { "trace" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
    std::process::exit(term::main(&args));
}
