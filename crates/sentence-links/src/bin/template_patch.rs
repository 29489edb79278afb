//! `template-patch` inserts the sentence-link scripts into a template
//! config blob (stdin) and writes the patched blob to stdout.
//!
//! Usage:
//!   template-patch [--name NAME] [--config PATH] < config.bin > patched.bin

use std::io::{self, Read, Write};

use sentence_links::cli::{init_tracing, load_config, patch, CliError, PatchArgs};

fn run() -> Result<(), CliError> {
    let args = PatchArgs::parse(std::env::args().skip(1))?;
    let config = load_config(args.config.as_deref())?;

    let mut blob = Vec::new();
    io::stdin().read_to_end(&mut blob)?;
    let patched = patch(&blob, args.name.as_deref(), &config)?;
    tracing::info!(before = blob.len(), after = patched.len(), "patched template config");
    io::stdout().write_all(&patched)?;
    Ok(())
}

fn main() {
    init_tracing();
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
