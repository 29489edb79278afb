//! `template-dump` prints the question and answer slots of a template
//! config blob read from stdin.
//!
//! Usage:
//!   template-dump [--config PATH] < config.bin

use std::io::{self, Read};
use std::path::PathBuf;

use sentence_links::cli::{dump, init_tracing, load_config, CliError};

fn run() -> Result<String, CliError> {
    let mut args = std::env::args().skip(1);
    let mut config_path = None;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let path = args
                    .next()
                    .ok_or(CliError::Usage("template-dump [--config PATH]"))?;
                config_path = Some(PathBuf::from(path));
            }
            _ => return Err(CliError::Usage("template-dump [--config PATH]")),
        }
    }
    let config = load_config(config_path.as_deref())?;

    let mut blob = Vec::new();
    io::stdin().read_to_end(&mut blob)?;
    dump(&blob, config.decode)
}

fn main() {
    init_tracing();
    match run() {
        Ok(text) => print!("{text}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
