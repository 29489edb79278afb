//! `stroke-order` reads one note's stored field string (stdin), pads or
//! truncates it to the note type's fields and fills the stroke-order field.
//!
//! Usage:
//!   stroke-order --fields Simplified,Pinyin,Meaning < flds.txt

use std::io::{self, Read};

use sentence_links::cli::{init_tracing, stroke_order, CliError, StrokeArgs};

fn run() -> Result<(), CliError> {
    let args = StrokeArgs::parse(std::env::args().skip(1))?;
    let layout = args.layout();

    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;
    let flds = input.strip_suffix('\n').unwrap_or(&input);
    tracing::debug!(fields = layout.len(), "syncing note fields");
    println!("{}", stroke_order(flds, &layout));
    Ok(())
}

fn main() {
    init_tracing();
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
