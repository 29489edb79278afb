//! `sentence-links` prints a sentence with its words linked to Pleco.
//!
//! Usage:
//!   sentence-links <TEXT> <PINYIN> [--target WORD]

use sentence_links::cli::{init_tracing, links, LinkArgs};

fn main() {
    init_tracing();
    let args = match LinkArgs::parse(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };
    let (html, alignment) = links(&args);
    println!("{html}");
    if !alignment.is_exact() {
        eprintln!(
            "pinyin did not line up: {} skipped, {} overrun, {} trailing",
            alignment.skipped, alignment.overrun, alignment.trailing
        );
    }
}
