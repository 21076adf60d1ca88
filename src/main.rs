//! tinsel CLI - headless card player
//!
//! Plays the card's timeline against an in-memory document and prints the
//! resulting decoration markup.

use std::process::ExitCode;

use tinsel::cli::{init_tracing, run_cli, Args};

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose());
    run_cli(args)
}
