use std::io;

use anyhow::Context;
use clap::Parser;
use memento_calc::{
    calculator::session::CalculatorSession,
    logging,
    repl::driver::{ReplOptions, run},
};

/// memento-calc evaluates `<number> <opcode> <number>` requests line by line
/// and can roll back to earlier results.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Do not print the prompt before each line. Useful when piping input.
    #[arg(short, long, env = "MEMENTO_CALC_QUIET")]
    quiet: bool,

    /// Log filter for diagnostics on stderr, e.g. `debug`. `RUST_LOG` wins
    /// when set.
    #[arg(long, env = "MEMENTO_CALC_LOG", default_value = logging::DEFAULT_FILTER)]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init(&args.log_level);

    let mut session = CalculatorSession::new();
    let options = ReplOptions { prompt: !args.quiet };

    run(&mut session, io::stdin().lock(), &mut io::stdout().lock(), options)
        .context("command loop failed on standard input/output")
}
