use clap::Parser;
use log::{debug, warn};

use argtree_core::analyser::Analyser;
use argtree_core::error::Result;
use std::io::{stdin, stdout, BufRead};
use std::process::ExitCode;

use crate::cli_args::Args;

mod bench;
mod cli_args;
mod output;

fn execute() -> Result<()> {
    let args = Args::parse();

    if args.bench {
        if args.input.is_some() {
            warn!("An input was provided, but --bench is specified. Ignoring the input.");
        }
        return bench::run();
    }

    let options = cli_args::resolve_options(args.get_source()?)?;
    debug!("Analyser options: {:?}", options);
    let analyser = Analyser::new(&options)?;

    match &args.input {
        Some(input) => analyse_and_render(&analyser, input),
        None => run_prompt(&analyser),
    }
}

/// Analyses a single input given on the command line and renders the tree.
fn analyse_and_render(analyser: &Analyser, input: &str) -> Result<()> {
    let items = analyser.analyse(input)?;
    output::print_tree(&mut stdout(), &items)
}

/// Reads lines from standard input, rendering each analysis between rules.
fn run_prompt(analyser: &Analyser) -> Result<()> {
    let mut stdout = stdout();
    output::print_banner(&mut stdout)?;

    for line in stdin().lock().lines() {
        let input = line?;
        output::print_rule(&mut stdout, '-')?;
        match analyser.analyse(&input) {
            Ok(items) => output::print_tree(&mut stdout, &items)?,
            Err(error) => output::print_error(&mut stdout, &error)?,
        }
        output::print_rule(&mut stdout, '=')?;
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
