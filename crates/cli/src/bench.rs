//! Micro-benchmark comparing one-shot analysis with a reused analyser.

use std::time::Instant;

use argtree_core::analyser::Analyser;
use argtree_core::error::Result;

use crate::cli_args::demo_options;

/// Input with quoting, nesting and escapes representative of real use.
const SAMPLE: &str = r#"Lorem ipsum "dolor sit amet, consectetur" adipiscing (elit. [In id {fermentum mi.}] Curabitur) viverra, 'justo \'nec viver"ra' mollis, lec"tus massa.""#;

const ITERATIONS: [usize; 4] = [1, 100, 10_000, 100_000];

/// Runs the benchmark ladder and prints per-count timings for analysing
/// the sample via `analyse_once` against a single reused [`Analyser`].
///
/// # Errors
///
/// Returns an error if the sample fails to analyse, which would mean the
/// demo options and the sample input have drifted apart.
pub fn run() -> Result<()> {
    let options = demo_options();

    for count in ITERATIONS {
        println!("[{count}]");

        let start = Instant::now();
        for _ in 0..count {
            Analyser::analyse_once(SAMPLE, &options)?;
        }
        println!("One shot: {:?}", start.elapsed());

        let start = Instant::now();
        let analyser = Analyser::new(&options)?;
        for _ in 0..count {
            analyser.analyse(SAMPLE)?;
        }
        println!("Analyse: {:?}", start.elapsed());

        println!("{}", "-".repeat(38));
    }

    Ok(())
}
