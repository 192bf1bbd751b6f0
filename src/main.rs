//! Evaluation bench binary entry point.
//!
//! Configuration is fixed at startup: no command-line arguments, no
//! configuration file. All output goes to the append-only run log.

use algobench::config::{self, BenchConfig};
use algobench::eval::{SearchEvaluator, SortEvaluator};
use algobench::runlog::FileSink;

fn main() {
    if let Err(e) = run() {
        eprintln!("algobench: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = BenchConfig::default();
    config::validate(&config)?;

    let mut log = FileSink::open(&config.log_path)?;

    for &strategy in &config.sort_strategies {
        SortEvaluator::new(&config, &mut log).run(strategy)?;
    }

    for &strategy in &config.search_strategies {
        SearchEvaluator::new(&config, &mut log).run(strategy)?;
    }

    Ok(())
}
