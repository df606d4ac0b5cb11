// crates/cli/src/lib.rs
pub mod args;
pub mod config;
pub mod presentation;

use word_count_engine as engine;
use word_count_engine::error::Result;
use word_count_engine::stats::RunningTotals;

use crate::config::Config;

/// Process every input in argument order, printing each row as soon as its
/// counts are ready, then report totals when more than one file was named.
///
/// # Errors
/// Stops at the first input that cannot be opened or read; whatever rows
/// were already printed stay printed.
pub fn run(config: &Config) -> Result<()> {
    let mut totals = RunningTotals::default();

    for input in &config.inputs {
        let counts = engine::process(input, config.options)?;
        presentation::print_counts(&counts, &input.display_name(), config.options);
        totals.record(counts);
    }

    if totals.should_report() {
        presentation::print_totals(&totals, config.options);
    }

    Ok(())
}
