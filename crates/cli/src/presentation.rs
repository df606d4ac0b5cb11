// crates/cli/src/presentation.rs
use std::fmt::Write;

use word_count_engine::options::{OptionSet, UnitMode};
use word_count_engine::stats::{Counts, RunningTotals};

/// Render one input's counts: lines, words, then the shared bytes-or-chars
/// slot, each followed by a single space, then the display name. Standard
/// input has an empty name, so its row ends in the trailing space.
#[must_use]
pub fn format_counts(counts: &Counts, name: &str, options: OptionSet) -> String {
    let mut row = String::new();

    if options.lines {
        write!(row, "{} ", counts.lines).unwrap();
    }
    if options.words {
        write!(row, "{} ", counts.words).unwrap();
    }
    match options.unit {
        UnitMode::Bytes => write!(row, "{} ", counts.bytes).unwrap(),
        UnitMode::Chars => write!(row, "{} ", counts.chars).unwrap(),
        UnitMode::None => {}
    }

    row.push_str(name);
    row
}

/// Render the totals row: always three fields, `lines words units`,
/// regardless of which options were active (unselected counts read 0).
/// The third field follows the shared slot: characters when `-m` was in
/// effect, bytes otherwise.
#[must_use]
pub fn format_totals(totals: &RunningTotals, options: OptionSet) -> String {
    let counts = totals.counts();
    let units = match options.unit {
        UnitMode::Chars => counts.chars,
        UnitMode::Bytes | UnitMode::None => counts.bytes,
    };

    format!("{} {} {}", counts.lines, counts.words, units)
}

pub fn print_counts(counts: &Counts, name: &str, options: OptionSet) {
    println!("{}", format_counts(counts, name, options));
}

pub fn print_totals(totals: &RunningTotals, options: OptionSet) {
    println!("{}", format_totals(totals, options));
}
