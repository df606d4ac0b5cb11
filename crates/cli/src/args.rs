// crates/cli/src/args.rs
use clap::Parser;
use std::path::PathBuf;

/// Raw command-line surface. Flags are case-sensitive single characters and
/// may be clustered (`-lwc`) or split across tokens; clap rejects anything
/// unrecognized with a diagnostic before any file is touched.
///
/// `-c` and `-m` override each other, most recent occurrence winning. The
/// self-overrides make repeated flags (`-ll`) harmless.
#[derive(Debug, Parser)]
#[command(
    name = "word_count",
    version,
    about = "Count lines, words, and bytes or characters for each input"
)]
pub struct Args {
    /// Count bytes in each input
    #[arg(short = 'c', overrides_with_all = ["bytes", "chars"])]
    pub bytes: bool,

    /// Count lines in each input
    #[arg(short = 'l', overrides_with = "lines")]
    pub lines: bool,

    /// Count whitespace-delimited words in each input
    #[arg(short = 'w', overrides_with = "words")]
    pub words: bool,

    /// Count characters in each input (mutually exclusive with -c)
    #[arg(short = 'm', overrides_with_all = ["bytes", "chars"])]
    pub chars: bool,

    /// Files to count; standard input is read when none are given
    pub files: Vec<PathBuf>,
}
