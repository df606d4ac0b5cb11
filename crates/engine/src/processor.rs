// crates/engine/src/processor.rs
use crate::error::Result;
use crate::options::{OptionSet, ScanMode, UnitMode};
use crate::scanner;
use crate::source::{self, Input};
use crate::stats::Counts;

/// Produce the counts for a single input under the resolved options.
///
/// File byte counts come from size metadata without a content read; the
/// contents are only loaded when a scanning pass is actually selected.
/// Standard input is fully buffered first and measured from the buffer.
///
/// # Errors
/// Fails when the input cannot be opened or read. Failures are terminal;
/// the caller aborts the run.
pub fn process(input: &Input, options: OptionSet) -> Result<Counts> {
    match input {
        Input::File(path) => {
            let mut counts = Counts::default();
            if options.unit == UnitMode::Bytes {
                counts.bytes = source::file_size(path)?;
            }
            if let Some(mode) = options.scan_mode() {
                let text = source::read_file(path)?;
                scan_into(&mut counts, &text, mode);
            }
            Ok(counts)
        }
        Input::Stdin => {
            let text = source::read_stdin()?;
            Ok(count_buffered(&text, options))
        }
    }
}

/// Count fully-buffered text, taking the byte count from the buffer itself.
#[must_use]
pub fn count_buffered(text: &str, options: OptionSet) -> Counts {
    let mut counts = Counts::default();
    if options.unit == UnitMode::Bytes {
        counts.bytes = text.len() as u64;
    }
    if let Some(mode) = options.scan_mode() {
        scan_into(&mut counts, text, mode);
    }
    counts
}

fn scan_into(counts: &mut Counts, text: &str, mode: ScanMode) {
    let scanned = scanner::scan(text, mode);
    counts.lines = scanned.lines;
    counts.words = scanned.words;
    counts.chars = scanned.chars;
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::path::PathBuf;

    use tempfile::NamedTempFile;

    use super::*;
    use crate::error::EngineError;

    fn fixture(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{content}").unwrap();
        file
    }

    #[test]
    fn default_options_report_lines_words_bytes() {
        let file = fixture("hello world\nfoo\n");
        let input = Input::File(file.path().to_path_buf());
        let options = OptionSet::resolve(false, false, false, false);

        let counts = process(&input, options).unwrap();
        assert_eq!(counts.lines, 2);
        assert_eq!(counts.words, 3);
        assert_eq!(counts.bytes, 16);
        assert_eq!(counts.chars, 0);
    }

    #[test]
    fn char_mode_reads_contents_instead_of_metadata() {
        let file = fixture("héllo\n");
        let input = Input::File(file.path().to_path_buf());
        let options = OptionSet::resolve(false, false, false, true);

        let counts = process(&input, options).unwrap();
        assert_eq!(counts.chars, 6);
        assert_eq!(counts.bytes, 0);
    }

    #[test]
    fn missing_file_aborts_with_open_error() {
        let input = Input::File(PathBuf::from("no/such/file"));
        let options = OptionSet::resolve(false, true, false, false);
        let err = process(&input, options).unwrap_err();
        assert!(matches!(err, EngineError::FileOpen { .. }));
    }

    #[test]
    fn buffered_byte_count_is_the_buffer_length() {
        let options = OptionSet::resolve(true, false, false, false);
        let counts = count_buffered("ab\ncd\n", options);
        assert_eq!(counts.bytes, 6);
        assert_eq!(counts.lines, 0);
    }

    #[test]
    fn buffered_counts_honor_scan_selection() {
        let options = OptionSet::resolve(false, true, true, false);
        let counts = count_buffered("a b\nc\n", options);
        assert_eq!(counts.lines, 2);
        assert_eq!(counts.words, 3);
        assert_eq!(counts.bytes, 0);
    }
}
