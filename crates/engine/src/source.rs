// crates/engine/src/source.rs
use std::fs;
use std::io::{self, BufRead, Read};
use std::path::{Path, PathBuf};

use crate::error::{EngineError, Result};

/// One countable input: a named file or the process's standard input.
///
/// Each input is opened, consumed by exactly one pass, and closed before the
/// next input is touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    File(PathBuf),
    Stdin,
}

impl Input {
    /// Name printed after the counts. Standard input prints as an empty
    /// name, leaving the field separator in place.
    #[must_use]
    pub fn display_name(&self) -> String {
        match self {
            Self::File(path) => path.display().to_string(),
            Self::Stdin => String::new(),
        }
    }
}

/// Byte length of a named file, taken from metadata without reading it.
pub fn file_size(path: &Path) -> Result<u64> {
    let meta = fs::metadata(path).map_err(|e| EngineError::FileOpen {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(meta.len())
}

/// Read a file fully into memory, replacing invalid UTF-8 lossily.
pub fn read_file(path: &Path) -> Result<String> {
    let mut file = fs::File::open(path).map_err(|e| EngineError::FileOpen {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut raw = Vec::new();
    file.read_to_end(&mut raw).map_err(|e| EngineError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(String::from_utf8_lossy(&raw).into_owned())
}

/// Fully buffer standard input before any counting starts.
pub fn read_stdin() -> Result<String> {
    buffer_lines(io::stdin().lock()).map_err(EngineError::Stdin)
}

/// Reassemble a stream line by line, appending a newline after every line,
/// including an unterminated final one. Piped `"ab\ncd"` therefore buffers
/// as `"ab\ncd\n"`, and the byte count taken from this text reflects that.
pub fn buffer_lines(reader: impl BufRead) -> io::Result<String> {
    let mut text = String::new();
    for line in reader.lines() {
        text.push_str(&line?);
        text.push('\n');
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::io::Write;

    use super::*;

    #[test]
    fn buffer_lines_appends_newline_to_unterminated_input() {
        let text = buffer_lines(Cursor::new("ab\ncd")).unwrap();
        assert_eq!(text, "ab\ncd\n");
        assert_eq!(text.len(), 6);
    }

    #[test]
    fn buffer_lines_keeps_terminated_input_stable() {
        let text = buffer_lines(Cursor::new("a b\nc\n")).unwrap();
        assert_eq!(text, "a b\nc\n");
    }

    #[test]
    fn buffer_lines_empty_stream_is_empty() {
        let text = buffer_lines(Cursor::new("")).unwrap();
        assert_eq!(text, "");
    }

    #[test]
    fn file_size_comes_from_metadata() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "hello world\nfoo\n").unwrap();
        assert_eq!(file_size(file.path()).unwrap(), 16);
    }

    #[test]
    fn file_size_missing_file_is_an_open_error() {
        let err = file_size(Path::new("definitely/not/here")).unwrap_err();
        assert!(matches!(err, EngineError::FileOpen { .. }));
    }

    #[test]
    fn stdin_displays_as_empty_name() {
        assert_eq!(Input::Stdin.display_name(), "");
        assert_eq!(Input::File(PathBuf::from("a.txt")).display_name(), "a.txt");
    }
}
