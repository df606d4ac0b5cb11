// crates/engine/src/scanner.rs
//! Single-pass scanners over fully-buffered input text.
//!
//! Each [`ScanMode`] variant corresponds to one forward pass with no
//! backtracking. Byte counts are never produced here; they come from the
//! source's size metadata (files) or the buffered text itself (stdin).

use crate::options::ScanMode;
use crate::stats::Counts;

/// Run the selected pass over the text and return its counts.
#[must_use]
pub fn scan(text: &str, mode: ScanMode) -> Counts {
    match mode {
        ScanMode::CharsOnly => chars_only(text),
        ScanMode::CharsLinesWords => chars_lines_words(text),
        ScanMode::LinesOnly => lines_only(text),
        ScanMode::LinesWords => lines_words(text),
    }
}

fn chars_only(text: &str) -> Counts {
    Counts {
        chars: text.chars().count() as u64,
        ..Counts::default()
    }
}

/// Character pass that also tracks line and word transitions.
///
/// A line is charged to the terminator: `\n` or `\r` increments the count
/// unless the immediately preceding character was `\r`, which collapses
/// `\r\n` into one line (and suppresses the second of `\r\r` as well). A
/// word increments on each whitespace-to-non-whitespace transition. An
/// unterminated trailing line is NOT counted in this mode; only the
/// line-oriented passes below do that.
fn chars_lines_words(text: &str) -> Counts {
    let mut counts = Counts::default();
    let mut prev: Option<char> = None;
    let mut in_word = false;

    for ch in text.chars() {
        counts.chars += 1;

        if ch.is_whitespace() {
            if (ch == '\n' || ch == '\r') && prev != Some('\r') {
                counts.lines += 1;
            }
            in_word = false;
        } else {
            if !in_word {
                counts.words += 1;
            }
            in_word = true;
        }

        prev = Some(ch);
    }

    counts
}

fn lines_only(text: &str) -> Counts {
    let bytes = text.as_bytes();

    // Fast path: without carriage returns every terminator is a lone LF.
    let lines = if bytecount::count(bytes, b'\r') == 0 {
        let mut lines = bytecount::count(bytes, b'\n') as u64;
        if bytes.last().is_some_and(|&b| b != b'\n') {
            lines += 1;
        }
        lines
    } else {
        split_lines(text).count() as u64
    };

    Counts {
        lines,
        ..Counts::default()
    }
}

fn lines_words(text: &str) -> Counts {
    let mut counts = Counts::default();

    for line in split_lines(text) {
        counts.lines += 1;
        counts.words += line.split_whitespace().count() as u64;
    }

    counts
}

/// Iterate terminator-delimited lines, excluding the terminator.
///
/// Terminators are `\n`, `\r`, and `\r\n`. An unterminated trailing
/// fragment yields one final line; the empty remainder after a trailing
/// terminator yields nothing.
fn split_lines(text: &str) -> SplitLines<'_> {
    SplitLines { rest: text }
}

struct SplitLines<'a> {
    rest: &'a str,
}

impl<'a> Iterator for SplitLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }

        match self.rest.find(['\n', '\r']) {
            Some(pos) => {
                let line = &self.rest[..pos];
                let after = &self.rest[pos..];
                let skip = if after.starts_with("\r\n") { 2 } else { 1 };
                self.rest = &after[skip..];
                Some(line)
            }
            None => {
                let line = self.rest;
                self.rest = "";
                Some(line)
            }
        }
    }
}
