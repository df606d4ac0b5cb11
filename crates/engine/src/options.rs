// crates/engine/src/options.rs

/// Which unit fills the shared bytes-or-characters output slot.
///
/// `-c` and `-m` are mutually exclusive; the enum has no simultaneous-true
/// state to rule out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnitMode {
    Bytes,
    Chars,
    #[default]
    None,
}

/// The scanning strategy selected once per run from the option set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanMode {
    /// `-m` alone: count every character, nothing else.
    CharsOnly,
    /// `-m` with `-l` and/or `-w`: classify characters in a single pass.
    CharsLinesWords,
    /// `-l` alone: count terminator-delimited segments.
    LinesOnly,
    /// `-l` and/or `-w` without `-m`: per-line word tokenization.
    LinesWords,
}

/// Resolved counting selection, immutable for the whole invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionSet {
    pub lines: bool,
    pub words: bool,
    pub unit: UnitMode,
}

impl OptionSet {
    /// Build the effective option set from the parsed flags.
    ///
    /// `bytes` and `chars` arrive already exclusive (the argument parser
    /// applies last-flag-wins between `-c` and `-m`). When no counting flag
    /// was given at all, the defaults are bytes, lines, and words.
    #[must_use]
    pub fn resolve(bytes: bool, lines: bool, words: bool, chars: bool) -> Self {
        if !(bytes || lines || words || chars) {
            return Self {
                lines: true,
                words: true,
                unit: UnitMode::Bytes,
            };
        }

        let unit = if chars {
            UnitMode::Chars
        } else if bytes {
            UnitMode::Bytes
        } else {
            UnitMode::None
        };

        Self { lines, words, unit }
    }

    /// The scanner to run, or `None` in pure byte-count mode where only the
    /// source size is consulted.
    #[must_use]
    pub const fn scan_mode(self) -> Option<ScanMode> {
        match (self.unit, self.lines, self.words) {
            (UnitMode::Chars, false, false) => Some(ScanMode::CharsOnly),
            (UnitMode::Chars, _, _) => Some(ScanMode::CharsLinesWords),
            (_, true, false) => Some(ScanMode::LinesOnly),
            (_, _, true) => Some(ScanMode::LinesWords),
            (_, false, false) => None,
        }
    }
}
