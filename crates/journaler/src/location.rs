//! Caller locations for debug lines

use std::fmt;

/// Source location of a debug call
///
/// Captured at the call expression with `#[track_caller]` and threaded
/// through every forwarding layer, so a `Journaler` reports its caller and
/// not itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub file: &'static str,
    pub line: u32,
}

impl Location {
    pub fn new(file: &'static str, line: u32) -> Self {
        Self { file, line }
    }

    /// Location of the caller of the current `#[track_caller]` function
    #[track_caller]
    pub fn caller() -> Self {
        std::panic::Location::caller().into()
    }

    /// File path with every directory shortened to one character
    pub fn short_file(&self) -> String {
        short_file(self.file)
    }
}

impl From<&'static std::panic::Location<'static>> for Location {
    fn from(location: &'static std::panic::Location<'static>) -> Self {
        Self::new(location.file(), location.line())
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.short_file(), self.line)
    }
}

/// Abbreviate a path: `/home/joe/journal.rs` becomes `/h/j/journal.rs`
pub fn short_file(path: &str) -> String {
    let normalized = path.replace('\\', "/");
    let parts: Vec<&str> = normalized.split('/').filter(|part| !part.is_empty()).collect();
    let last = parts.len().saturating_sub(1);

    let mut short = String::with_capacity(path.len());
    for (i, part) in parts.iter().enumerate() {
        short.push('/');
        if i < last {
            // first character, not first byte
            short.extend(part.chars().next());
        } else {
            short.push_str(part);
        }
    }

    if short.is_empty() {
        short.push('/');
    }
    short
}
