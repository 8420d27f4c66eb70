// crates/core/src/boundary/mod.rs
//! # Boundary Matchers
//!
//! Detects where a string literal, a line comment or a block comment opens
//! and closes inside a single line of text. No tokenizing happens here: each
//! matcher only looks for its own delimiters and reports where scanning may
//! resume.
//!
//! | Matcher | `begin` | `end` |
//! |---------|---------|-------|
//! | [`StringMatcher`] | opening quote | closing quote, skipping escaped ones |
//! | [`LineCommentMatcher`] | comment marker | always the end of the line |
//! | [`BlockCommentMatcher`] | opening marker | closing marker (no nesting) |
//!
//! Matchers are immutable once built. The open/closed state of a file scan
//! lives in [`crate::scanner::LineScanner`], never in the matcher.
//!
//! ```rust
//! use line_stats_core::boundary::{BlockCommentMatcher, Boundary, Position};
//!
//! let block = BlockCommentMatcher::new("/*", "*/");
//! assert_eq!(block.begin("code /* comment"), Position::Resume(7));
//! assert_eq!(block.end("comment */"), Position::AtLineEnd);
//! assert_eq!(block.end("*/code"), Position::Resume(2));
//! ```

mod block_comment;
mod line_comment;
mod string_literal;

pub use block_comment::BlockCommentMatcher;
pub use line_comment::LineCommentMatcher;
pub use string_literal::StringMatcher;

use core::fmt;

/// The construct a matcher detects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundaryKind {
    /// String literal
    String,
    /// Comment running to the end of the line
    LineComment,
    /// Comment that may span several lines
    BlockComment,
}

impl fmt::Display for BoundaryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::String => "string",
            Self::LineComment => "line comment",
            Self::BlockComment => "block comment",
        };
        f.write_str(name)
    }
}

/// Result of a `begin`/`end` search within one line.
///
/// Maps onto the integer convention `0` / `-1` / `p` through [`Position::as_raw`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    /// The delimiter does not occur in the line.
    NotFound,
    /// The delimiter was found and is the last thing on the line.
    AtLineEnd,
    /// The delimiter was found; scanning resumes at this byte offset.
    Resume(usize),
}

impl Position {
    /// Classifies the offset just past a matched delimiter.
    #[must_use]
    pub const fn after_delimiter(next: usize, line_len: usize) -> Self {
        if next >= line_len {
            Self::AtLineEnd
        } else {
            Self::Resume(next)
        }
    }

    /// Integer form: `0` not found, `-1` at line end, otherwise the resume offset.
    #[must_use]
    pub fn as_raw(self) -> isize {
        match self {
            Self::NotFound => 0,
            Self::AtLineEnd => -1,
            Self::Resume(p) => isize::try_from(p).unwrap_or(isize::MAX),
        }
    }

    /// Absolute offset just past the delimiter, or `None` when nothing was found.
    #[must_use]
    pub const fn resolve(self, line_len: usize) -> Option<usize> {
        match self {
            Self::NotFound => None,
            Self::AtLineEnd => Some(line_len),
            Self::Resume(p) => Some(p),
        }
    }
}

impl From<Position> for isize {
    fn from(p: Position) -> Self {
        p.as_raw()
    }
}

/// Uniform contract over the three matchers.
///
/// Both searches are pure functions of the matcher and the line. `line`
/// never carries its trailing newline.
pub trait Boundary: Send + Sync + fmt::Debug {
    /// Which construct this matcher detects.
    fn kind(&self) -> BoundaryKind;

    /// The delimiter that opens the construct.
    fn begin_delimiter(&self) -> &str;

    /// Finds the first opening delimiter in `line`.
    fn begin(&self, line: &str) -> Position {
        find_delimiter(line, self.begin_delimiter())
    }

    /// Finds where the construct closes, scanning `line` from its start.
    fn end(&self, line: &str) -> Position;
}

impl<T: Boundary + ?Sized> Boundary for alloc::boxed::Box<T> {
    fn kind(&self) -> BoundaryKind {
        (**self).kind()
    }

    fn begin_delimiter(&self) -> &str {
        (**self).begin_delimiter()
    }

    fn begin(&self, line: &str) -> Position {
        (**self).begin(line)
    }

    fn end(&self, line: &str) -> Position {
        (**self).end(line)
    }
}

/// Locates the first `delimiter` in `line` and reports the offset after it.
///
/// An empty delimiter never matches.
pub(crate) fn find_delimiter(line: &str, delimiter: &str) -> Position {
    if delimiter.is_empty() {
        return Position::NotFound;
    }
    line.find(delimiter).map_or(Position::NotFound, |pos| {
        Position::after_delimiter(pos + delimiter.len(), line.len())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_values() {
        assert_eq!(Position::NotFound.as_raw(), 0);
        assert_eq!(Position::AtLineEnd.as_raw(), -1);
        assert_eq!(isize::from(Position::Resume(4)), 4);
    }

    #[test]
    fn test_resolve() {
        assert_eq!(Position::NotFound.resolve(10), None);
        assert_eq!(Position::AtLineEnd.resolve(10), Some(10));
        assert_eq!(Position::Resume(3).resolve(10), Some(3));
    }

    #[test]
    fn test_find_delimiter() {
        assert_eq!(find_delimiter("", "//"), Position::NotFound);
        assert_eq!(find_delimiter("a //", "//"), Position::AtLineEnd);
        assert_eq!(find_delimiter("a // b", "//"), Position::Resume(4));
        assert_eq!(find_delimiter("a / b", "//"), Position::NotFound);
    }

    #[test]
    fn test_first_occurrence_wins() {
        assert_eq!(find_delimiter("// a // b", "//"), Position::Resume(2));
    }

    #[test]
    fn test_multibyte_offsets_are_bytes() {
        // "あ" は3バイト
        assert_eq!(find_delimiter("あ // x", "//"), Position::Resume(6));
    }
}
