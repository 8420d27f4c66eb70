// crates/core/src/boundary/line_comment.rs
use alloc::string::{String, ToString};

use super::{Boundary, BoundaryKind, Position};
use crate::error::{BoundaryError, Result};

/// Matcher for a comment that runs to the end of the line (`//`, `#`, `--`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineCommentMatcher {
    begin: String,
}

impl LineCommentMatcher {
    #[must_use]
    pub fn new(begin: &str) -> Self {
        Self {
            begin: begin.to_string(),
        }
    }

    /// # Errors
    ///
    /// Returns [`BoundaryError::EmptyDelimiter`] if `begin` is empty.
    pub fn try_new(begin: &str) -> Result<Self> {
        if begin.is_empty() {
            return Err(BoundaryError::EmptyDelimiter {
                kind: BoundaryKind::LineComment,
            });
        }
        Ok(Self::new(begin))
    }
}

impl Boundary for LineCommentMatcher {
    fn kind(&self) -> BoundaryKind {
        BoundaryKind::LineComment
    }

    fn begin_delimiter(&self) -> &str {
        &self.begin
    }

    /// A line comment always closes at the end of the line.
    fn end(&self, _line: &str) -> Position {
        Position::AtLineEnd
    }
}
