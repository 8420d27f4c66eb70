// crates/core/src/boundary/block_comment.rs
use alloc::string::{String, ToString};

use super::{Boundary, BoundaryKind, Position, find_delimiter};
use crate::error::{BoundaryError, Result};

/// Matcher for a comment that may span lines (`/* */`, `<!-- -->`).
///
/// Nested block comments are not recognised: the first closing delimiter
/// ends the comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockCommentMatcher {
    begin: String,
    end: String,
}

impl BlockCommentMatcher {
    /// An empty `begin` or `end` is accepted but never matches. Use
    /// [`BlockCommentMatcher::try_new`] for delimiters read from configuration.
    #[must_use]
    pub fn new(begin: &str, end: &str) -> Self {
        Self {
            begin: begin.to_string(),
            end: end.to_string(),
        }
    }

    /// # Errors
    ///
    /// Returns [`BoundaryError::EmptyDelimiter`] if either delimiter is empty.
    pub fn try_new(begin: &str, end: &str) -> Result<Self> {
        if begin.is_empty() || end.is_empty() {
            return Err(BoundaryError::EmptyDelimiter {
                kind: BoundaryKind::BlockComment,
            });
        }
        Ok(Self::new(begin, end))
    }

    #[must_use]
    pub fn end_delimiter(&self) -> &str {
        &self.end
    }
}

impl Boundary for BlockCommentMatcher {
    fn kind(&self) -> BoundaryKind {
        BoundaryKind::BlockComment
    }

    fn begin_delimiter(&self) -> &str {
        &self.begin
    }

    fn end(&self, line: &str) -> Position {
        find_delimiter(line, &self.end)
    }
}
