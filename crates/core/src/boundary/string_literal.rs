// crates/core/src/boundary/string_literal.rs
//! String literal matcher with escape handling.
//!
//! Comment markers inside a string must not open a comment, so the scanner
//! has to know where a string really ends. A closing delimiter preceded by
//! the escape character does not count.

use alloc::string::{String, ToString};

use super::{Boundary, BoundaryKind, Position};
use crate::error::{BoundaryError, Result};

/// Matcher for a string literal such as `"..."` with `\` as escape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringMatcher {
    begin: String,
    end: String,
    escape: Option<char>,
}

impl StringMatcher {
    /// Builds a matcher from textual configuration.
    ///
    /// # Errors
    ///
    /// - [`BoundaryError::EmptyDelimiter`] when `begin` or `end` is empty
    /// - [`BoundaryError::InvalidEscapeConfiguration`] when `escape` is given
    ///   but is not exactly one character long
    pub fn new(begin: &str, end: &str, escape: Option<&str>) -> Result<Self> {
        if begin.is_empty() || end.is_empty() {
            return Err(BoundaryError::EmptyDelimiter {
                kind: BoundaryKind::String,
            });
        }
        let escape = match escape {
            None => None,
            Some(s) => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some(c),
                    _ => {
                        return Err(BoundaryError::InvalidEscapeConfiguration {
                            escape: s.to_string(),
                        });
                    }
                }
            }
        };
        Ok(Self::with_escape_char(begin, end, escape))
    }

    /// Infallible form for delimiters known at compile time.
    ///
    /// An empty `begin` or `end` is accepted but never matches.
    #[must_use]
    pub fn with_escape_char(begin: &str, end: &str, escape: Option<char>) -> Self {
        Self {
            begin: begin.to_string(),
            end: end.to_string(),
            escape,
        }
    }

    /// `"` ... `"` with `\` escapes.
    #[must_use]
    pub fn double_quoted() -> Self {
        Self::with_escape_char("\"", "\"", Some('\\'))
    }

    /// `'` ... `'` with `\` escapes.
    #[must_use]
    pub fn single_quoted() -> Self {
        Self::with_escape_char("'", "'", Some('\\'))
    }

    #[must_use]
    pub fn end_delimiter(&self) -> &str {
        &self.end
    }

    #[must_use]
    pub const fn escape(&self) -> Option<char> {
        self.escape
    }

    fn is_escaped(&self, text: &str, pos: usize) -> bool {
        self.escape
            .is_some_and(|esc| text[..pos].chars().next_back() == Some(esc))
    }
}

impl Boundary for StringMatcher {
    fn kind(&self) -> BoundaryKind {
        BoundaryKind::String
    }

    fn begin_delimiter(&self) -> &str {
        &self.begin
    }

    /// Finds the first closing delimiter that is not escaped.
    ///
    /// An escaped match restarts the search one character past the start of
    /// that match. A match at offset 0 of the line returns the delimiter
    /// length as-is, even if that is also the end of the line.
    fn end(&self, line: &str) -> Position {
        if self.end.is_empty() {
            return Position::NotFound;
        }
        let mut offset = 0;
        loop {
            let rest = &line[offset..];
            let Some(found) = rest.find(self.end.as_str()) else {
                return Position::NotFound;
            };

            if found == 0 {
                if offset == 0 {
                    return Position::Resume(self.end.len());
                }
                return Position::after_delimiter(offset + self.end.len(), line.len());
            }

            if !self.is_escaped(rest, found) {
                return Position::after_delimiter(offset + found + self.end.len(), line.len());
            }

            let step = rest[found..].chars().next().map_or(1, char::len_utf8);
            offset += found + step;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_not_found_on_empty() {
        let m = StringMatcher::double_quoted();
        assert_eq!(m.begin(""), Position::NotFound);
    }

    #[test]
    fn test_begin_positions() {
        let m = StringMatcher::double_quoted();
        assert_eq!(m.begin("x = \"abc\""), Position::Resume(5));
        assert_eq!(m.begin("x = \""), Position::AtLineEnd);
        assert_eq!(m.begin("x = 1;"), Position::NotFound);
    }

    #[test]
    fn test_end_at_line_end() {
        let m = StringMatcher::double_quoted();
        assert_eq!(m.end("abc\""), Position::AtLineEnd);
        assert_eq!(m.end("abc\"").as_raw(), -1);
    }

    #[test]
    fn test_end_with_following_text() {
        let m = StringMatcher::double_quoted();
        assert_eq!(m.end("abc\" def"), Position::Resume(4));
    }

    #[test]
    fn test_end_skips_escaped_quote() {
        let m = StringMatcher::double_quoted();
        // a\"b"  -> 二つ目の " の直後
        assert_eq!(m.end("a\\\"b\""), Position::AtLineEnd);
        assert_eq!(m.end("a\\\"b\" + x"), Position::Resume(5));
    }

    #[test]
    fn test_end_skips_several_escapes() {
        let m = StringMatcher::double_quoted();
        let line = r#"\"a\"b" rest"#;
        assert_eq!(m.end(line), Position::Resume(7));
    }

    #[test]
    fn test_end_escaped_only_is_not_found() {
        let m = StringMatcher::double_quoted();
        assert_eq!(m.end("abc\\\" still open"), Position::NotFound);
    }

    #[test]
    fn test_end_unmatched() {
        let m = StringMatcher::double_quoted();
        assert_eq!(m.end("no close here"), Position::NotFound);
        assert_eq!(m.end(""), Position::NotFound);
    }

    #[test]
    fn test_end_match_at_start_keeps_length() {
        let m = StringMatcher::double_quoted();
        // 行頭一致は行末でも -1 にならない
        assert_eq!(m.end("\""), Position::Resume(1));
        assert_eq!(m.end("\" + y"), Position::Resume(1));
    }

    #[test]
    fn test_end_escaped_then_immediate_close_at_line_end() {
        let m = StringMatcher::double_quoted();
        // a\""  -> the skipped search restarts right on the closing quote
        assert_eq!(m.end("a\\\"\""), Position::AtLineEnd);
        assert_eq!(m.end("a\\\"\"x"), Position::Resume(4));
    }

    #[test]
    fn test_end_without_escape_char() {
        let m = StringMatcher::with_escape_char("\"", "\"", None);
        assert_eq!(m.end("a\\\"b\""), Position::Resume(3));
    }

    #[test]
    fn test_multichar_delimiters() {
        let m = StringMatcher::with_escape_char("\"\"\"", "\"\"\"", Some('\\'));
        assert_eq!(m.begin("x = \"\"\"doc"), Position::Resume(7));
        assert_eq!(m.end("doc\"\"\""), Position::AtLineEnd);
        assert_eq!(m.end("a\\\"\"\"b\"\"\" c"), Position::Resume(9));
    }

    #[test]
    fn test_escape_validation() {
        assert!(StringMatcher::new("\"", "\"", None).is_ok());
        assert!(StringMatcher::new("\"", "\"", Some("\\")).is_ok());
        assert_eq!(
            StringMatcher::new("\"", "\"", Some("ab")),
            Err(BoundaryError::InvalidEscapeConfiguration {
                escape: "ab".to_string()
            })
        );
        assert!(StringMatcher::new("\"", "\"", Some("")).is_err());
    }

    #[test]
    fn test_empty_delimiter_rejected() {
        let expected = Err(BoundaryError::EmptyDelimiter {
            kind: BoundaryKind::String,
        });
        assert_eq!(StringMatcher::new("", "\"", None), expected);
        assert_eq!(StringMatcher::new("\"", "", Some("\\")), expected);
    }

    #[test]
    fn test_empty_end_never_matches() {
        let m = StringMatcher::with_escape_char("\"", "", None);
        assert_eq!(m.end("abc"), Position::NotFound);
        assert_eq!(m.end(""), Position::NotFound);
        assert_eq!(m.end("abc").as_raw(), 0);
    }

    #[test]
    fn test_multibyte_escape_char() {
        let m = StringMatcher::new("「", "」", Some("＼")).unwrap();
        assert_eq!(m.escape(), Some('＼'));
        let line = "a＼」b」c";
        // 「＼」+「」」はエスケープ、二つ目の「」」で閉じる
        assert_eq!(m.end(line), Position::Resume("a＼」b」".len()));
    }
}
