// crates/core/src/scanner.rs
//! # Line Scanner
//!
//! Drives a language's boundary matchers over consecutive lines of one file
//! and classifies each line as code, comment or blank.
//!
//! The scanner owns the only mutable state: which construct is currently
//! open. Within a line it alternates between two questions:
//!
//! - nothing open: which opening delimiter comes first?
//! - something open: where does it close?
//!
//! A line may open and close several constructs, e.g. `a /* b */ c // d`.
//!
//! ```rust
//! use line_stats_core::language::LanguageRegistry;
//! use line_stats_core::scanner::{LineKind, LineScanner};
//!
//! let registry = LanguageRegistry::with_builtins();
//! let c = registry.for_extension("c").unwrap();
//! let mut scanner = LineScanner::new(c);
//!
//! assert_eq!(scanner.classify(r#"x = "a\"b" // trailing"#), LineKind::Code);
//! assert_eq!(scanner.classify("/* start"), LineKind::Comment);
//! assert_eq!(scanner.classify(""), LineKind::Comment);
//! assert_eq!(scanner.classify("end */ y = 1;"), LineKind::Code);
//! ```

use crate::boundary::{BoundaryKind, Position};
use crate::language::Language;

/// Construct the scanner is currently inside of.
///
/// The index refers to the matcher in [`Language::matchers`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OpenConstruct {
    #[default]
    None,
    String(usize),
    LineComment(usize),
    BlockComment(usize),
}

impl OpenConstruct {
    const fn opened(kind: BoundaryKind, index: usize) -> Self {
        match kind {
            BoundaryKind::String => Self::String(index),
            BoundaryKind::LineComment => Self::LineComment(index),
            BoundaryKind::BlockComment => Self::BlockComment(index),
        }
    }
}

/// Classification of a physical line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    /// Whitespace only
    Blank,
    /// Contains code outside comments (string literals are code)
    Code,
    /// Only comment content, possibly with surrounding whitespace
    Comment,
}

/// Opening delimiter located in the remaining text of a line.
struct Opening {
    index: usize,
    start: usize,
    after: usize,
}

/// Per-file scanner. Call [`LineScanner::reset`] before reusing it on another file.
#[derive(Debug)]
pub struct LineScanner<'a> {
    language: &'a Language,
    open: OpenConstruct,
}

impl<'a> LineScanner<'a> {
    #[must_use]
    pub const fn new(language: &'a Language) -> Self {
        Self {
            language,
            open: OpenConstruct::None,
        }
    }

    #[must_use]
    pub const fn language(&self) -> &'a Language {
        self.language
    }

    #[must_use]
    pub const fn open_construct(&self) -> OpenConstruct {
        self.open
    }

    pub fn reset(&mut self) {
        self.open = OpenConstruct::None;
    }

    /// Classifies `line` (without its newline) and advances the open state.
    pub fn classify(&mut self, line: &str) -> LineKind {
        if line.trim().is_empty() {
            return if matches!(self.open, OpenConstruct::BlockComment(_)) {
                LineKind::Comment
            } else {
                LineKind::Blank
            };
        }

        let mut has_code = false;
        let mut has_comment = false;
        let mut rest = line;

        loop {
            let index = match self.open {
                OpenConstruct::None => {
                    let Some(opening) = self.earliest_opening(rest) else {
                        has_code |= !rest.trim().is_empty();
                        break;
                    };
                    has_code |= !rest[..opening.start].trim().is_empty();

                    let kind = self.language.matchers()[opening.index].kind();
                    self.open = OpenConstruct::opened(kind, opening.index);
                    if opening.after >= rest.len() {
                        // the opening delimiter ends the line
                        mark(kind, &mut has_code, &mut has_comment);
                        break;
                    }
                    rest = &rest[opening.after..];
                    opening.index
                }
                OpenConstruct::String(i)
                | OpenConstruct::LineComment(i)
                | OpenConstruct::BlockComment(i) => i,
            };

            let matcher = &self.language.matchers()[index];
            mark(matcher.kind(), &mut has_code, &mut has_comment);

            match matcher.end(rest) {
                Position::NotFound => break,
                Position::AtLineEnd => {
                    self.open = OpenConstruct::None;
                    break;
                }
                Position::Resume(next) => {
                    self.open = OpenConstruct::None;
                    rest = &rest[next..];
                }
            }
        }

        // a line comment never carries over to the next line
        if matches!(self.open, OpenConstruct::LineComment(_)) {
            self.open = OpenConstruct::None;
        }

        if has_code {
            LineKind::Code
        } else if has_comment {
            LineKind::Comment
        } else {
            LineKind::Blank
        }
    }

    /// Earliest opening delimiter in `text`; the longer delimiter wins a tie.
    fn earliest_opening(&self, text: &str) -> Option<Opening> {
        let mut best: Option<Opening> = None;

        for (index, matcher) in self.language.matchers().iter().enumerate() {
            let delimiter = matcher.begin_delimiter();
            if delimiter.is_empty() {
                continue;
            }
            let Some(after) = matcher.begin(text).resolve(text.len()) else {
                continue;
            };
            let start = after - delimiter.len();

            let better = best
                .as_ref()
                .is_none_or(|b| start < b.start || (start == b.start && after > b.after));
            if better {
                best = Some(Opening {
                    index,
                    start,
                    after,
                });
            }
        }

        best
    }
}

fn mark(kind: BoundaryKind, has_code: &mut bool, has_comment: &mut bool) {
    match kind {
        BoundaryKind::String => *has_code = true,
        BoundaryKind::LineComment | BoundaryKind::BlockComment => *has_comment = true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::LanguageRegistry;

    fn classify_all(ext: &str, lines: &[&str]) -> alloc::vec::Vec<LineKind> {
        let registry = LanguageRegistry::with_builtins();
        let lang = registry.for_extension(ext).unwrap();
        let mut scanner = LineScanner::new(lang);
        lines.iter().map(|l| scanner.classify(l)).collect()
    }

    use LineKind::{Blank, Code, Comment};

    #[test]
    fn test_escaped_quote_does_not_hide_line_comment() {
        let registry = LanguageRegistry::with_builtins();
        let lang = registry.for_extension("c").unwrap();
        let mut scanner = LineScanner::new(lang);

        assert_eq!(scanner.classify(r#"x = "a\"b" // trailing"#), Code);
        assert_eq!(scanner.open_construct(), OpenConstruct::None);
        // 次の行に文字列状態が漏れていないこと
        assert_eq!(scanner.classify("// only a comment"), Comment);
    }

    #[test]
    fn test_comment_marker_inside_string_is_code() {
        assert_eq!(classify_all("c", &[r#"url = "http://example.com";"#]), [Code]);
        assert_eq!(classify_all("c", &[r#""/* not a comment */""#]), [Code]);
    }

    #[test]
    fn test_basic_kinds() {
        assert_eq!(
            classify_all("rs", &["fn main() {", "    // note", "", "   ", "}"]),
            [Code, Comment, Blank, Blank, Code]
        );
    }

    #[test]
    fn test_rust_quote_char_literal_closes() {
        assert_eq!(
            classify_all("rs", &["let q = '\"';", "// one", "// two", "// three"]),
            [Code, Comment, Comment, Comment]
        );
        assert_eq!(
            classify_all("rs", &[r#"let q = '\"'; // quote"#, "// next"]),
            [Code, Comment]
        );
        assert_eq!(classify_all("rs", &["let q = '\"'"]), [Code]);
    }

    #[test]
    fn test_rust_lifetimes_stay_code() {
        let registry = LanguageRegistry::with_builtins();
        let lang = registry.for_extension("rs").unwrap();
        let mut scanner = LineScanner::new(lang);

        assert_eq!(scanner.classify("fn f<'a>(s: &'a str) -> &'a str { s } // id"), Code);
        assert_eq!(scanner.open_construct(), OpenConstruct::None);
        assert_eq!(scanner.classify("// after"), Comment);
    }

    #[test]
    fn test_block_comment_spanning_lines() {
        assert_eq!(
            classify_all("c", &["/*", " * doc", "", " */", "int x;"]),
            [Comment, Comment, Comment, Comment, Code]
        );
    }

    #[test]
    fn test_block_closes_and_reopens_on_one_line() {
        let registry = LanguageRegistry::with_builtins();
        let lang = registry.for_extension("c").unwrap();
        let mut scanner = LineScanner::new(lang);

        assert_eq!(scanner.classify("/* a */ /* b"), Comment);
        assert!(matches!(scanner.open_construct(), OpenConstruct::BlockComment(_)));
        assert_eq!(scanner.classify("b */ /* c */"), Comment);
        assert_eq!(scanner.open_construct(), OpenConstruct::None);
    }

    #[test]
    fn test_code_around_block_comment() {
        assert_eq!(classify_all("c", &["int a; /* x */"]), [Code]);
        assert_eq!(classify_all("c", &["/* x */ int a;"]), [Code]);
        assert_eq!(classify_all("c", &["/* x */ // y"]), [Comment]);
    }

    #[test]
    fn test_string_open_across_lines() {
        let registry = LanguageRegistry::with_builtins();
        let lang = registry.for_extension("py").unwrap();
        let mut scanner = LineScanner::new(lang);

        assert_eq!(scanner.classify("s = \"\"\""), Code);
        assert!(matches!(scanner.open_construct(), OpenConstruct::String(_)));
        assert_eq!(scanner.classify("# not a comment here"), Code);
        assert_eq!(scanner.classify("\"\"\""), Code);
        assert_eq!(scanner.open_construct(), OpenConstruct::None);
        assert_eq!(scanner.classify("# real comment"), Comment);
    }

    #[test]
    fn test_longest_delimiter_wins_tie() {
        assert_eq!(
            classify_all("lua", &["--[[ block", "still", "]] x = 1", "-- line"]),
            [Comment, Comment, Code, Comment]
        );
    }

    #[test]
    fn test_line_comment_at_line_end() {
        assert_eq!(classify_all("sh", &["echo hi #"]), [Code]);
        assert_eq!(classify_all("sh", &["#"]), [Comment]);
    }

    #[test]
    fn test_language_without_matchers() {
        assert_eq!(classify_all("txt", &["hello // world", ""]), [Code, Blank]);
    }

    #[test]
    fn test_reset() {
        let registry = LanguageRegistry::with_builtins();
        let lang = registry.for_extension("c").unwrap();
        let mut scanner = LineScanner::new(lang);
        scanner.classify("/* open");
        scanner.reset();
        assert_eq!(scanner.open_construct(), OpenConstruct::None);
        assert_eq!(scanner.classify("int x;"), Code);
    }
}
