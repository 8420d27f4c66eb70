// crates/core/src/counts.rs
use core::ops::{Add, AddAssign};

use crate::language::Language;
use crate::scanner::{LineKind, LineScanner};

/// Line totals for a file or a group of files.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineCounts {
    pub lines: usize,
    pub code: usize,
    pub comment: usize,
    pub blank: usize,
}

impl LineCounts {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            lines: 0,
            code: 0,
            comment: 0,
            blank: 0,
        }
    }

    pub const fn record(&mut self, kind: LineKind) {
        self.lines += 1;
        match kind {
            LineKind::Code => self.code += 1,
            LineKind::Comment => self.comment += 1,
            LineKind::Blank => self.blank += 1,
        }
    }
}

impl AddAssign for LineCounts {
    fn add_assign(&mut self, rhs: Self) {
        self.lines += rhs.lines;
        self.code += rhs.code;
        self.comment += rhs.comment;
        self.blank += rhs.blank;
    }
}

impl Add for LineCounts {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl core::iter::Sum for LineCounts {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::new(), Add::add)
    }
}

/// Classifies every line of `text` with `language`.
///
/// Lines are split like [`str::lines`]: `\n` and `\r\n` terminators are
/// stripped and a trailing newline does not start an extra line.
#[must_use]
pub fn count_text(text: &str, language: &Language) -> LineCounts {
    let mut scanner = LineScanner::new(language);
    let mut counts = LineCounts::new();
    for line in text.lines() {
        counts.record(scanner.classify(line));
    }
    counts
}
