#![no_std]
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]

//! Comment/string boundary detection and line classification.
//!
//! - [`boundary`]: matchers finding where strings and comments open and close in a line
//! - [`language`]: per-language matcher sets and the extension registry
//! - [`scanner`]: classifies consecutive lines as code, comment or blank
//! - [`counts`]: per-file line totals

extern crate alloc;

pub mod boundary;
pub mod counts;
pub mod error;
pub mod language;
pub mod scanner;

pub use boundary::{
    BlockCommentMatcher, Boundary, BoundaryKind, LineCommentMatcher, Position, StringMatcher,
};
pub use counts::{LineCounts, count_text};
pub use error::BoundaryError;
pub use language::{Language, LanguageRegistry};
pub use scanner::{LineKind, LineScanner, OpenConstruct};
