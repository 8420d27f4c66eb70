// crates/core/src/error.rs
use alloc::string::String;
use thiserror::Error;

use crate::boundary::BoundaryKind;

/// Failure while building a matcher.
///
/// Scanning itself never fails; this only surfaces while a language's
/// matcher set is being constructed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoundaryError {
    #[error("escape must be exactly one character, got {escape:?}")]
    InvalidEscapeConfiguration { escape: String },

    #[error("{kind} delimiter must not be empty")]
    EmptyDelimiter { kind: BoundaryKind },
}

pub type Result<T> = core::result::Result<T, BoundaryError>;
