use crate::error::EngineError;
use line_stats_core::LineCounts;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Statistics for a single scanned file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileStats {
    pub path: PathBuf,
    pub name: String,
    pub ext: String,
    pub language: String,
    pub size: u64,
    #[serde(flatten)]
    pub counts: LineCounts,
}

impl FileStats {
    #[must_use]
    pub fn new(path: PathBuf, language: &str) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            path,
            name,
            ext,
            language: language.to_string(),
            size: 0,
            counts: LineCounts::default(),
        }
    }
}

/// Outcome of a run: the files that were scanned plus per-file failures.
#[derive(Debug, Default)]
pub struct RunResult {
    pub stats: Vec<FileStats>,
    pub errors: Vec<(PathBuf, EngineError)>,
}
