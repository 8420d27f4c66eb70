//! Per-language aggregation: files, line totals, and the average, largest
//! and smallest file in lines.

use crate::stats::FileStats;
use hashbrown::HashMap;
use line_stats_core::LineCounts;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageSummary {
    pub language: String,
    pub files: usize,
    #[serde(flatten)]
    pub counts: LineCounts,
    pub avg: f64,
    pub max: usize,
    pub min: usize,
}

impl LanguageSummary {
    fn from_files<'a>(language: &str, files: impl IntoIterator<Item = &'a FileStats>) -> Self {
        let mut summary = Self {
            language: language.to_string(),
            files: 0,
            counts: LineCounts::default(),
            avg: 0.0,
            max: 0,
            min: 0,
        };
        for file in files {
            let lines = file.counts.lines;
            summary.min = if summary.files == 0 {
                lines
            } else {
                summary.min.min(lines)
            };
            summary.max = summary.max.max(lines);
            summary.files += 1;
            summary.counts += file.counts;
        }
        if summary.files > 0 {
            #[allow(clippy::cast_precision_loss)]
            let avg = summary.counts.lines as f64 / summary.files as f64;
            summary.avg = avg;
        }
        summary
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Sorted by total lines, largest first.
    pub languages: Vec<LanguageSummary>,
    pub total: LanguageSummary,
}

/// Groups file statistics by language.
#[must_use]
pub fn summarize(stats: &[FileStats]) -> Summary {
    let mut groups: HashMap<&str, Vec<&FileStats>> = HashMap::new();
    for file in stats {
        groups.entry(file.language.as_str()).or_default().push(file);
    }

    let mut languages: Vec<LanguageSummary> = groups
        .into_iter()
        .map(|(language, files)| LanguageSummary::from_files(language, files))
        .collect();
    languages.sort_by(|a, b| {
        b.counts
            .lines
            .cmp(&a.counts.lines)
            .then_with(|| a.language.cmp(&b.language))
    });

    Summary {
        languages,
        total: LanguageSummary::from_files("sum", stats),
    }
}
