use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
    Yaml,
}

/// Output mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputMode {
    /// Every file followed by the per-language summary
    #[default]
    Full,
    /// Per-language summary only
    Summary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    Lines,
    Code,
    Comment,
    Blank,
    Name,
    Language,
}

pub fn parse_sort_key(key_str: &str) -> Result<SortKey, String> {
    match key_str.to_ascii_lowercase().as_str() {
        "lines" => Ok(SortKey::Lines),
        "code" => Ok(SortKey::Code),
        "comment" | "comments" => Ok(SortKey::Comment),
        "blank" => Ok(SortKey::Blank),
        "name" => Ok(SortKey::Name),
        "language" | "lang" => Ok(SortKey::Language),
        other => Err(format!("Unknown sort key: {other}")),
    }
}
