use line_stats_core::BoundaryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Walk error: {0}")]
    Walk(#[from] ignore::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid definition for language '{name}': {source}")]
    Language {
        name: String,
        #[source]
        source: BoundaryError,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Invalid extension mapping: {0}")]
    InvalidExtMapping(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
