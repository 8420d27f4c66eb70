//! User-supplied language definitions.
//!
//! A definitions file is a JSON or YAML list:
//!
//! ```yaml
//! - name: Pascal-ish
//!   extensions: [pas]
//!   line_comment: ["//"]
//!   block_comment:
//!     - { begin: "{", end: "}" }
//!   strings:
//!     - { begin: "'" }
//! ```
//!
//! Every matcher is built while the file is loaded, so a bad definition
//! stops the run before any file is scanned.

use crate::config::Config;
use crate::error::{EngineError, Result};
use line_stats_core::BoundaryError;
use line_stats_core::boundary::{BlockCommentMatcher, LineCommentMatcher, StringMatcher};
use line_stats_core::language::{Language, LanguageRegistry};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageSpec {
    pub name: String,
    pub extensions: Vec<String>,
    #[serde(default)]
    pub line_comment: Vec<String>,
    #[serde(default)]
    pub block_comment: Vec<DelimiterPair>,
    #[serde(default)]
    pub strings: Vec<StringSpec>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelimiterPair {
    pub begin: String,
    pub end: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringSpec {
    pub begin: String,
    /// Defaults to `begin`.
    #[serde(default)]
    pub end: Option<String>,
    #[serde(default)]
    pub escape: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecFormat {
    Json,
    Yaml,
}

impl SpecFormat {
    /// Picks the format from the file extension.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Config`] for anything other than `.json`, `.yaml` or `.yml`.
    pub fn from_path(path: &Path) -> Result<Self> {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("json") => Ok(Self::Json),
            Some("yaml" | "yml") => Ok(Self::Yaml),
            _ => Err(EngineError::Config(format!(
                "language definitions must be .json, .yaml or .yml: {}",
                path.display()
            ))),
        }
    }
}

impl LanguageSpec {
    /// Builds the matcher set.
    ///
    /// # Errors
    ///
    /// - [`EngineError::Config`] if the name or the extensions are empty
    /// - [`EngineError::Language`] if a delimiter is empty or a string's escape
    ///   is not a single character
    pub fn build(&self) -> Result<Language> {
        if self.name.trim().is_empty() {
            return Err(EngineError::Config("language name must not be empty".into()));
        }
        if self.extensions.is_empty() {
            return Err(self.invalid("no extensions"));
        }

        let extensions: Vec<&str> = self
            .extensions
            .iter()
            .map(|e| e.trim_start_matches('.'))
            .collect();
        let mut language = Language::new(&self.name, &extensions);

        for marker in &self.line_comment {
            let matcher = LineCommentMatcher::try_new(marker).map_err(|e| self.rejected(e))?;
            language = language.with_matcher(matcher);
        }
        for pair in &self.block_comment {
            let matcher = BlockCommentMatcher::try_new(&pair.begin, &pair.end)
                .map_err(|e| self.rejected(e))?;
            language = language.with_matcher(matcher);
        }
        for string in &self.strings {
            let end = string.end.as_deref().unwrap_or(&string.begin);
            let matcher = StringMatcher::new(&string.begin, end, string.escape.as_deref())
                .map_err(|e| self.rejected(e))?;
            language = language.with_matcher(matcher);
        }

        Ok(language)
    }

    fn rejected(&self, source: BoundaryError) -> EngineError {
        EngineError::Language {
            name: self.name.clone(),
            source,
        }
    }

    fn invalid(&self, what: &str) -> EngineError {
        EngineError::Config(format!("language '{}': {what}", self.name))
    }
}

/// Parses definitions from text.
///
/// # Errors
///
/// Returns a parse error, or the first definition that fails to build.
pub fn parse_languages(text: &str, format: SpecFormat) -> Result<Vec<Language>> {
    let specs: Vec<LanguageSpec> = match format {
        SpecFormat::Json => serde_json::from_str(text)?,
        SpecFormat::Yaml => serde_yaml::from_str(text)?,
    };
    specs.iter().map(LanguageSpec::build).collect()
}

/// Reads and builds definitions from a `.json`/`.yaml` file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or a definition is invalid.
pub fn load_languages(path: &Path) -> Result<Vec<Language>> {
    let format = SpecFormat::from_path(path)?;
    let text = std::fs::read_to_string(path).map_err(|source| EngineError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let languages = parse_languages(&text, format)?;
    log::info!(
        "loaded {} language definition(s) from {}",
        languages.len(),
        path.display()
    );
    Ok(languages)
}

/// Built-in languages, then the user's definitions, then extension aliases.
///
/// # Errors
///
/// Fails if the definitions file is invalid or an alias is malformed.
pub fn build_registry(config: &Config) -> Result<LanguageRegistry> {
    let mut registry = LanguageRegistry::with_builtins();

    if let Some(path) = &config.languages_file {
        for language in load_languages(path)? {
            log::debug!("registering language '{}'", language.name());
            registry.register(language);
        }
    }

    for (from, to) in &config.filter.map_ext {
        if from.is_empty() || to.is_empty() {
            return Err(EngineError::InvalidExtMapping(format!("{from}={to}")));
        }
        registry.add_alias(from, to);
    }

    Ok(registry)
}
