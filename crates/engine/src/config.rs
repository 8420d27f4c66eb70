use crate::options::{OutputFormat, OutputMode, SortKey};
use derive_builder::Builder;
use std::path::PathBuf;

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct WalkOptions {
    #[builder(default)]
    pub roots: Vec<PathBuf>,
    #[builder(default = "1")]
    pub threads: usize,
    #[builder(default)]
    pub hidden: bool,
    #[builder(default = "true")]
    pub git_ignore: bool,
    #[builder(default)]
    pub max_depth: Option<usize>,
    #[builder(default)]
    pub follow_links: bool,
    #[builder(default)]
    pub override_include: Vec<String>,
    #[builder(default)]
    pub override_exclude: Vec<String>,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            roots: vec![],
            threads: 1,
            hidden: false,
            git_ignore: true,
            max_depth: None,
            follow_links: false,
            override_include: vec![],
            override_exclude: vec![],
        }
    }
}

#[derive(Debug, Clone, Default, Builder)]
#[builder(setter(into))]
pub struct FilterConfig {
    #[builder(default)]
    pub allow_ext: Vec<String>,
    #[builder(default)]
    pub deny_ext: Vec<String>,
    /// `from -> to`: files with extension `from` are scanned as `to`.
    #[builder(default)]
    pub map_ext: hashbrown::HashMap<String, String>,
}

impl FilterConfig {
    /// Whether a file with this extension passes the allow/deny lists.
    #[must_use]
    pub fn accepts_ext(&self, ext: Option<&str>) -> bool {
        let Some(ext) = ext else {
            return self.allow_ext.is_empty();
        };
        if self.deny_ext.iter().any(|e| e.eq_ignore_ascii_case(ext)) {
            return false;
        }
        self.allow_ext.is_empty() || self.allow_ext.iter().any(|e| e.eq_ignore_ascii_case(ext))
    }
}

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    #[builder(default)]
    pub walk: WalkOptions,
    #[builder(default)]
    pub filter: FilterConfig,

    #[builder(default = "OutputFormat::Table")]
    pub format: OutputFormat,
    #[builder(default)]
    pub output_mode: OutputMode,
    #[builder(default)]
    pub sort: Vec<(SortKey, bool)>,
    #[builder(default)]
    pub top_n: Option<usize>,

    /// JSON or YAML file with extra language definitions.
    #[builder(default)]
    pub languages_file: Option<PathBuf>,

    #[builder(default)]
    pub strict: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            walk: WalkOptions::default(),
            filter: FilterConfig::default(),
            format: OutputFormat::Table,
            output_mode: OutputMode::default(),
            sort: vec![],
            top_n: None,
            languages_file: None,
            strict: false,
        }
    }
}
