// crates/cli/src/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

use crate::options::{OutputFormat, OutputMode, SortSpec};
use crate::parsers::{parse_ext_mapping, parse_positive_usize, parse_usize_1_to_512};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "line_stats",
    version = crate::VERSION,
    about = "Per-language code, comment and blank line statistics"
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// Files or directories to scan (default: current directory)
    #[arg(value_hint = ValueHint::AnyPath)]
    pub paths: Vec<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "table", help_heading = "Output")]
    pub format: OutputFormat,

    /// Full listing or per-language summary only
    #[arg(long, value_enum, default_value = "full", help_heading = "Output")]
    pub mode: OutputMode,

    /// Sort keys, e.g. `code:desc,name` (lines, code, comment, blank, name, language)
    #[arg(long, help_heading = "Output")]
    pub sort: Option<SortSpec>,

    /// Show only the first N files
    #[arg(long, value_parser = parse_positive_usize, help_heading = "Output")]
    pub top: Option<usize>,

    /// Label language: en, zh-cn (default: from $LANG, falling back to en)
    #[arg(long, help_heading = "Output")]
    pub locale: Option<String>,

    /// Only these extensions (comma separated)
    #[arg(long, value_delimiter = ',', help_heading = "Filter")]
    pub ext: Vec<String>,

    /// Skip these extensions (comma separated)
    #[arg(long, value_delimiter = ',', help_heading = "Filter")]
    pub exclude_ext: Vec<String>,

    /// Scan extension FROM as TO, e.g. `--map-ext inc=c`
    #[arg(long = "map-ext", value_parser = parse_ext_mapping, help_heading = "Filter")]
    pub map_ext: Vec<(String, String)>,

    /// Extra language definitions (.json, .yaml or .yml)
    #[arg(long, value_hint = ValueHint::FilePath, help_heading = "Filter")]
    pub languages: Option<PathBuf>,

    /// Re-include patterns (gitignore syntax, comma separated)
    #[arg(long = "override-include", value_delimiter = ',', help_heading = "Scan")]
    pub override_include: Vec<String>,

    /// Exclude patterns (gitignore syntax, comma separated)
    #[arg(long = "override-exclude", value_delimiter = ',', help_heading = "Scan")]
    pub override_exclude: Vec<String>,

    /// Include hidden files and directories
    #[arg(long, help_heading = "Scan")]
    pub hidden: bool,

    /// Do not honour .gitignore
    #[arg(long, help_heading = "Scan")]
    pub no_gitignore: bool,

    /// Follow symbolic links
    #[arg(long, help_heading = "Scan")]
    pub follow: bool,

    /// Maximum directory depth
    #[arg(long, help_heading = "Scan")]
    pub max_depth: Option<usize>,

    /// Worker threads (default: number of CPUs)
    #[arg(short, long, value_parser = parse_usize_1_to_512, help_heading = "Scan")]
    pub jobs: Option<usize>,

    /// Stop at the first unreadable file
    #[arg(long, help_heading = "Behavior")]
    pub strict: bool,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, help_heading = "Behavior")]
    pub verbose: u8,

    /// Errors only
    #[arg(short, long, conflicts_with = "verbose", help_heading = "Behavior")]
    pub quiet: bool,
}

impl Args {
    /// Default log filter for the verbosity flags.
    #[must_use]
    pub const fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
