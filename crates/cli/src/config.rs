// crates/cli/src/config.rs
use crate::args::Args;
use crate::error::AppError;
use crate::options;
pub use line_stats_engine::config::{
    Config, ConfigBuilder, FilterConfig, FilterConfigBuilder, WalkOptions, WalkOptionsBuilder,
};
use line_stats_engine::options as engine_options;
use std::path::PathBuf;

impl TryFrom<Args> for Config {
    type Error = AppError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let walk = walk_options_from_args(&args)?;
        let filter = filter_config_from_args(&args)?;

        let format: engine_options::OutputFormat = args.format.into();
        let output_mode: engine_options::OutputMode = args.mode.into();

        ConfigBuilder::default()
            .walk(walk)
            .filter(filter)
            .format(format)
            .output_mode(output_mode)
            .sort(args.sort.map(|s| s.0).unwrap_or_default())
            .top_n(args.top)
            .languages_file(args.languages)
            .strict(args.strict)
            .build()
            .map_err(|e| AppError::Config(e.to_string()))
    }
}

fn walk_options_from_args(args: &Args) -> Result<WalkOptions, AppError> {
    let roots = if args.paths.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        args.paths.clone()
    };

    WalkOptionsBuilder::default()
        .roots(roots)
        .threads(args.jobs.unwrap_or_else(num_cpus::get))
        .hidden(args.hidden)
        .git_ignore(!args.no_gitignore)
        .max_depth(args.max_depth)
        .follow_links(args.follow)
        .override_include(args.override_include.clone())
        .override_exclude(args.override_exclude.clone())
        .build()
        .map_err(|e| AppError::Config(e.to_string()))
}

fn filter_config_from_args(args: &Args) -> Result<FilterConfig, AppError> {
    let map_ext: hashbrown::HashMap<String, String> = args.map_ext.iter().cloned().collect();
    let strip = |exts: &[String]| -> Vec<String> {
        exts.iter()
            .map(|e| e.trim().trim_start_matches('.').to_string())
            .filter(|e| !e.is_empty())
            .collect()
    };

    FilterConfigBuilder::default()
        .allow_ext(strip(&args.ext))
        .deny_ext(strip(&args.exclude_ext))
        .map_ext(map_ext)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))
}

// From trait implementations for CLI -> Engine enum conversion

macro_rules! map_enum {
    ($from:ty, $to:ty, $($variant:ident),+ $(,)?) => {
        impl From<$from> for $to {
            fn from(f: $from) -> Self {
                match f {
                    $( <$from>::$variant => <$to>::$variant, )+
                }
            }
        }
    };
}

map_enum!(
    options::OutputFormat,
    engine_options::OutputFormat,
    Table,
    Csv,
    Json,
    Yaml
);
map_enum!(
    options::OutputMode,
    engine_options::OutputMode,
    Full,
    Summary
);
