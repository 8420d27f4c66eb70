// crates/cli/src/lib.rs
// 依存関係の推移的依存により複数のバージョンが混在するための抑制
#![allow(clippy::multiple_crate_versions)]

pub mod args;
pub mod config;
pub mod error;
pub mod locale;
pub mod options;
pub mod parsers;
pub mod presentation;

use crate::config::Config;
use crate::error::Result;
use crate::locale::Locale;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Scans with `config` and prints the report.
///
/// Errors collected in lenient mode are listed on stderr.
///
/// # Errors
///
/// Returns [`error::AppError::Engine`] when the engine fails (strict mode,
/// bad language file) and an output error if the report cannot be written.
pub fn run(config: &Config, locale: Locale) -> Result<()> {
    let result = line_stats_engine::run(config)?;
    for (path, err) in &result.errors {
        eprintln!("Error processing {}: {err}", path.display());
    }
    presentation::print_results(&result.stats, config, locale)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WalkOptions;
    use crate::error::AppError;
    use line_stats_engine::error::EngineError;
    use std::path::PathBuf;

    #[test]
    fn test_run_strict_missing_root_is_engine_error() {
        let config = Config {
            walk: WalkOptions {
                roots: vec![PathBuf::from("/no/such/path/for/line_stats")],
                ..WalkOptions::default()
            },
            strict: true,
            ..Config::default()
        };
        let err = run(&config, Locale::EN).unwrap_err();
        assert!(matches!(err, AppError::Engine(EngineError::Config(_))));
    }
}
