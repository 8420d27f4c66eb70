// crates/engine/src/lib.rs
use rayon::prelude::*;
use std::path::PathBuf;

pub mod config;
pub mod error;
pub mod filesystem;
pub mod languages;
pub mod options;
pub mod processor;
pub mod stats;
pub mod summary;

use crate::config::Config;
use crate::error::Result;
use crate::stats::{FileStats, RunResult};
use line_stats_core::language::LanguageRegistry;

/// Run the line statistics engine.
///
/// Builds the language registry (built-ins plus `config.languages_file`),
/// then walks and scans every matching file.
///
/// # Errors
///
/// Returns an error if the registry cannot be built, and in strict mode on
/// the first file or walk error.
pub fn run(config: &Config) -> Result<RunResult> {
    let registry = languages::build_registry(config)?;
    run_with_registry(config, &registry)
}

/// Like [`run`] with an already-built registry.
///
/// The registry is only read, so every rayon worker shares it.
///
/// # Errors
///
/// See [`run`].
pub fn run_with_registry(config: &Config, registry: &LanguageRegistry) -> Result<RunResult> {
    let (tx, rx) = crossbeam_channel::bounded(1024);
    let (err_tx, err_rx) = std::sync::mpsc::channel();

    let walk_cfg = config.walk.clone();
    let filter_cfg = config.filter.clone();

    std::thread::spawn(move || {
        if let Err(e) = crate::filesystem::walk_parallel(&walk_cfg, &filter_cfg, &tx) {
            let _ = err_tx.send(e);
        }
    });

    let iter = rx.into_iter().par_bridge();

    let mut result = if config.strict {
        // Strict mode: fail on first error
        let stats = iter
            .map(|item| processor::process_file(item, registry))
            .collect::<Result<Vec<_>>>()?;
        RunResult {
            stats: stats.into_iter().flatten().collect(),
            errors: Vec::new(),
        }
    } else {
        let outcomes: Vec<(PathBuf, Result<Option<FileStats>>)> = iter
            .map(|item| {
                let path = item.0.clone();
                (path, processor::process_file(item, registry))
            })
            .collect();

        let mut result = RunResult::default();
        for (path, outcome) in outcomes {
            match outcome {
                Ok(Some(stats)) => result.stats.push(stats),
                Ok(None) => {}
                Err(e) => {
                    log::warn!("{e}");
                    result.errors.push((path, e));
                }
            }
        }
        result
    };

    // The walker thread has finished once the channel is drained.
    if let Ok(walk_err) = err_rx.try_recv() {
        if config.strict {
            return Err(walk_err);
        }
        result.errors.push((PathBuf::from("<walk>"), walk_err));
    }

    result.stats.sort_by(|a, b| a.path.cmp(&b.path));
    log::info!(
        "scanned {} file(s), {} error(s)",
        result.stats.len(),
        result.errors.len()
    );

    Ok(result)
}

/// Shorthand for tests and embedders: scan `roots` with default settings.
///
/// # Errors
///
/// See [`run`].
pub fn run_paths(roots: Vec<PathBuf>) -> Result<RunResult> {
    let config = Config {
        walk: config::WalkOptions {
            roots,
            ..config::WalkOptions::default()
        },
        ..Config::default()
    };
    run(&config)
}
