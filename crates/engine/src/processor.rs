use crate::error::{EngineError, Result};
use crate::stats::FileStats;
use line_stats_core::counts::LineCounts;
use line_stats_core::language::{Language, LanguageRegistry};
use line_stats_core::scanner::LineScanner;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

/// Process a single file and return its statistics.
///
/// Returns `Ok(None)` for files no registered language claims and for binary
/// files (a NUL byte in the first buffer).
///
/// # Errors
///
/// Returns [`EngineError::FileRead`] if the file cannot be opened or read.
pub fn process_file(
    (path, meta): (PathBuf, std::fs::Metadata),
    registry: &LanguageRegistry,
) -> Result<Option<FileStats>> {
    let ext = path.extension().and_then(|s| s.to_str()).unwrap_or("");
    let Some(language) = registry.for_extension(ext) else {
        log::debug!("skipping {}: no language for extension {ext:?}", path.display());
        return Ok(None);
    };

    let file = File::open(&path).map_err(|e| EngineError::FileRead {
        path: path.clone(),
        source: e,
    })?;
    let mut reader = BufReader::new(file);

    {
        let buffer = reader.fill_buf().map_err(|e| EngineError::FileRead {
            path: path.clone(),
            source: e,
        })?;
        if buffer.contains(&0) {
            log::debug!("skipping {}: binary content", path.display());
            return Ok(None);
        }
    }

    let counts = process_reader(&mut reader, language).map_err(|e| EngineError::FileRead {
        path: path.clone(),
        source: e,
    })?;

    log::trace!("{} [{}]: {counts:?}", path.display(), language.name());

    let mut stats = FileStats::new(path, language.name());
    stats.size = meta.len();
    stats.counts = counts;
    Ok(Some(stats))
}

/// Classifies every line read from `reader`.
///
/// Invalid UTF-8 is replaced lossily; `\n` and `\r\n` terminators are
/// stripped before a line reaches the scanner.
///
/// # Errors
///
/// Propagates read errors from `reader`.
pub fn process_reader<R: BufRead>(reader: &mut R, language: &Language) -> std::io::Result<LineCounts> {
    let mut scanner = LineScanner::new(language);
    let mut counts = LineCounts::new();
    let mut line_buf = Vec::new();

    loop {
        line_buf.clear();
        if reader.read_until(b'\n', &mut line_buf)? == 0 {
            break;
        }

        let cow = String::from_utf8_lossy(&line_buf);
        let text: &str = &cow;
        let line = text.strip_suffix('\n').unwrap_or(text);
        let line = line.strip_suffix('\r').unwrap_or(line);
        counts.record(scanner.classify(line));
    }

    Ok(counts)
}
