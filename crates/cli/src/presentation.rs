// crates/cli/src/presentation.rs
use crate::error::Result;
use crate::locale::Locale;
use comfy_table::{Cell, CellAlignment, Table, presets};
use line_stats_engine::config::Config;
use line_stats_engine::options::{OutputFormat, OutputMode, SortKey};
use line_stats_engine::stats::FileStats;
use line_stats_engine::summary::{LanguageSummary, Summary, summarize};
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt::Write as _;
use std::io;

/// Machine-readable report for JSON and YAML output.
#[derive(Debug, Serialize)]
struct Report<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    files: Option<&'a [FileStats]>,
    summary: &'a Summary,
}

/// Prints the rendered report to stdout.
///
/// # Errors
///
/// See [`write_results`].
pub fn print_results(stats: &[FileStats], config: &Config, locale: Locale) -> Result<()> {
    write_results(&mut io::stdout().lock(), stats, config, locale)
}

/// Renders the report into `out`.
///
/// # Errors
///
/// Returns a serialization error for JSON or YAML output, or the writer's
/// IO error.
pub fn write_results<W: io::Write>(
    out: &mut W,
    stats: &[FileStats],
    config: &Config,
    locale: Locale,
) -> Result<()> {
    out.write_all(render(stats, config, locale)?.as_bytes())?;
    out.flush()?;
    Ok(())
}

/// Renders the whole output as a string.
///
/// # Errors
///
/// Returns a serialization error for JSON or YAML output.
pub fn render(stats: &[FileStats], config: &Config, locale: Locale) -> Result<String> {
    let summary = summarize(stats);
    let files = sorted_files(stats, config);
    let files = match config.output_mode {
        OutputMode::Full => Some(files.as_slice()),
        OutputMode::Summary => None,
    };

    let out = match config.format {
        OutputFormat::Json => {
            let report = Report {
                files,
                summary: &summary,
            };
            let mut json = serde_json::to_string_pretty(&report)?;
            json.push('\n');
            json
        }
        OutputFormat::Yaml => serde_yaml::to_string(&Report {
            files,
            summary: &summary,
        })?,
        OutputFormat::Csv => render_csv(files, &summary),
        OutputFormat::Table => render_table(files, &summary, locale),
    };
    Ok(out)
}

fn sorted_files(stats: &[FileStats], config: &Config) -> Vec<FileStats> {
    let mut stats = stats.to_vec();
    if !config.sort.is_empty() {
        stats.sort_by(|a, b| {
            for (key, desc) in &config.sort {
                let order = match key {
                    SortKey::Lines => a.counts.lines.cmp(&b.counts.lines),
                    SortKey::Code => a.counts.code.cmp(&b.counts.code),
                    SortKey::Comment => a.counts.comment.cmp(&b.counts.comment),
                    SortKey::Blank => a.counts.blank.cmp(&b.counts.blank),
                    SortKey::Name => a.name.cmp(&b.name),
                    SortKey::Language => a.language.cmp(&b.language),
                };
                if order != Ordering::Equal {
                    return if *desc { order.reverse() } else { order };
                }
            }
            Ordering::Equal
        });
    }
    if let Some(n) = config.top_n {
        stats.truncate(n);
    }
    stats
}

fn right(value: impl ToString) -> Cell {
    Cell::new(value.to_string()).set_alignment(CellAlignment::Right)
}

fn render_table(files: Option<&[FileStats]>, summary: &Summary, locale: Locale) -> String {
    let l = locale.labels();
    let mut out = String::new();

    if summary.total.files == 0 {
        let _ = writeln!(out, "{}", l.none_project);
        return out;
    }

    if let Some(files) = files {
        let mut table = Table::new();
        table.load_preset(presets::UTF8_FULL).set_header(vec![
            l.path, l.language, l.lines, l.code, l.comment, l.blank,
        ]);
        for f in files {
            table.add_row(vec![
                Cell::new(f.path.display()),
                Cell::new(&f.language),
                right(f.counts.lines),
                right(f.counts.code),
                right(f.counts.comment),
                right(f.counts.blank),
            ]);
        }
        let _ = writeln!(out, "{table}");
        out.push('\n');
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL).set_header(vec![
        l.language, l.files, l.lines, l.code, l.comment, l.blank, l.avg, l.max, l.min,
    ]);
    for lang in &summary.languages {
        table.add_row(summary_row(&lang.language, lang));
    }
    table.add_row(summary_row(l.sum, &summary.total));

    let _ = writeln!(out, "{}", l.statistic);
    let _ = writeln!(out, "{table}");
    out
}

fn summary_row(label: &str, s: &LanguageSummary) -> Vec<Cell> {
    vec![
        Cell::new(label),
        right(s.files),
        right(s.counts.lines),
        right(s.counts.code),
        right(s.counts.comment),
        right(s.counts.blank),
        right(format!("{:.1}", s.avg)),
        right(s.max),
        right(s.min),
    ]
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// File rows (full mode only), then a blank line and the language summary.
fn render_csv(files: Option<&[FileStats]>, summary: &Summary) -> String {
    let mut out = String::new();
    if let Some(files) = files {
        out.push_str("path,language,lines,code,comment,blank\n");
        for f in files {
            let _ = writeln!(
                out,
                "{},{},{},{},{},{}",
                csv_field(&f.path.display().to_string()),
                csv_field(&f.language),
                f.counts.lines,
                f.counts.code,
                f.counts.comment,
                f.counts.blank
            );
        }
        out.push('\n');
    }

    out.push_str("language,files,lines,code,comment,blank,avg,max,min\n");
    for s in summary.languages.iter().chain(std::iter::once(&summary.total)) {
        let _ = writeln!(
            out,
            "{},{},{},{},{},{},{:.2},{},{}",
            csv_field(&s.language),
            s.files,
            s.counts.lines,
            s.counts.code,
            s.counts.comment,
            s.counts.blank,
            s.avg,
            s.max,
            s.min
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use line_stats_core::LineCounts;
    use std::path::PathBuf;

    fn file(path: &str, language: &str, code: usize, comment: usize) -> FileStats {
        let mut stats = FileStats::new(PathBuf::from(path), language);
        stats.counts = LineCounts {
            lines: code + comment,
            code,
            comment,
            blank: 0,
        };
        stats
    }

    fn sample() -> Vec<FileStats> {
        vec![file("a.rs", "Rust", 3, 1), file("b.py", "Python", 10, 0)]
    }

    #[test]
    fn test_table_contains_files_and_summary() {
        let out = render(&sample(), &Config::default(), Locale::EN).unwrap();
        assert!(out.contains("a.rs"));
        assert!(out.contains("Python"));
        assert!(out.contains("statistic"));
        assert!(out.contains("sum"));
    }

    #[test]
    fn test_table_uses_locale() {
        let config = Config {
            output_mode: OutputMode::Summary,
            ..Config::default()
        };
        let out = render(&sample(), &config, Locale::ZH_CN).unwrap();
        assert!(out.contains("项目统计"));
        assert!(out.contains("总计"));
        assert!(!out.contains("a.rs"));
    }

    #[test]
    fn test_empty_table() {
        let out = render(&[], &Config::default(), Locale::EN).unwrap();
        assert_eq!(out.trim(), "no files to count");
    }

    #[test]
    fn test_json_report() {
        let config = Config {
            format: OutputFormat::Json,
            ..Config::default()
        };
        let out = render(&sample(), &config, Locale::EN).unwrap();
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["files"].as_array().map(Vec::len), Some(2));
        assert_eq!(v["summary"]["total"]["lines"], 14);
        assert_eq!(v["summary"]["languages"][0]["language"], "Python");
    }

    #[test]
    fn test_json_summary_mode_omits_files() {
        let config = Config {
            format: OutputFormat::Json,
            output_mode: OutputMode::Summary,
            ..Config::default()
        };
        let out = render(&sample(), &config, Locale::EN).unwrap();
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert!(v.get("files").is_none());
    }

    #[test]
    fn test_csv_sorted_and_top() {
        let config = Config {
            format: OutputFormat::Csv,
            sort: vec![(SortKey::Code, true)],
            top_n: Some(1),
            ..Config::default()
        };
        let out = render(&sample(), &config, Locale::EN).unwrap();
        let lines: Vec<&str> = out.lines().take(3).collect();
        assert_eq!(
            lines,
            ["path,language,lines,code,comment,blank", "b.py,Python,10,10,0,0", ""]
        );
    }

    #[test]
    fn test_csv_full_includes_summary() {
        let config = Config {
            format: OutputFormat::Csv,
            ..Config::default()
        };
        let out = render(&sample(), &config, Locale::EN).unwrap();
        let (files, summary) = out.split_once("\n\n").unwrap();
        assert_eq!(files.lines().count(), 3);
        assert_eq!(
            summary.lines().collect::<Vec<_>>(),
            [
                "language,files,lines,code,comment,blank,avg,max,min",
                "Python,1,10,10,0,0,10.00,10,10",
                "Rust,1,4,3,1,0,4.00,4,4",
                "sum,2,14,13,1,0,7.00,10,4",
            ]
        );
    }

    #[test]
    fn test_csv_summary_mode_has_no_file_rows() {
        let config = Config {
            format: OutputFormat::Csv,
            output_mode: OutputMode::Summary,
            ..Config::default()
        };
        let out = render(&sample(), &config, Locale::EN).unwrap();
        assert!(out.starts_with("language,files,"));
        assert!(!out.contains("a.rs"));
    }

    struct ClosedPipe;

    impl io::Write for ClosedPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_results() {
        let mut buf = Vec::new();
        write_results(&mut buf, &sample(), &Config::default(), Locale::EN).unwrap();
        assert!(String::from_utf8(buf).unwrap().contains("a.rs"));

        let err = write_results(&mut ClosedPipe, &sample(), &Config::default(), Locale::EN)
            .unwrap_err();
        assert!(matches!(err, AppError::Io(e) if e.kind() == io::ErrorKind::BrokenPipe));
    }

    #[test]
    fn test_csv_field_quoting() {
        assert_eq!(csv_field("plain"), "plain");
        assert_eq!(csv_field("a,b"), "\"a,b\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_yaml_report() {
        let config = Config {
            format: OutputFormat::Yaml,
            ..Config::default()
        };
        let out = render(&sample(), &config, Locale::EN).unwrap();
        assert!(out.contains("summary:"));
        assert!(out.contains("language: Rust"));
    }
}
