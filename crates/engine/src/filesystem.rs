use crate::config::{FilterConfig, WalkOptions};
use crate::error::{EngineError, Result};
use crossbeam_channel::Sender;
use ignore::WalkBuilder;
use std::path::PathBuf;

/// Parallel recursive directory walk.
///
/// Every regular file that passes the extension filter is sent on `tx`
/// together with its metadata. Entries that fail to read are logged and
/// skipped.
///
/// # Errors
///
/// Returns an error if a root does not exist or an override pattern is invalid.
pub fn walk_parallel(
    options: &WalkOptions,
    filters: &FilterConfig,
    tx: &Sender<(PathBuf, std::fs::Metadata)>,
) -> Result<()> {
    let Some((first, others)) = options.roots.split_first() else {
        return Ok(());
    };

    for root in &options.roots {
        if !root.exists() {
            return Err(EngineError::Config(format!(
                "path does not exist: {}",
                root.display()
            )));
        }
    }

    let mut builder = WalkBuilder::new(first);
    for root in others {
        builder.add(root);
    }

    builder
        .threads(options.threads)
        .hidden(!options.hidden)
        .git_ignore(options.git_ignore)
        .follow_links(options.follow_links)
        .max_depth(options.max_depth);

    // ignore supports a single Overrides per walker; excludes use the `!` prefix.
    if !options.override_include.is_empty() || !options.override_exclude.is_empty() {
        let mut ov_builder = ignore::overrides::OverrideBuilder::new(first);
        for ov in &options.override_include {
            ov_builder.add(ov)?;
        }
        for ov in &options.override_exclude {
            ov_builder.add(&format!("!{ov}"))?;
        }
        builder.overrides(ov_builder.build()?);
    }

    let filters = filters.clone();
    builder.filter_entry(move |entry| {
        if entry.file_type().is_some_and(|ft| ft.is_dir()) {
            return true;
        }
        filters.accepts_ext(entry.path().extension().and_then(|s| s.to_str()))
    });

    let walker = builder.build_parallel();
    walker.run(|| {
        let tx = tx.clone();
        Box::new(move |entry| {
            match entry {
                Ok(entry) if entry.file_type().is_some_and(|ft| ft.is_file()) => {
                    match entry.metadata() {
                        Ok(meta) => {
                            if tx.send((entry.path().to_owned(), meta)).is_err() {
                                return ignore::WalkState::Quit;
                            }
                        }
                        Err(e) => log::warn!("{}: {e}", entry.path().display()),
                    }
                }
                Ok(_) => {}
                Err(e) => log::warn!("walk: {e}"),
            }
            ignore::WalkState::Continue
        })
    });

    Ok(())
}
