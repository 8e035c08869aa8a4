//! Depth-first directory walk with the per-directory dialect cache

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::dialect::{self, Dialect};

use super::{file, RewriteError, Rewriter, RunSummary};

/// Process one directory listing, recursing into subdirectories.
///
/// Entries are visited in name order so runs are deterministic regardless of
/// filesystem ordering. The one-slot dialect cache starts empty for every
/// directory: consecutive files in one listing are usually the same
/// language, but a parent directory says nothing about its children.
pub(super) fn process_dir<F>(
    rewriter: &Rewriter,
    dir: &Path,
    summary: &mut RunSummary,
    report: &mut F,
) -> Result<(), RewriteError>
where
    F: FnMut(&str),
{
    let reader = fs::read_dir(dir).map_err(|source| RewriteError::List {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut entries: Vec<fs::DirEntry> = Vec::new();
    for entry in reader {
        match entry {
            Ok(entry) => entries.push(entry),
            Err(source) => {
                warn!("Skipping unreadable entry in {}: {source}", dir.display());
                summary.failed += 1;
            }
        }
    }
    entries.sort_by_key(fs::DirEntry::file_name);

    let mut last_dialect: Option<Dialect> = None;
    for entry in entries {
        let path = entry.path();
        let file_type = match entry.file_type() {
            Ok(file_type) => file_type,
            Err(source) => {
                warn!("Cannot stat {}: {source}", path.display());
                summary.failed += 1;
                continue;
            }
        };
        if file_type.is_symlink() {
            debug!("Skipping symlink {}", path.display());
        } else if file_type.is_dir() {
            if let Err(error) = process_dir(rewriter, &path, summary, report) {
                warn!("{error}");
                summary.failed += 1;
            }
        } else if file_type.is_file() {
            process_entry(rewriter, &path, &mut last_dialect, summary, report);
        }
    }

    Ok(())
}

/// Resolve a dialect for one file and rewrite it. Files no dialect claims
/// are not source files and pass by silently.
fn process_entry<F>(
    rewriter: &Rewriter,
    path: &Path,
    last_dialect: &mut Option<Dialect>,
    summary: &mut RunSummary,
    report: &mut F,
) where
    F: FnMut(&str),
{
    let Some(selected) = dialect::select(path, &rewriter.dialects, *last_dialect) else {
        debug!("No dialect accepts {}", path.display());
        return;
    };
    *last_dialect = Some(selected);

    match file::process(rewriter, path, selected) {
        Ok(outcome) => {
            debug!("{} : {outcome}", path.display());
            summary.record(outcome);
            if let Some(line) = rewriter.report_line(path, outcome) {
                report(&line);
            }
        }
        Err(error) => {
            warn!("{error}");
            summary.failed += 1;
        }
    }
}
