//! Per-file processing: read, classify, rewrite in place

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::dialect::Dialect;
use crate::header::{self, SkipReason, Verdict};

use super::{Outcome, RewriteError, Rewriter};

/// Rewrite one file's header and report what happened.
///
/// The file is read fully into memory and written back in a single call, so
/// a failure either leaves the original in place or surfaces as an error;
/// partially rewritten content is never left behind silently.
pub(super) fn process(
    rewriter: &Rewriter,
    path: &Path,
    dialect: Dialect,
) -> Result<Outcome, RewriteError> {
    let content = fs::read_to_string(path).map_err(|source| RewriteError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let lines: Vec<&str> = content.lines().collect();

    let scan = header::scan(
        &lines,
        dialect,
        &rewriter.program_name,
        &rewriter.copyright_holders,
    );

    let body = match scan.verdict {
        Verdict::Skip(reason) => {
            log_skip(path, reason);
            return Ok(Outcome::Skipped);
        }
        Verdict::Missing => &lines[..],
        Verdict::Present { body_start } => &lines[body_start..],
    };

    let output = header::render_file(
        dialect,
        &scan.program_name,
        &scan.copyright_holders,
        &rewriter.license,
        body,
    );
    fs::write(path, output).map_err(|source| RewriteError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(match scan.verdict {
        Verdict::Missing => Outcome::Added,
        _ => Outcome::Changed,
    })
}

fn log_skip(path: &Path, reason: SkipReason) {
    match reason {
        SkipReason::MissingDefaults => debug!("{}: {reason}", path.display()),
        SkipReason::MalformedHeader | SkipReason::UnclosedComment => {
            warn!("{}: {reason}", path.display());
        }
    }
}
