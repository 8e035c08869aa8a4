//! Rewriter module: Directory walk and in-place header rewriting
//!
//! Owns the run configuration (root, dialect priority order, license body,
//! defaults, reporting flags), drives the depth-first walk and rewrites
//! every recognized file.

mod file;
mod walk;

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::dialect::Dialect;
use crate::license::LicenseText;

// ===== Errors and outcomes =====

/// Errors raised while listing directories or rewriting files
#[derive(Debug, Error)]
pub enum RewriteError {
    #[error("cannot list {}: {source}", .path.display())]
    List { path: PathBuf, source: io::Error },

    #[error("cannot read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("cannot write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
}

/// Per-file processing outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The file had no header and received a fresh one
    Added,
    /// An existing header was replaced
    Changed,
    /// The file was left untouched
    Skipped,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Added => write!(f, "License added"),
            Self::Changed => write!(f, "License changed"),
            Self::Skipped => write!(f, "No license added"),
        }
    }
}

/// Counters for one complete run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Files that received a fresh header
    pub added: usize,
    /// Files whose existing header was replaced
    pub changed: usize,
    /// Files deliberately left untouched
    pub skipped: usize,
    /// Files and directories the walk could not read or write
    pub failed: usize,
}

impl RunSummary {
    /// Files that were recognized and fully classified
    #[must_use]
    pub fn processed(&self) -> usize {
        self.added + self.changed + self.skipped
    }

    pub(crate) fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Added => self.added += 1,
            Outcome::Changed => self.changed += 1,
            Outcome::Skipped => self.skipped += 1,
        }
    }
}

// ===== Rewriter =====

/// Recursive license header rewriter for one directory tree
///
/// Configuration is immutable once the run starts; per-file scratch state
/// never outlives a single file.
#[derive(Debug)]
pub struct Rewriter {
    root: PathBuf,
    dialects: Vec<Dialect>,
    license: LicenseText,
    program_name: String,
    copyright_holders: String,
    verbose: bool,
    list: bool,
}

impl Rewriter {
    /// Create a rewriter for `root` with all built-in dialects enabled
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, license: LicenseText) -> Self {
        Self {
            root: root.into(),
            dialects: Dialect::ALL.to_vec(),
            license,
            program_name: String::new(),
            copyright_holders: String::new(),
            verbose: false,
            list: false,
        }
    }

    /// Restrict matching to `dialects`, in priority order
    #[must_use]
    pub fn with_dialects(mut self, dialects: Vec<Dialect>) -> Self {
        self.dialects = dialects;
        self
    }

    /// Program name used when a file has no header to take one from
    #[must_use]
    pub fn with_program_name(mut self, name: impl Into<String>) -> Self {
        self.program_name = name.into();
        self
    }

    /// Copyright holders used when a file has no header to take them from
    #[must_use]
    pub fn with_copyright(mut self, copyright: impl Into<String>) -> Self {
        self.copyright_holders = copyright.into();
        self
    }

    /// Report every outcome instead of just the interesting file names
    #[must_use]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// In quiet mode, also report files whose header was replaced
    #[must_use]
    pub fn with_list(mut self, list: bool) -> Self {
        self.list = list;
        self
    }

    /// Walk the tree and rewrite every recognized file
    ///
    /// `report` receives one line per reportable file: in verbose mode every
    /// outcome as `<name> : <outcome>`, otherwise the bare names of newly
    /// licensed files, plus changed files when listing is enabled.
    ///
    /// # Errors
    /// Fails only when the root directory itself cannot be listed. Problems
    /// below the root are logged, counted as failed and skipped over.
    pub fn run<F>(&self, mut report: F) -> Result<RunSummary, RewriteError>
    where
        F: FnMut(&str),
    {
        let mut summary = RunSummary::default();
        walk::process_dir(self, &self.root, &mut summary, &mut report)?;
        Ok(summary)
    }

    /// The report line for one outcome, or `None` when the current
    /// verbosity suppresses it
    pub(crate) fn report_line(&self, path: &Path, outcome: Outcome) -> Option<String> {
        let name = path.file_name()?.to_string_lossy();
        if self.verbose {
            return Some(format!("{name} : {outcome}"));
        }
        match outcome {
            Outcome::Added => Some(name.into_owned()),
            Outcome::Changed if self.list => Some(name.into_owned()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests;
