//! License module: The body text written into every header
//!
//! The license file is read once per run and reused for every rewritten file.

use std::fs;
use std::io;
use std::path::Path;

/// License body lines, without terminators
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseText {
    lines: Vec<String>,
}

impl LicenseText {
    /// Read the license body from `path`
    ///
    /// # Errors
    /// Returns the underlying I/O error when the file cannot be read. The
    /// caller treats this as fatal since no file can be rewritten without it.
    pub fn load(path: &Path) -> io::Result<Self> {
        Ok(Self::from_content(&fs::read_to_string(path)?))
    }

    /// Build the license body from raw text
    ///
    /// Both `\n` and `\r\n` terminators are understood. Fully empty trailing
    /// lines are dropped so the rendered header never ends in bare markers.
    #[must_use]
    pub fn from_content(content: &str) -> Self {
        let mut lines: Vec<String> = content.lines().map(str::to_string).collect();
        while lines.last().is_some_and(String::is_empty) {
            lines.pop();
        }
        Self { lines }
    }

    /// The body lines, in order
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    /// Number of body lines
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the body has no lines at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
