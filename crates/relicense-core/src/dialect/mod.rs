//! Dialect module: Comment syntax and file acceptance per language
//!
//! A dialect bundles the block-comment syntax used for license headers in one
//! source language with the predicate deciding which files belong to it.

use std::path::Path;

/// A source language with its header comment syntax
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    Java,
    Cpp,
    Rust,
}

impl Dialect {
    /// All built-in dialects, in default priority order
    pub const ALL: [Self; 3] = [Self::Java, Self::Cpp, Self::Rust];

    /// Look up a dialect by name, ignoring case
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "java" => Some(Self::Java),
            "cpp" => Some(Self::Cpp),
            "rust" => Some(Self::Rust),
            _ => None,
        }
    }

    /// Line that opens a header comment block
    #[must_use]
    pub const fn comment_initiator(self) -> &'static str {
        match self {
            Self::Java => "/**",
            Self::Cpp | Self::Rust => "/*",
        }
    }

    /// Prefix carried by every content line inside the block
    #[must_use]
    pub const fn comment_marker(self) -> &'static str {
        " * "
    }

    /// Line that closes the block
    #[must_use]
    pub const fn comment_closing(self) -> &'static str {
        match self {
            Self::Java => " **/",
            Self::Cpp | Self::Rust => " */",
        }
    }

    /// File extensions claimed by this dialect
    #[must_use]
    pub const fn extensions(self) -> &'static [&'static str] {
        match self {
            Self::Java => &["java"],
            Self::Cpp => &["c", "cc", "cpp", "cxx", "h", "hh", "hpp"],
            Self::Rust => &["rs"],
        }
    }

    /// Whether this dialect claims the file at `path`, by extension and
    /// ignoring case
    #[must_use]
    pub fn accepts(self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                let ext = ext.to_lowercase();
                self.extensions().contains(&ext.as_str())
            })
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Java => write!(f, "java"),
            Self::Cpp => write!(f, "cpp"),
            Self::Rust => write!(f, "rust"),
        }
    }
}

/// Select the dialect for `path`: a still-matching `last` wins, otherwise the
/// first match in `dialects` priority order.
///
/// Consecutive files in a directory listing are usually the same language, so
/// the caller keeps the previous selection in a one-slot cache. The cache is
/// an optimization only and never changes which dialect is selected.
#[must_use]
pub fn select(path: &Path, dialects: &[Dialect], last: Option<Dialect>) -> Option<Dialect> {
    match last {
        Some(cached) if cached.accepts(path) => Some(cached),
        _ => dialects.iter().copied().find(|dialect| dialect.accepts(path)),
    }
}

#[cfg(test)]
mod tests;
