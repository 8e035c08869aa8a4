//! Core library for recursive license header rewriting
//!
//! Walks a directory tree and rewrites the leading comment block of every
//! recognized source file so it carries the canonical license header, keeping
//! the program name and copyright line of headers that already exist. File
//! types are recognized by [`Dialect`]; the header state machine lives in
//! [`header`] and the walk in [`rewriter`].

pub mod dialect;
pub mod header;
pub mod license;
pub mod rewriter;

pub use dialect::Dialect;
pub use license::LicenseText;
pub use rewriter::{Outcome, RewriteError, Rewriter, RunSummary};
