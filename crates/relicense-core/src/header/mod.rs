//! Header module: Detection and regeneration of license header blocks
//!
//! The scan half classifies a file's leading lines and extracts the program
//! name and copyright from an existing header; the render half writes the
//! canonical replacement.

mod render;
mod scan;

pub use render::render_file;
pub use scan::{scan, ScanReport, ScanState, SkipReason, Verdict};

#[cfg(test)]
mod tests;
