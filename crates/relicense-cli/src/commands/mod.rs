//! CLI commands

pub mod change;
pub mod languages;
pub mod types;

pub use types::{Cli, Commands};
