//! Command types shared between main and library

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "relicense", version, about = "Rewrites license headers across a source tree")]
pub struct Cli {
    /// Report every file outcome and enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rewrite license headers under a directory
    Change {
        /// Directory to process
        path: String,

        /// File holding the license body
        #[arg(short = 'L', long, default_value = "LICENSE")]
        license: String,

        /// Comma-separated languages to match, in priority order
        #[arg(short, long, default_value = "java,cpp")]
        languages: String,

        /// Program name for files without an existing header
        #[arg(short, long, default_value = "")]
        name: String,

        /// Copyright holders for files without an existing header
        #[arg(short, long, default_value = "")]
        copyright: String,

        /// Also print names of files whose header was replaced
        #[arg(long)]
        list: bool,
    },
    /// List supported languages and their comment syntax
    Languages,
}
