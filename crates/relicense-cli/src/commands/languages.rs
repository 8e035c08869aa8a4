//! Languages command: List the built-in dialect table

use anyhow::Result;

use relicense_core::Dialect;

/// Print the supported languages with their extensions and comment syntax
///
/// # Errors
/// Infallible today, fallible to match the other commands.
pub fn run() -> Result<()> {
    println!(
        "{:<10} {:<30} {:<10} {:<8} CLOSING",
        "LANGUAGE", "EXTENSIONS", "INITIATOR", "MARKER"
    );
    println!("{}", "-".repeat(70));
    for dialect in Dialect::ALL {
        let language = dialect.to_string();
        let extensions = dialect.extensions().join(", ");
        let marker = format!("'{}'", dialect.comment_marker());
        println!(
            "{language:<10} {extensions:<30} {:<10} {marker:<8} {}",
            dialect.comment_initiator(),
            dialect.comment_closing(),
        );
    }
    Ok(())
}
