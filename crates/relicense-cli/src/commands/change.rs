//! Change command: Rewrite license headers under a directory

use std::env;
use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use tracing::info;

use relicense_core::{Dialect, LicenseText, Rewriter};

/// Run the change command
///
/// # Errors
/// Returns an error if the target directory, the license file or the
/// language list is invalid, or if the target directory cannot be listed.
pub fn run(
    path: &str,
    license: &str,
    languages: &str,
    name: &str,
    copyright: &str,
    verbose: bool,
    list: bool,
) -> Result<()> {
    let root = expand_home(path);
    if !root.is_dir() {
        bail!("invalid path '{}': not a directory", root.display());
    }

    let license_path = expand_home(license);
    if license_path.is_dir() {
        bail!(
            "invalid license file '{}': is a directory",
            license_path.display()
        );
    }
    let license_text = LicenseText::load(&license_path)
        .with_context(|| format!("cannot read license file '{}'", license_path.display()))?;

    let dialects = parse_languages(languages)?;

    info!(
        "Rewriting headers under {} ({} license lines, languages: {})",
        root.display(),
        license_text.len(),
        languages
    );

    let summary = Rewriter::new(root, license_text)
        .with_dialects(dialects)
        .with_program_name(name)
        .with_copyright(copyright)
        .with_verbose(verbose)
        .with_list(list)
        .run(|line| println!("{line}"))?;

    info!(
        "✓ Run complete: {} added, {} changed, {} skipped, {} failed",
        summary.added, summary.changed, summary.skipped, summary.failed
    );
    Ok(())
}

/// Parse the comma-separated language list, keeping priority order
fn parse_languages(names: &str) -> Result<Vec<Dialect>> {
    names
        .split(',')
        .map(|token| {
            let token = token.trim();
            Dialect::from_name(token).ok_or_else(|| anyhow!("unknown language '{token}'"))
        })
        .collect()
}

/// Expand a leading `~` to the home directory, the way a shell would
fn expand_home(path: &str) -> PathBuf {
    match path.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => match env::var_os("HOME") {
            Some(home) => {
                let rest = rest.trim_start_matches('/');
                let mut expanded = PathBuf::from(home);
                if !rest.is_empty() {
                    expanded.push(rest);
                }
                expanded
            }
            None => PathBuf::from(path),
        },
        _ => PathBuf::from(path),
    }
}
