//! Header rendering: builds the canonical license block and reassembles the
//! file around it

use crate::dialect::Dialect;
use crate::license::LicenseText;

/// Render the rewritten file: a fresh header in `dialect` syntax, one empty
/// separator line, then `body` unchanged.
///
/// Every line is `\n`-terminated, body lines included.
#[must_use]
pub fn render_file(
    dialect: Dialect,
    program_name: &str,
    copyright_holders: &str,
    license: &LicenseText,
    body: &[&str],
) -> String {
    let marker = dialect.comment_marker();
    let mut out = String::new();
    out.push_str(dialect.comment_initiator());
    out.push('\n');
    out.push_str(marker);
    out.push_str(program_name);
    out.push('\n');
    out.push_str(marker);
    out.push_str(copyright_holders);
    out.push('\n');
    out.push_str(marker);
    out.push('\n');
    for line in license.lines() {
        out.push_str(marker);
        out.push_str(line);
        out.push('\n');
    }
    out.push_str(dialect.comment_closing());
    out.push('\n');
    out.push('\n');
    for line in body {
        out.push_str(line);
        out.push('\n');
    }
    out
}
