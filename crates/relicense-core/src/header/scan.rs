//! Leading-comment scan: decides whether a file already carries a license
//! header and pulls the program name and copyright line out of it

use crate::dialect::Dialect;

/// A well-formed header yields its name and copyright line within this many
/// leading lines
const SCAN_WINDOW: usize = 4;

/// States of the leading-comment scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    /// Looking for the comment initiator
    SeekingStart,
    /// Inside the block, waiting for the program-name line
    InNameLine,
    /// Name recorded, waiting for the copyright line
    InCopyrightLine,
    /// Name and copyright both recorded
    CopyrightFound,
    /// The closing line appeared before any content
    HeaderClosed,
    /// The leading lines are not a license header
    NotLicensed,
}

impl ScanState {
    /// States that keep consuming lines inside the classification window
    fn is_scanning(self) -> bool {
        matches!(
            self,
            Self::SeekingStart | Self::InNameLine | Self::InCopyrightLine
        )
    }
}

/// Why a file is left untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No existing header, and no default program name or copyright to seed
    /// a fresh one with
    MissingDefaults,
    /// The leading comment never yielded a name and copyright inside the
    /// scan window
    MalformedHeader,
    /// The leading comment never closes before end of file
    UnclosedComment,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let reason = match self {
            Self::MissingDefaults => "no default program name or copyright to build a header from",
            Self::MalformedHeader => "leading comment is not a recognizable license header",
            Self::UnclosedComment => "leading comment never closes",
        };
        write!(f, "{reason}")
    }
}

/// What to do with the file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// No header present, the whole file is body
    Missing,
    /// A header occupies the lines before `body_start`
    Present { body_start: usize },
    /// Leave the file exactly as it is
    Skip(SkipReason),
}

/// Result of scanning a file's leading lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanReport {
    pub verdict: Verdict,
    /// Program name taken from the old header, or the configured default
    pub program_name: String,
    /// Copyright holders taken from the old header, or the configured default
    pub copyright_holders: String,
}

/// Classify the leading lines of a file.
///
/// `default_name` and `default_copyright` seed the report and are replaced
/// by whatever an existing header carries. A header is only consumed when it
/// resolves inside the scan window and its comment block closes before end
/// of file; anything else stays untouched rather than risk mangling code.
#[must_use]
pub fn scan(
    lines: &[&str],
    dialect: Dialect,
    default_name: &str,
    default_copyright: &str,
) -> ScanReport {
    let mut state = ScanState::SeekingStart;
    let mut program_name = default_name.to_string();
    let mut copyright_holders = default_copyright.to_string();
    let mut consumed = 0;

    while consumed < SCAN_WINDOW && state.is_scanning() {
        let Some(&line) = lines.get(consumed) else {
            break;
        };
        consumed += 1;
        match state {
            ScanState::SeekingStart => {
                if line == dialect.comment_initiator() {
                    state = ScanState::InNameLine;
                } else if line == dialect.comment_closing() {
                    state = ScanState::HeaderClosed;
                } else if !line.starts_with(dialect.comment_marker()) {
                    state = ScanState::NotLicensed;
                }
            }
            ScanState::InNameLine => {
                if let Some(text) = marker_content(line, dialect) {
                    program_name = text.to_string();
                    state = ScanState::InCopyrightLine;
                }
            }
            ScanState::InCopyrightLine => {
                if let Some(text) = marker_content(line, dialect) {
                    copyright_holders = text.to_string();
                    state = ScanState::CopyrightFound;
                }
            }
            ScanState::CopyrightFound | ScanState::HeaderClosed | ScanState::NotLicensed => {}
        }
    }

    match state {
        ScanState::NotLicensed => missing(program_name, copyright_holders),
        ScanState::HeaderClosed => ScanReport {
            verdict: Verdict::Present {
                body_start: skip_separator(lines, consumed),
            },
            program_name,
            copyright_holders,
        },
        ScanState::CopyrightFound => {
            finish_detected(lines, consumed, dialect, program_name, copyright_holders)
        }
        // end of an empty file: no header, nothing consumed
        ScanState::SeekingStart if consumed == 0 => missing(program_name, copyright_holders),
        // window exhausted while still inside the leading comment
        _ => ScanReport {
            verdict: Verdict::Skip(SkipReason::MalformedHeader),
            program_name,
            copyright_holders,
        },
    }
}

/// Content of a marker-prefixed line, or `None` when the line has nothing
/// worth recording (no marker, or only whitespace after it)
fn marker_content(line: &str, dialect: Dialect) -> Option<&str> {
    let text = line
        .strip_prefix(dialect.comment_marker())
        .unwrap_or("")
        .trim();
    (!text.is_empty()).then_some(text)
}

/// A name and copyright were found; walk the rest of the comment block to
/// find where the body starts
fn finish_detected(
    lines: &[&str],
    mut consumed: usize,
    dialect: Dialect,
    program_name: String,
    copyright_holders: String,
) -> ScanReport {
    loop {
        let Some(&line) = lines.get(consumed) else {
            // comment never closes, rewriting would swallow the whole file
            return ScanReport {
                verdict: Verdict::Skip(SkipReason::UnclosedComment),
                program_name,
                copyright_holders,
            };
        };
        if line == dialect.comment_closing() {
            let body_start = skip_separator(lines, consumed + 1);
            return ScanReport {
                verdict: Verdict::Present { body_start },
                program_name,
                copyright_holders,
            };
        }
        if !is_continuation(line, dialect) {
            // the block is interrupted before closing: treat the whole file
            // as body but keep what was already extracted for the new header
            return missing(program_name, copyright_holders);
        }
        consumed += 1;
    }
}

/// `Missing` unless there is no name or copyright to seed a fresh header with
fn missing(program_name: String, copyright_holders: String) -> ScanReport {
    let verdict = if program_name.is_empty() || copyright_holders.is_empty() {
        Verdict::Skip(SkipReason::MissingDefaults)
    } else {
        Verdict::Missing
    };
    ScanReport {
        verdict,
        program_name,
        copyright_holders,
    }
}

/// Interior line of a comment block: marker-prefixed, or a bare marker with
/// the trailing whitespace trimmed away
fn is_continuation(line: &str, dialect: Dialect) -> bool {
    let marker = dialect.comment_marker();
    line.starts_with(marker) || line.trim_end() == marker.trim_end()
}

/// One empty line after the closing line belongs to the header; it is the
/// separator the renderer writes back
fn skip_separator(lines: &[&str], consumed: usize) -> usize {
    if lines.get(consumed).is_some_and(|line| line.is_empty()) {
        consumed + 1
    } else {
        consumed
    }
}
