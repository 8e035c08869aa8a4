//! Tests for outcome reporting and run counters

use std::path::Path;

use crate::license::LicenseText;
use crate::rewriter::{Outcome, Rewriter, RunSummary};

fn rewriter() -> Rewriter {
    Rewriter::new(".", LicenseText::from_content(""))
}

#[test]
fn test_outcome_phrases() {
    assert_eq!(Outcome::Added.to_string(), "License added");
    assert_eq!(Outcome::Changed.to_string(), "License changed");
    assert_eq!(Outcome::Skipped.to_string(), "No license added");
}

#[test]
fn test_verbose_reports_every_outcome() {
    let rewriter = rewriter().with_verbose(true);
    let path = Path::new("dir/hello.cpp");
    assert_eq!(
        rewriter.report_line(path, Outcome::Added).as_deref(),
        Some("hello.cpp : License added")
    );
    assert_eq!(
        rewriter.report_line(path, Outcome::Changed).as_deref(),
        Some("hello.cpp : License changed")
    );
    assert_eq!(
        rewriter.report_line(path, Outcome::Skipped).as_deref(),
        Some("hello.cpp : No license added")
    );
}

#[test]
fn test_quiet_mode_reports_only_new_licenses() {
    let rewriter = rewriter();
    let path = Path::new("hello.cpp");
    assert_eq!(
        rewriter.report_line(path, Outcome::Added).as_deref(),
        Some("hello.cpp")
    );
    assert_eq!(rewriter.report_line(path, Outcome::Changed), None);
    assert_eq!(rewriter.report_line(path, Outcome::Skipped), None);
}

#[test]
fn test_list_adds_changed_files_to_the_quiet_report() {
    let rewriter = rewriter().with_list(true);
    let path = Path::new("hello.cpp");
    assert_eq!(
        rewriter.report_line(path, Outcome::Changed).as_deref(),
        Some("hello.cpp")
    );
    assert_eq!(rewriter.report_line(path, Outcome::Skipped), None);
}

#[test]
fn test_report_uses_the_bare_file_name() {
    let rewriter = rewriter().with_verbose(true);
    let path = Path::new("/very/deep/tree/hello.cpp");
    assert_eq!(
        rewriter.report_line(path, Outcome::Added).as_deref(),
        Some("hello.cpp : License added")
    );
}

#[test]
fn test_summary_counters() {
    let mut summary = RunSummary::default();
    summary.record(Outcome::Added);
    summary.record(Outcome::Added);
    summary.record(Outcome::Changed);
    summary.record(Outcome::Skipped);

    assert_eq!(summary.added, 2);
    assert_eq!(summary.changed, 1);
    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.failed, 0);
    assert_eq!(summary.processed(), 4);
}
