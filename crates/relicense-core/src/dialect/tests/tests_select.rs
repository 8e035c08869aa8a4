//! Tests for dialect selection and the one-slot cache

use std::path::Path;

use rstest::rstest;

use crate::dialect::{select, Dialect};

#[rstest]
#[case("Main.java", Some(Dialect::Java))]
#[case("engine.cpp", Some(Dialect::Cpp))]
#[case("window.h", Some(Dialect::Cpp))]
#[case("lib.rs", Some(Dialect::Rust))]
#[case("README.md", None)]
#[case("Makefile", None)]
fn test_select_matches_first_accepting_dialect(
    #[case] name: &str,
    #[case] expected: Option<Dialect>,
) {
    let dialects = Dialect::ALL.to_vec();
    assert_eq!(select(Path::new(name), &dialects, None), expected);
}

#[rstest]
#[case(None)]
#[case(Some(Dialect::Java))]
#[case(Some(Dialect::Cpp))]
#[case(Some(Dialect::Rust))]
fn test_cache_never_changes_the_selection(#[case] last: Option<Dialect>) {
    let dialects = Dialect::ALL.to_vec();
    for name in ["Main.java", "engine.cpp", "window.h", "lib.rs", "notes.txt"] {
        let path = Path::new(name);
        assert_eq!(
            select(path, &dialects, last),
            select(path, &dialects, None),
            "cache {last:?} changed the selection for {name}"
        );
    }
}

#[test]
fn test_cache_hit_short_circuits() {
    // a matching cached dialect is reused even when it sits last in priority
    let dialects = vec![Dialect::Java, Dialect::Cpp];
    let selected = select(Path::new("b.cpp"), &dialects, Some(Dialect::Cpp));
    assert_eq!(selected, Some(Dialect::Cpp));
}

#[test]
fn test_cache_miss_falls_back_to_priority_order() {
    let dialects = vec![Dialect::Cpp, Dialect::Java];
    let selected = select(Path::new("Main.java"), &dialects, Some(Dialect::Cpp));
    assert_eq!(selected, Some(Dialect::Java));
}

#[test]
fn test_select_respects_the_configured_subset() {
    let dialects = vec![Dialect::Java];
    assert_eq!(select(Path::new("engine.cpp"), &dialects, None), None);
}
