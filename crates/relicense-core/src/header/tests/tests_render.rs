//! Tests for header rendering

use crate::dialect::Dialect;
use crate::header::render_file;
use crate::license::LicenseText;

#[test]
fn test_render_matches_the_canonical_layout() {
    let license = LicenseText::from_content("Line A\nLine B\n");
    let rendered = render_file(Dialect::Cpp, "Prog", "Me 2020", &license, &["print('hi')"]);
    assert_eq!(
        rendered,
        "/*\n * Prog\n * Me 2020\n * \n * Line A\n * Line B\n */\n\nprint('hi')\n"
    );
}

#[test]
fn test_render_java_syntax() {
    let license = LicenseText::from_content("L1\n");
    let rendered = render_file(Dialect::Java, "App", "Acme", &license, &["package a;"]);
    assert_eq!(rendered, "/**\n * App\n * Acme\n * \n * L1\n **/\n\npackage a;\n");
}

#[test]
fn test_render_with_empty_body() {
    let license = LicenseText::from_content("Line A\n");
    let rendered = render_file(Dialect::Cpp, "Prog", "Me 2020", &license, &[]);
    assert_eq!(rendered, "/*\n * Prog\n * Me 2020\n * \n * Line A\n */\n\n");
}

#[test]
fn test_render_with_empty_license() {
    let license = LicenseText::from_content("");
    let rendered = render_file(Dialect::Cpp, "Prog", "Me 2020", &license, &["x"]);
    assert_eq!(rendered, "/*\n * Prog\n * Me 2020\n * \n */\n\nx\n");
}

#[test]
fn test_render_keeps_body_lines_verbatim() {
    let license = LicenseText::from_content("L\n");
    let body = ["fn main() {", "    // indented", "}", "", "// trailing comment"];
    let rendered = render_file(Dialect::Rust, "picker", "Ada 2024", &license, &body);

    let tail: Vec<&str> = rendered.lines().skip(7).collect();
    assert_eq!(tail, body);
}
