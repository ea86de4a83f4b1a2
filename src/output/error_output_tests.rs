use std::path::PathBuf;

use super::*;

fn render(use_colors: bool, error: &Doc8Error) -> String {
    let mut buf = Vec::new();
    ErrorOutput::with_colors(use_colors).write_doc8_error(&mut buf, error);
    String::from_utf8(buf).unwrap()
}

#[test]
fn plain_error_line() {
    let mut buf = Vec::new();
    ErrorOutput::with_colors(false).write_error(&mut buf, "Config", "bad value", None, None);
    assert_eq!(String::from_utf8(buf).unwrap(), "✖ Config: bad value\n");
}

#[test]
fn error_with_detail_and_suggestion() {
    let mut buf = Vec::new();
    ErrorOutput::with_colors(false).write_error(
        &mut buf,
        "Config",
        "invalid pattern",
        Some("unclosed character class"),
        Some("Check glob syntax"),
    );
    let out = String::from_utf8(buf).unwrap();
    assert!(out.contains("✖ Config: invalid pattern\n"));
    assert!(out.contains("  × unclosed character class\n"));
    assert!(out.contains("  help: Check glob syntax\n"));
}

#[test]
fn doc8_error_uses_category_and_suggestion() {
    let out = render(false, &Doc8Error::InvalidCode("D999".to_string()));
    assert!(out.starts_with("✖ Config: Unknown error code: D999\n"));
    assert!(out.contains("help: Valid codes are D001, D002, D003 and D004"));
}

#[test]
fn doc8_error_includes_source_as_detail() {
    let error = Doc8Error::FileRead {
        path: PathBuf::from("missing.rst"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
    };
    let out = render(false, &error);
    assert!(out.contains("✖ FileRead: Failed to read file: missing.rst\n"));
    assert!(out.contains("  × no such file\n"));
}

#[test]
fn colored_error_has_ansi_codes() {
    let out = render(true, &Doc8Error::Config("boom".to_string()));
    assert!(out.contains("\x1b[1m\x1b[31m✖ Config:\x1b[0m"));
}

#[test]
fn plain_warning() {
    let mut buf = Vec::new();
    ErrorOutput::with_colors(false).write_warning(&mut buf, "path not found: x", None);
    assert_eq!(String::from_utf8(buf).unwrap(), "⚠ Warning: path not found: x\n");
}

#[test]
fn colored_warning_with_detail() {
    let mut buf = Vec::new();
    ErrorOutput::with_colors(true).write_warning(&mut buf, "careful", Some("more"));
    let out = String::from_utf8(buf).unwrap();
    assert!(out.contains("\x1b[33m⚠ Warning:\x1b[0m careful"));
    assert!(out.contains("\x1b[2m× more\x1b[0m"));
}

#[test]
fn never_mode_writes_plain_text() {
    let mut buf = Vec::new();
    ErrorOutput::new(ColorMode::Never).write_warning(&mut buf, "path not found: docs", None);
    let out = String::from_utf8(buf).unwrap();
    assert_eq!(out, "⚠ Warning: path not found: docs\n");
}
