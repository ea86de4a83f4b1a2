use std::path::PathBuf;

use super::*;
use crate::checker::Code;

const TOX_INI: &str = "\
[tox]
envlist = py3

[testenv]
commands = pytest

[doc8]
# Documentation style
max-line-length = 100
ignore = D002, d004
ignore-path =
    docs/_build,
    vendor/*
";

#[test]
fn finds_doc8_section_among_others() {
    let section = find_section(TOX_INI, SECTION).unwrap();
    assert_eq!(section.get("max-line-length").unwrap(), "100");
    assert_eq!(section.get("ignore").unwrap(), "D002, d004");
    assert!(!section.contains_key("envlist"));
}

#[test]
fn missing_section_is_none() {
    assert!(find_section("[tox]\nenvlist = py3\n", SECTION).is_none());
    assert!(find_section("", SECTION).is_none());
}

#[test]
fn empty_section_is_some() {
    let section = find_section("[doc8]\n", SECTION).unwrap();
    assert!(section.is_empty());
}

#[test]
fn continuation_lines_are_appended() {
    let section = find_section(TOX_INI, SECTION).unwrap();
    assert_eq!(section.get("ignore-path").unwrap(), "\ndocs/_build,\nvendor/*");
}

#[test]
fn colon_separator_and_underscore_keys() {
    let section = find_section("[doc8]\nMax_Line_Length: 90\n", SECTION).unwrap();
    assert_eq!(section.get("max-line-length").unwrap(), "90");
}

#[test]
fn comments_are_skipped() {
    let section = find_section("[doc8]\n; note\n# other\nignore = D001\n", SECTION).unwrap();
    assert_eq!(section.len(), 1);
}

#[test]
fn later_keys_win() {
    let section =
        find_section("[doc8]\nmax-line-length = 80\nmax-line-length = 90\n", SECTION).unwrap();
    assert_eq!(section.get("max-line-length").unwrap(), "90");
}

#[test]
fn settings_from_tox_section() {
    let section = find_section(TOX_INI, SECTION).unwrap();
    let settings = settings_from_section(&section, "tox.ini").unwrap();
    assert_eq!(settings.max_line_length, Some(100));
    assert_eq!(settings.ignore, vec![Code::D002, Code::D004]);
    assert_eq!(settings.ignore_paths, vec!["docs/_build", "vendor/*"]);
}

#[test]
fn settings_ignore_discards_empty_tokens() {
    let section = find_section("[doc8]\nignore = , D003 ,,\n", SECTION).unwrap();
    let settings = settings_from_section(&section, "doc8.ini").unwrap();
    assert_eq!(settings.ignore, vec![Code::D003]);
}

#[test]
fn settings_path_errors_and_flags() {
    let content = "\
[doc8]
ignore-path-errors = docs/a.rst;D001, docs/b.rst;D002;D003
extension = .md
literal-blocks = false
gitignore = yes
";
    let section = find_section(content, SECTION).unwrap();
    let settings = settings_from_section(&section, "doc8.ini").unwrap();
    assert_eq!(
        settings.ignore_path_errors,
        vec![
            (PathBuf::from("docs/a.rst"), vec![Code::D001]),
            (PathBuf::from("docs/b.rst"), vec![Code::D002, Code::D003]),
        ]
    );
    assert_eq!(settings.extensions, vec![".md"]);
    assert_eq!(settings.literal_blocks, Some(false));
    assert_eq!(settings.gitignore, Some(true));
}

#[test]
fn malformed_max_line_length_is_error() {
    let section = find_section("[doc8]\nmax-line-length = wide\n", SECTION).unwrap();
    let err = settings_from_section(&section, "doc8.ini").unwrap_err();
    assert!(err.to_string().contains("doc8.ini"));
}

#[test]
fn unknown_code_is_error() {
    let section = find_section("[doc8]\nignore = D009\n", SECTION).unwrap();
    assert!(settings_from_section(&section, "doc8.ini").is_err());
}

#[test]
fn unknown_keys_are_ignored() {
    let section = find_section("[doc8]\nsphinx = true\n", SECTION).unwrap();
    let settings = settings_from_section(&section, "doc8.ini").unwrap();
    assert_eq!(settings, Settings::default());
}
