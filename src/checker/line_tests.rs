use super::*;
use crate::checker::Finding;

#[test]
fn trailing_whitespace_detected() {
    let rule = TrailingWhitespace;
    assert!(rule.matches("foo   "));
    assert!(rule.matches("foo\t"));
    assert!(rule.matches(" "));
    assert!(!rule.matches("foo"));
    assert!(!rule.matches(""));
}

#[test]
fn trailing_whitespace_ignores_crlf_terminator() {
    let rule = TrailingWhitespace;
    assert!(!rule.matches("foo\r"));
    assert!(rule.matches("foo \r"));
    assert!(rule.matches("foo\r\r"));
}

#[test]
fn tab_indentation_detected() {
    let rule = TabIndentation;
    assert!(rule.matches("\tfoo"));
    assert!(rule.matches("  \tfoo"));
    assert!(!rule.matches("    foo"));
    assert!(!rule.matches("foo\tbar"));
    assert!(!rule.matches(""));
}

#[test]
fn tab_only_line_counts_as_indentation() {
    assert!(TabIndentation.matches("\t"));
}

#[test]
fn carriage_return_detected() {
    let rule = CarriageReturn;
    assert!(rule.matches("foo\r"));
    assert!(rule.matches("fo\ro"));
    assert!(!rule.matches("foo"));
}

#[test]
fn check_builds_one_based_finding() {
    let finding = TabIndentation.check(4, "\tindented");
    assert_eq!(
        finding,
        Some(Finding {
            line: 5,
            code: Code::D003,
            message: "Tabulation used for indentation",
        })
    );
    assert_eq!(TabIndentation.check(0, "clean"), None);
}

#[test]
fn rules_fire_independently_on_same_line() {
    let line = "\tfoo \r";
    assert!(TrailingWhitespace.matches(line));
    assert!(TabIndentation.matches(line));
    assert!(CarriageReturn.matches(line));
}
