use std::path::Path;

use super::*;

#[test]
fn parse_empty_content() {
    let doc = Document::parse("");
    assert!(doc.is_empty());
    assert_eq!(doc.len(), 0);
}

#[test]
fn parse_drops_trailing_empty_segment() {
    let doc = Document::parse("a\nb\n");
    assert_eq!(doc.lines(), ["a", "b"]);
}

#[test]
fn parse_keeps_interior_blank_lines() {
    let doc = Document::parse("a\n\n\nb");
    assert_eq!(doc.lines(), ["a", "", "", "b"]);
}

#[test]
fn parse_keeps_carriage_returns() {
    let doc = Document::parse("title\r\nbody\r\n");
    assert_eq!(doc.lines(), ["title\r", "body\r"]);
}

#[test]
fn parse_strips_utf8_bom() {
    let doc = Document::parse("\u{feff}Heading\n");
    assert_eq!(doc.lines(), ["Heading"]);
}

#[test]
fn decode_valid_utf8() {
    let doc = Document::decode(Path::new("a.rst"), "héllo\n".as_bytes().to_vec()).unwrap();
    assert_eq!(doc.lines(), ["héllo"]);
}

#[test]
fn decode_invalid_utf8_is_error() {
    let err = Document::decode(Path::new("bad.rst"), vec![b'a', 0xff, b'\n']).unwrap_err();
    assert!(matches!(err, Doc8Error::Decode { .. }));
    assert!(err.to_string().contains("bad.rst"));
}

#[test]
fn line_length_counts_characters_not_bytes() {
    assert_eq!(line_length("héllo"), 5);
}

#[test]
fn line_length_ignores_crlf_terminator() {
    assert_eq!(line_length("abc\r"), 3);
    assert_eq!(line_length("abc\r\r"), 4);
}

#[test]
fn line_length_keeps_other_whitespace() {
    assert_eq!(line_length("abc   "), 6);
}
