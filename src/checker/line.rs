//! Per-line predicates. Each looks at one line in isolation.

use crate::document::without_terminator;

use super::{Code, LineRule};

/// D002: the line ends in whitespace.
///
/// A single trailing `\r` is the CRLF terminator and is left to D004.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrailingWhitespace;

impl LineRule for TrailingWhitespace {
    fn code(&self) -> Code {
        Code::D002
    }

    fn matches(&self, line: &str) -> bool {
        without_terminator(line).ends_with(char::is_whitespace)
    }
}

/// D003: a tab appears in the leading indentation.
#[derive(Debug, Clone, Copy, Default)]
pub struct TabIndentation;

impl LineRule for TabIndentation {
    fn code(&self) -> Code {
        Code::D003
    }

    fn matches(&self, line: &str) -> bool {
        line.chars()
            .take_while(|c| c.is_whitespace())
            .any(|c| c == '\t')
    }
}

/// D004: the line contains a carriage return.
#[derive(Debug, Clone, Copy, Default)]
pub struct CarriageReturn;

impl LineRule for CarriageReturn {
    fn code(&self) -> Code {
        Code::D004
    }

    fn matches(&self, line: &str) -> bool {
        line.contains('\r')
    }
}

#[cfg(test)]
#[path = "line_tests.rs"]
mod tests;
