//! In-memory view of a documentation file as physical lines.

use std::path::Path;

use crate::error::{Doc8Error, Result};

const UTF8_BOM: char = '\u{feff}';

/// A decoded file split into physical lines.
///
/// Lines are split on `\n` only, so a `\r` from a CRLF ending stays in the
/// line text. A trailing empty segment after the final newline is not a line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
}

impl Document {
    #[must_use]
    pub fn parse(content: &str) -> Self {
        let content = content.strip_prefix(UTF8_BOM).unwrap_or(content);
        Self {
            lines: content.split_terminator('\n').map(str::to_string).collect(),
        }
    }

    /// Decode raw file bytes as UTF-8.
    ///
    /// # Errors
    /// Returns [`Doc8Error::Decode`] if the bytes are not valid UTF-8.
    pub fn decode(path: &Path, bytes: Vec<u8>) -> Result<Self> {
        let content = String::from_utf8(bytes).map_err(|source| Doc8Error::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&content))
    }

    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Strip a single trailing `\r` left over from a CRLF line ending.
#[must_use]
pub fn without_terminator(line: &str) -> &str {
    line.strip_suffix('\r').unwrap_or(line)
}

/// Length of a line in characters, excluding a CRLF terminator.
#[must_use]
pub fn line_length(line: &str) -> usize {
    without_terminator(line).chars().count()
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;
