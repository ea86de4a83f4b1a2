use crate::document::{Document, line_length};

use super::directive::{DirectiveRange, DirectiveScanner, is_excluded};
use super::{Code, ContentRule, Finding};

const URL_SCHEMES: [&str; 2] = ["http://", "https://"];

/// D001: lines longer than the configured maximum.
///
/// Lines inside directives and literal blocks are exempt, as are lines that
/// cannot reasonably be split (a single token) and lines carrying a URL.
pub struct LengthRule {
    max_length: usize,
    scanner: DirectiveScanner,
}

impl LengthRule {
    #[must_use]
    pub fn new(max_length: usize, literal_blocks: bool) -> Self {
        Self {
            max_length,
            scanner: DirectiveScanner::new(literal_blocks),
        }
    }

    /// Findings for `document` given precomputed exclusion ranges.
    pub fn findings<'a, R>(
        &'a self,
        document: &'a Document,
        ranges: R,
    ) -> impl Iterator<Item = Finding> + 'a
    where
        R: AsRef<[DirectiveRange]> + 'a,
    {
        let max_length = self.max_length;
        document
            .lines()
            .iter()
            .enumerate()
            .filter(move |(index, line)| {
                !is_excluded(ranges.as_ref(), *index) && is_reportable(line, max_length)
            })
            .map(|(index, _)| Finding::at_index(index, Code::D001))
    }
}

impl ContentRule for LengthRule {
    fn code(&self) -> Code {
        Code::D001
    }

    fn check<'a>(&'a self, document: &'a Document) -> Box<dyn Iterator<Item = Finding> + 'a> {
        Box::new(self.findings(document, self.scanner.scan(document)))
    }
}

fn is_reportable(line: &str, max_length: usize) -> bool {
    if line_length(line) <= max_length {
        return false;
    }
    let trimmed = line.trim();
    is_splittable(trimmed) && !contains_url(trimmed)
}

/// A trimmed line with no interior whitespace is a single token.
fn is_splittable(trimmed: &str) -> bool {
    trimmed.contains(char::is_whitespace)
}

fn contains_url(trimmed: &str) -> bool {
    URL_SCHEMES.iter().any(|scheme| trimmed.contains(scheme))
}

#[cfg(test)]
#[path = "length_tests.rs"]
mod tests;
