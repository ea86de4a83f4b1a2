//! Locates explicit markup directives and literal blocks.
//!
//! Detection is pattern based and shallow: an opener line plus every following
//! line that is blank or indented. The body is never parsed.

use regex::Regex;

use crate::document::Document;

/// Closed interval `[start, end]` of 0-based line indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectiveRange {
    pub start: usize,
    pub end: usize,
}

impl DirectiveRange {
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub const fn contains(&self, index: usize) -> bool {
        self.start <= index && index <= self.end
    }
}

/// True if `index` falls inside any of `ranges`.
#[must_use]
pub fn is_excluded(ranges: &[DirectiveRange], index: usize) -> bool {
    ranges.iter().any(|range| range.contains(index))
}

pub struct DirectiveScanner {
    directive_pattern: Regex,
    literal_pattern: Option<Regex>,
}

impl Default for DirectiveScanner {
    fn default() -> Self {
        Self::new(true)
    }
}

impl DirectiveScanner {
    /// `literal_blocks` also treats a bare `::` line as an opener.
    #[must_use]
    pub fn new(literal_blocks: bool) -> Self {
        Self {
            directive_pattern: Regex::new(r"^\.\.\s+.*::\s*$").expect("Invalid regex"),
            literal_pattern: literal_blocks
                .then(|| Regex::new(r"^::\s*$").expect("Invalid regex")),
        }
    }

    #[must_use]
    pub fn is_opener(&self, line: &str) -> bool {
        self.directive_pattern.is_match(line)
            || self
                .literal_pattern
                .as_ref()
                .is_some_and(|pattern| pattern.is_match(line))
    }

    /// Compute exclusion ranges for every opener in the document.
    #[must_use]
    pub fn scan(&self, document: &Document) -> Vec<DirectiveRange> {
        let lines = document.lines();
        lines
            .iter()
            .enumerate()
            .filter(|(_, line)| self.is_opener(line))
            .map(|(start, _)| DirectiveRange::new(start, find_directive_end(lines, start)))
            .collect()
    }
}

/// Index of the last line belonging to the directive opened at `start`.
fn find_directive_end(lines: &[String], start: usize) -> usize {
    let body = lines[start + 1..]
        .iter()
        .take_while(|line| is_body_line(line))
        .count();
    start + body
}

fn is_body_line(line: &str) -> bool {
    line.trim().is_empty() || line.starts_with(char::is_whitespace)
}

#[cfg(test)]
#[path = "directive_tests.rs"]
mod tests;
