mod code;
mod directive;
mod finding;
mod length;
mod line;

pub use code::{Code, parse_code_list};
pub use directive::{DirectiveRange, DirectiveScanner, is_excluded};
pub use finding::{FileFindings, Finding};
pub use length::LengthRule;
pub use line::{CarriageReturn, TabIndentation, TrailingWhitespace};

use crate::config::Config;
use crate::document::Document;

/// A rule that needs the whole document at once.
pub trait ContentRule: Send + Sync {
    fn code(&self) -> Code;

    /// Lazily produce findings for `document`, recomputed on every call.
    fn check<'a>(&'a self, document: &'a Document) -> Box<dyn Iterator<Item = Finding> + 'a>;
}

/// A rule that inspects one physical line at a time.
pub trait LineRule: Send + Sync {
    fn code(&self) -> Code;

    fn matches(&self, line: &str) -> bool;

    /// Finding for the line at 0-based `index`, if the rule fires.
    fn check(&self, index: usize, line: &str) -> Option<Finding> {
        self.matches(line)
            .then(|| Finding::at_index(index, self.code()))
    }
}

/// The active content and line rules for a run.
pub struct RuleSet {
    content_rules: Vec<Box<dyn ContentRule>>,
    line_rules: Vec<Box<dyn LineRule>>,
}

impl RuleSet {
    #[must_use]
    pub fn new(
        content_rules: Vec<Box<dyn ContentRule>>,
        line_rules: Vec<Box<dyn LineRule>>,
    ) -> Self {
        Self {
            content_rules,
            line_rules,
        }
    }

    /// Build the rules whose codes are enabled and not globally ignored.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let mut content_rules: Vec<Box<dyn ContentRule>> = Vec::new();
        if config.is_active(Code::D001) {
            content_rules.push(Box::new(LengthRule::new(
                config.max_line_length,
                config.literal_blocks,
            )));
        }

        let candidates: [Box<dyn LineRule>; 3] = [
            Box::new(TrailingWhitespace),
            Box::new(TabIndentation),
            Box::new(CarriageReturn),
        ];
        let line_rules = candidates
            .into_iter()
            .filter(|rule| config.is_active(rule.code()))
            .collect();

        Self::new(content_rules, line_rules)
    }

    /// Codes of every active rule, content rules first.
    #[must_use]
    pub fn codes(&self) -> Vec<Code> {
        self.content_rules
            .iter()
            .map(|rule| rule.code())
            .chain(self.line_rules.iter().map(|rule| rule.code()))
            .collect()
    }

    /// Run all rules over `document`.
    ///
    /// Content-rule findings come first, then line-rule findings by ascending line.
    #[must_use]
    pub fn check(&self, document: &Document) -> Vec<Finding> {
        let mut findings: Vec<Finding> = self
            .content_rules
            .iter()
            .flat_map(|rule| rule.check(document))
            .collect();

        for (index, line) in document.lines().iter().enumerate() {
            findings.extend(self.line_rules.iter().filter_map(|rule| rule.check(index, line)));
        }

        findings
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
