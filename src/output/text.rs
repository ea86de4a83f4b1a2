use std::fmt::Write;

use crate::error::Result;
use crate::report::Report;

use super::{ColorMode, OutputFormatter, ansi};

/// Plain-text reporter: one `path:line: CODE message` line per finding.
pub struct TextFormatter {
    use_colors: bool,
    verbose: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, false)
    }

    /// With `verbose` set, a summary block follows the findings.
    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: bool) -> Self {
        let is_terminal = std::io::IsTerminal::is_terminal(&std::io::stdout());
        Self {
            use_colors: mode.use_colors(is_terminal),
            verbose,
        }
    }

    #[cfg(test)]
    pub(crate) const fn with_colors(use_colors: bool, verbose: bool) -> Self {
        Self {
            use_colors,
            verbose,
        }
    }

    fn write_summary(&self, output: &mut String, report: &Report) {
        let _ = writeln!(output, "========");
        let _ = writeln!(output, "Total files scanned = {}", report.files_scanned());
        let total = report.total_errors();
        if self.use_colors && total > 0 {
            let _ = writeln!(
                output,
                "Total accumulated errors = {}{total}{}",
                ansi::RED,
                ansi::RESET
            );
        } else {
            let _ = writeln!(output, "Total accumulated errors = {total}");
        }
        if total > 0 {
            let _ = writeln!(output, "Detailed error counts:");
            for (code, count) in report.counts_by_code() {
                let _ = writeln!(output, "    - {code} = {count}");
            }
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        let mut output = String::new();

        for (file, finding) in report.located_findings() {
            let path = file.path.display();
            if self.use_colors {
                let _ = writeln!(
                    output,
                    "{}{path}{}:{}: {}{}{}{} {}",
                    ansi::CYAN,
                    ansi::RESET,
                    finding.line,
                    ansi::BOLD,
                    ansi::RED,
                    finding.code,
                    ansi::RESET,
                    finding.message
                );
            } else {
                let _ = writeln!(
                    output,
                    "{path}:{}: {} {}",
                    finding.line, finding.code, finding.message
                );
            }
        }

        if self.verbose {
            self.write_summary(&mut output, report);
        }

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
