//! Colored error and warning messages on stderr.
//!
//! Format: `✖ {type}: {message}` / `  × {detail}` / `  help: {suggestion}`

use std::error::Error as _;
use std::io::{IsTerminal, Write};

use super::{ColorMode, ansi};
use crate::error::Doc8Error;

pub struct ErrorOutput {
    use_colors: bool,
}

impl ErrorOutput {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: mode.use_colors(std::io::stderr().is_terminal()),
        }
    }

    #[cfg(test)]
    pub const fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Print a run-aborting error together with its underlying cause.
    pub fn print_error(&self, error: &Doc8Error) {
        let mut stderr = std::io::stderr().lock();
        self.write_doc8_error(&mut stderr, error);
    }

    pub fn print_warning(&self, message: &str) {
        let mut stderr = std::io::stderr().lock();
        self.write_warning(&mut stderr, message, None);
    }

    pub fn write_doc8_error<W: Write>(&self, w: &mut W, error: &Doc8Error) {
        let detail = error.source().map(ToString::to_string);
        self.write_error(
            w,
            error.error_type(),
            &error.to_string(),
            detail.as_deref(),
            error.suggestion(),
        );
    }

    pub fn write_error<W: Write>(
        &self,
        w: &mut W,
        error_type: &str,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        // Write failures on stderr have nowhere left to be reported.
        if self.use_colors {
            let _ = writeln!(
                w,
                "{}{}✖ {error_type}:{} {message}",
                ansi::BOLD,
                ansi::RED,
                ansi::RESET
            );
        } else {
            let _ = writeln!(w, "✖ {error_type}: {message}");
        }
        self.write_tail(w, detail, suggestion);
    }

    pub fn write_warning<W: Write>(&self, w: &mut W, message: &str, detail: Option<&str>) {
        if self.use_colors {
            let _ = writeln!(
                w,
                "{}{}⚠ Warning:{} {message}",
                ansi::BOLD,
                ansi::YELLOW,
                ansi::RESET
            );
        } else {
            let _ = writeln!(w, "⚠ Warning: {message}");
        }
        self.write_tail(w, detail, None);
    }

    fn write_tail<W: Write>(&self, w: &mut W, detail: Option<&str>, suggestion: Option<&str>) {
        if let Some(d) = detail {
            if self.use_colors {
                let _ = writeln!(w, "  {}× {d}{}", ansi::DIM, ansi::RESET);
            } else {
                let _ = writeln!(w, "  × {d}");
            }
        }

        if let Some(s) = suggestion {
            if self.use_colors {
                let _ = writeln!(w, "  {}help:{} {s}", ansi::CYAN, ansi::RESET);
            } else {
                let _ = writeln!(w, "  help: {s}");
            }
        }
    }
}

#[cfg(test)]
#[path = "error_output_tests.rs"]
mod tests;
