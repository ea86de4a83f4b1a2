use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::checker::parse_code_list;
use crate::config::{Settings, parse_path_errors};
use crate::error::Result;
use crate::output::{ColorMode, OutputFormat};

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "doc8")]
#[command(author, version, about = "Style checker for reStructuredText and plain text documentation")]
#[command(long_about = "Checks documentation files for overlong lines, trailing whitespace, \
    tab indentation and carriage returns.\n\n\
    Exit codes:\n  \
    0 - No style violations found\n  \
    1 - Style violations found\n  \
    2 - Configuration or runtime error")]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Paths to check (files or directories)
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Configuration file to use instead of searching the working directory
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long, conflicts_with = "config")]
    pub no_config: bool,

    /// Maximum allowed line length (overrides config)
    #[arg(long)]
    pub max_line_length: Option<usize>,

    /// Codes to ignore (comma-separated, can be specified multiple times)
    #[arg(long)]
    pub ignore: Vec<String>,

    /// Glob of paths to skip (can be specified multiple times)
    #[arg(long)]
    pub ignore_path: Vec<String>,

    /// Ignore codes for one file, as PATH;CODE[;CODE...]
    #[arg(long)]
    pub ignore_path_errors: Vec<String>,

    /// Extra file extension to check (can be specified multiple times)
    #[arg(long)]
    pub extension: Vec<String>,

    /// Only treat explicit `..` directives as exempt from the length check
    #[arg(long)]
    pub no_literal_blocks: bool,

    /// Respect .gitignore files while walking directories
    #[arg(long)]
    pub gitignore: bool,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Suppress the summary and warnings
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,
}

impl Cli {
    /// Settings given on the command line, applied after the config file.
    ///
    /// # Errors
    /// Returns an error for an unknown code or a malformed `--ignore-path-errors` entry.
    pub fn to_settings(&self) -> Result<Settings> {
        let mut ignore = Vec::new();
        for value in &self.ignore {
            ignore.extend(parse_code_list(value)?);
        }

        let ignore_path_errors = self
            .ignore_path_errors
            .iter()
            .map(String::as_str)
            .map(parse_path_errors)
            .collect::<Result<Vec<_>>>()?;

        Ok(Settings {
            max_line_length: self.max_line_length,
            ignore,
            ignore_paths: self.ignore_path.clone(),
            ignore_path_errors,
            extensions: self.extension.clone(),
            literal_blocks: self.no_literal_blocks.then_some(false),
            gitignore: self.gitignore.then_some(true),
        })
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
