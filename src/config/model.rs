use std::path::PathBuf;

use indexmap::{IndexMap, IndexSet};

use crate::checker::Code;

pub const DEFAULT_MAX_LINE_LENGTH: usize = 79;

/// Extensions scanned in every run.
pub const DEFAULT_EXTENSIONS: [&str; 2] = [".rst", ".txt"];

/// Effective configuration for a run.
///
/// Built once by the entry point and shared read-only by every component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub max_line_length: usize,
    /// Codes dropped from every file.
    pub ignore: IndexSet<Code>,
    /// Codes whose rules run at all.
    pub codes_enabled: IndexSet<Code>,
    /// Treat a bare `::` line as a literal-block opener.
    pub literal_blocks: bool,
    /// File extensions (with leading dot) collected from directories.
    pub extensions: Vec<String>,
    /// Glob patterns excluded from directory scans.
    pub ignore_paths: Vec<String>,
    /// Codes dropped for specific files.
    pub ignore_path_errors: IndexMap<PathBuf, IndexSet<Code>>,
    /// Respect `.gitignore` while walking directories.
    pub use_gitignore: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
            ignore: IndexSet::new(),
            codes_enabled: Code::ALL.into_iter().collect(),
            literal_blocks: true,
            extensions: DEFAULT_EXTENSIONS.iter().map(ToString::to_string).collect(),
            ignore_paths: Vec::new(),
            ignore_path_errors: IndexMap::new(),
            use_gitignore: false,
        }
    }
}

impl Config {
    /// True if findings with `code` are produced and reported.
    #[must_use]
    pub fn is_active(&self, code: Code) -> bool {
        self.codes_enabled.contains(&code) && !self.ignore.contains(&code)
    }

    /// Layer `settings` on top: scalars replace, lists and sets union.
    pub fn apply(&mut self, settings: Settings) {
        if let Some(max_line_length) = settings.max_line_length {
            self.max_line_length = max_line_length;
        }
        if let Some(literal_blocks) = settings.literal_blocks {
            self.literal_blocks = literal_blocks;
        }
        if let Some(gitignore) = settings.gitignore {
            self.use_gitignore = gitignore;
        }
        self.ignore.extend(settings.ignore);
        for ext in settings.extensions {
            let ext = normalize_extension(&ext);
            if !self.extensions.contains(&ext) {
                self.extensions.push(ext);
            }
        }
        for pattern in settings.ignore_paths {
            if !self.ignore_paths.contains(&pattern) {
                self.ignore_paths.push(pattern);
            }
        }
        for (path, codes) in settings.ignore_path_errors {
            self.ignore_path_errors
                .entry(path)
                .or_default()
                .extend(codes);
        }
    }
}

/// A partial configuration from one source (file or command line).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub max_line_length: Option<usize>,
    pub ignore: Vec<Code>,
    pub ignore_paths: Vec<String>,
    pub ignore_path_errors: Vec<(PathBuf, Vec<Code>)>,
    pub extensions: Vec<String>,
    pub literal_blocks: Option<bool>,
    pub gitignore: Option<bool>,
}

/// Ensure an extension carries a leading dot (`rst` -> `.rst`).
#[must_use]
pub fn normalize_extension(ext: &str) -> String {
    let ext = ext.trim();
    if ext.starts_with('.') {
        ext.to_string()
    } else {
        format!(".{ext}")
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
