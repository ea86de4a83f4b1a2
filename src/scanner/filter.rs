use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::config::Config;
use crate::error::{Doc8Error, Result};

const GLOB_META: [char; 4] = ['*', '?', '[', '{'];

pub trait FileFilter {
    /// True if a file found while walking a directory should be checked.
    fn should_include(&self, path: &Path) -> bool;

    /// True if the path (file or directory) matches an ignore pattern.
    fn is_excluded(&self, path: &Path) -> bool;
}

/// Selects files by extension pattern (`*.rst`) and drops ignored paths.
pub struct GlobFilter {
    include_patterns: GlobSet,
    exclude_patterns: GlobSet,
    base_dir: Option<PathBuf>,
}

impl GlobFilter {
    /// Create a filter matching `*{ext}` for every extension, minus `exclude_patterns`.
    ///
    /// An exclude pattern without glob characters also excludes everything below it.
    ///
    /// # Errors
    /// Returns an error if any pattern is invalid.
    pub fn new(extensions: &[String], exclude_patterns: &[String]) -> Result<Self> {
        let include: Vec<String> = extensions.iter().map(|ext| format!("*{ext}")).collect();

        let mut exclude = Vec::with_capacity(exclude_patterns.len() * 2);
        for pattern in exclude_patterns {
            let pattern = pattern.trim_start_matches("./").trim_end_matches('/');
            exclude.push(pattern.to_string());
            if !pattern.contains(GLOB_META) {
                exclude.push(format!("{pattern}/**"));
            }
        }

        Ok(Self {
            include_patterns: build_set(&include)?,
            exclude_patterns: build_set(&exclude)?,
            base_dir: None,
        })
    }

    /// Also match exclude patterns against each path resolved relative to `dir`.
    #[must_use]
    pub fn with_base_dir(mut self, dir: &Path) -> Self {
        self.base_dir = Some(dunce::canonicalize(dir).unwrap_or_else(|_| dir.to_path_buf()));
        self
    }

    /// Filter for the configured extensions and ignore paths, with ignore
    /// paths relative to the current directory.
    ///
    /// # Errors
    /// Returns an error if any configured pattern is invalid or the current
    /// directory cannot be determined.
    pub fn from_config(config: &Config) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        Ok(Self::new(&config.extensions, &config.ignore_paths)?.with_base_dir(&cwd))
    }

    fn matches_relative_to_base(&self, path: &Path) -> bool {
        let Some(base) = &self.base_dir else {
            return false;
        };
        dunce::canonicalize(path)
            .ok()
            .and_then(|resolved| {
                resolved
                    .strip_prefix(base)
                    .ok()
                    .map(|relative| self.exclude_patterns.is_match(relative))
            })
            .unwrap_or(false)
    }

    fn has_valid_extension(&self, path: &Path) -> bool {
        path.file_name()
            .is_some_and(|name| self.include_patterns.is_match(name))
    }
}

impl FileFilter for GlobFilter {
    fn should_include(&self, path: &Path) -> bool {
        self.has_valid_extension(path) && !self.is_excluded(path)
    }

    fn is_excluded(&self, path: &Path) -> bool {
        if self.exclude_patterns.is_empty() {
            return false;
        }
        let relative = path.strip_prefix(".").unwrap_or(path);
        self.exclude_patterns.is_match(relative) || self.matches_relative_to_base(path)
    }
}

fn build_set(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|e| Doc8Error::InvalidPattern {
            pattern: pattern.clone(),
            source: e,
        })?;
        builder.add(glob);
    }
    builder.build().map_err(|e| Doc8Error::InvalidPattern {
        pattern: "combined patterns".to_string(),
        source: e,
    })
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
