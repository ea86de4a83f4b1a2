use std::path::{Path, PathBuf};

use indexmap::{IndexMap, IndexSet};

use crate::checker::{Code, RuleSet};
use crate::cli::Cli;
use crate::config::{Config, ConfigLoader, FileConfigLoader, LoadResult};
use crate::document::Document;
use crate::error::{Doc8Error, Result};
use crate::scanner::{DirectoryScanner, GlobFilter};

/// Load file settings, from `config_path` when given, otherwise by searching
/// the working directory.
///
/// # Errors
/// Returns an error if the chosen file cannot be read or holds invalid values.
pub(crate) fn load_settings(config_path: Option<&Path>, no_config: bool) -> Result<LoadResult> {
    if no_config {
        log::debug!("configuration discovery disabled");
        return Ok(LoadResult::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

/// Effective configuration: defaults, then the config file, then the command line.
///
/// # Errors
/// Returns an error if the config file or a command-line value is invalid.
pub(crate) fn build_config(cli: &Cli) -> Result<Config> {
    let loaded = load_settings(cli.config.as_deref(), cli.no_config)?;
    if let Some(source) = &loaded.source {
        log::info!("using configuration from {}", source.display());
    }

    let mut config = Config::default();
    config.apply(loaded.settings);
    config.apply(cli.to_settings()?);
    log::debug!("effective configuration: {config:?}");
    Ok(config)
}

/// Per-file ignored codes, keyed by canonical path so `./a.rst` and `a.rst`
/// name the same file.
#[derive(Debug, Default)]
pub(crate) struct PathIgnores {
    entries: IndexMap<PathBuf, IndexSet<Code>>,
}

impl PathIgnores {
    pub(crate) fn from_config(config: &Config) -> Self {
        let mut entries: IndexMap<PathBuf, IndexSet<Code>> = IndexMap::new();
        for (path, codes) in &config.ignore_path_errors {
            entries
                .entry(canonical(path))
                .or_default()
                .extend(codes.iter().copied());
        }
        Self { entries }
    }

    pub(crate) fn codes_for(&self, path: &Path) -> Option<&IndexSet<Code>> {
        if self.entries.is_empty() {
            return None;
        }
        self.entries.get(&canonical(path))
    }
}

fn canonical(path: &Path) -> PathBuf {
    dunce::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Everything a check run needs, built once from the effective config.
pub(crate) struct CheckContext {
    pub rules: RuleSet,
    pub scanner: DirectoryScanner<GlobFilter>,
    pub path_ignores: PathIgnores,
}

impl CheckContext {
    /// # Errors
    /// Returns an error if an `ignore-path` glob is invalid.
    pub(crate) fn from_config(config: &Config) -> Result<Self> {
        let filter = GlobFilter::from_config(config)?;
        Ok(Self {
            rules: RuleSet::from_config(config),
            scanner: DirectoryScanner::with_gitignore(filter, config.use_gitignore),
            path_ignores: PathIgnores::from_config(config),
        })
    }
}

/// Read and decode one file.
///
/// # Errors
/// Returns [`Doc8Error::FileRead`] or [`Doc8Error::Decode`].
pub(crate) fn read_document(path: &Path) -> Result<Document> {
    let bytes = std::fs::read(path).map_err(|source| Doc8Error::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    Document::decode(path, bytes)
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
