use std::path::{Path, PathBuf};

use crate::error::{Doc8Error, Result};

use super::filesystem::{FileSystem, RealFileSystem};
use super::ini::{SECTION, find_section, settings_from_section};
use super::model::Settings;
use super::pyproject::settings_from_toml;

/// Files searched in the working directory, in priority order.
pub const CONFIG_FILENAMES: [&str; 5] = [
    "doc8.ini",
    "tox.ini",
    "pep8.ini",
    "setup.cfg",
    "pyproject.toml",
];

/// Settings read from a configuration file and where they came from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadResult {
    pub settings: Settings,
    /// File the settings were read from; `None` when no file was found.
    pub source: Option<PathBuf>,
}

/// Trait for loading configuration from various sources.
pub trait ConfigLoader {
    /// Load settings from the first existing file in the working directory.
    ///
    /// # Errors
    /// Returns an error if the chosen file cannot be read or holds invalid values.
    fn load(&self) -> Result<LoadResult>;

    /// Load settings from a specific file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or holds invalid values.
    fn load_from_path(&self, path: &Path) -> Result<LoadResult>;
}

/// Loads configuration from the filesystem.
///
/// The first existing file of [`CONFIG_FILENAMES`] wins, even when it has no
/// `doc8` section. Missing files, sections and keys fall back to defaults.
#[derive(Debug)]
pub struct FileConfigLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl Default for FileConfigLoader<RealFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl FileConfigLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl<F: FileSystem> FileConfigLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    fn discover(&self) -> Result<Option<PathBuf>> {
        let cwd = self.fs.current_dir()?;
        Ok(CONFIG_FILENAMES
            .iter()
            .map(|name| cwd.join(name))
            .find(|candidate| self.fs.is_file(candidate)))
    }

    fn parse(path: &Path, content: &str) -> Result<Settings> {
        let source_name = path.display().to_string();
        let is_toml = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        let settings = if is_toml {
            settings_from_toml(content)?
        } else {
            find_section(content, SECTION)
                .map(|section| settings_from_section(&section, &source_name))
                .transpose()?
        };

        if settings.is_none() {
            log::debug!("{source_name} has no doc8 section, using defaults");
        }
        Ok(settings.unwrap_or_default())
    }
}

impl<F: FileSystem> ConfigLoader for FileConfigLoader<F> {
    fn load(&self) -> Result<LoadResult> {
        match self.discover()? {
            Some(path) => self.load_from_path(&path),
            None => {
                log::debug!("no configuration file found, using defaults");
                Ok(LoadResult::default())
            }
        }
    }

    fn load_from_path(&self, path: &Path) -> Result<LoadResult> {
        let content = self
            .fs
            .read_to_string(path)
            .map_err(|source| Doc8Error::FileRead {
                path: path.to_path_buf(),
                source,
            })?;
        log::debug!("loading configuration from {}", path.display());

        Ok(LoadResult {
            settings: Self::parse(path, &content)?,
            source: Some(path.to_path_buf()),
        })
    }
}

#[cfg(test)]
#[path = "loader_tests/mod.rs"]
mod tests;
