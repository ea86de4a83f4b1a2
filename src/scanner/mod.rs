mod filter;

pub use filter::{FileFilter, GlobFilter};

use std::path::{Path, PathBuf};

use indexmap::IndexSet;
use walkdir::WalkDir;

use crate::error::Result;

/// Trait for scanning directories and finding files.
pub trait FileScanner {
    /// Scan a directory and return all matching file paths in a stable order.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be read.
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>>;
}

pub struct DirectoryScanner<F: FileFilter> {
    filter: F,
    use_gitignore: bool,
}

impl<F: FileFilter> DirectoryScanner<F> {
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self {
            filter,
            use_gitignore: false,
        }
    }

    #[must_use]
    pub const fn with_gitignore(filter: F, use_gitignore: bool) -> Self {
        Self {
            filter,
            use_gitignore,
        }
    }

    fn scan_impl(&self, root: &Path) -> Vec<PathBuf> {
        if self.use_gitignore {
            self.scan_with_gitignore(root)
        } else {
            self.scan_without_gitignore(root)
        }
    }

    fn scan_without_gitignore(&self, root: &Path) -> Vec<PathBuf> {
        WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !self.filter.is_excluded(e.path()))
            .filter_map(|entry| {
                entry
                    .map_err(|e| log::debug!("skipping unreadable entry: {e}"))
                    .ok()
            })
            .filter(|e| e.file_type().is_file() && self.filter.should_include(e.path()))
            .map(walkdir::DirEntry::into_path)
            .collect()
    }

    fn scan_with_gitignore(&self, root: &Path) -> Vec<PathBuf> {
        use ignore::WalkBuilder;

        WalkBuilder::new(root)
            .git_ignore(true)
            .git_global(true)
            .git_exclude(true)
            .require_git(false)
            .hidden(false)
            .parents(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .build()
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_type().is_some_and(|ft| ft.is_file()))
            .filter(|e| self.filter.should_include(e.path()))
            .map(ignore::DirEntry::into_path)
            .collect()
    }
}

impl<F: FileFilter> FileScanner for DirectoryScanner<F> {
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>> {
        Ok(self.scan_impl(root))
    }
}

/// Files found under a set of roots.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Discovery {
    /// Files to check, in discovery order without duplicates.
    pub files: Vec<PathBuf>,
    /// Roots that were neither a file nor a directory.
    pub invalid_roots: Vec<PathBuf>,
}

/// Expand `roots` into the files to check.
///
/// A root that is a file is taken as-is, without extension filtering. A
/// directory is walked through `scanner`. Anything else is reported in
/// [`Discovery::invalid_roots`] and skipped.
///
/// # Errors
/// Returns an error if a directory scan fails.
pub fn find_files<S: FileScanner>(scanner: &S, roots: &[PathBuf]) -> Result<Discovery> {
    let mut files = IndexSet::new();
    let mut invalid_roots = Vec::new();

    for root in roots {
        if root.is_file() {
            files.insert(root.clone());
        } else if root.is_dir() {
            files.extend(scanner.scan(root)?);
        } else {
            invalid_roots.push(root.clone());
        }
    }

    Ok(Discovery {
        files: files.into_iter().collect(),
        invalid_roots,
    })
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
