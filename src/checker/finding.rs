use std::path::{Path, PathBuf};

use serde::Serialize;

use super::Code;

/// One style violation within a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Finding {
    /// 1-based line number.
    pub line: usize,
    pub code: Code,
    pub message: &'static str,
}

impl Finding {
    /// Build a finding from a 0-based line index.
    #[must_use]
    pub const fn at_index(index: usize, code: Code) -> Self {
        Self {
            line: index + 1,
            code,
            message: code.message(),
        }
    }
}

/// All findings produced for a single file, in report order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFindings {
    pub path: PathBuf,
    pub findings: Vec<Finding>,
}

impl FileFindings {
    #[must_use]
    pub const fn new(path: PathBuf, findings: Vec<Finding>) -> Self {
        Self { path, findings }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }
}
