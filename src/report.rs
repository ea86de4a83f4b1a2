use indexmap::IndexMap;

use crate::checker::{Code, FileFindings, Finding};

/// Outcome of a whole run: every checked file with its reportable findings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub files: Vec<FileFindings>,
}

impl Report {
    #[must_use]
    pub const fn new(files: Vec<FileFindings>) -> Self {
        Self { files }
    }

    #[must_use]
    pub fn files_scanned(&self) -> usize {
        self.files.len()
    }

    #[must_use]
    pub fn total_errors(&self) -> usize {
        self.files.iter().map(|file| file.findings.len()).sum()
    }

    /// True when no findings were produced.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.files.iter().all(FileFindings::is_clean)
    }

    /// Finding count for every code, in code order, including zero counts.
    #[must_use]
    pub fn counts_by_code(&self) -> IndexMap<Code, usize> {
        let mut counts: IndexMap<Code, usize> = Code::ALL.into_iter().map(|c| (c, 0)).collect();
        for finding in self.findings() {
            *counts.entry(finding.code).or_default() += 1;
        }
        counts
    }

    /// All findings paired with their file, in report order.
    pub fn located_findings(&self) -> impl Iterator<Item = (&FileFindings, &Finding)> {
        self.files
            .iter()
            .flat_map(|file| file.findings.iter().map(move |finding| (file, finding)))
    }

    fn findings(&self) -> impl Iterator<Item = &Finding> {
        self.files.iter().flat_map(|file| file.findings.iter())
    }
}
