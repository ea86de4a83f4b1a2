use indexmap::IndexMap;
use serde::Serialize;

use crate::checker::Code;
use crate::error::Result;
use crate::report::Report;

use super::OutputFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    summary: Summary,
    findings: Vec<JsonFinding<'a>>,
}

#[derive(Serialize)]
struct Summary {
    files_scanned: usize,
    total_errors: usize,
    by_code: IndexMap<Code, usize>,
}

#[derive(Serialize)]
struct JsonFinding<'a> {
    path: String,
    line: usize,
    code: Code,
    message: &'a str,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        let output = JsonOutput {
            summary: Summary {
                files_scanned: report.files_scanned(),
                total_errors: report.total_errors(),
                by_code: report.counts_by_code(),
            },
            findings: report
                .located_findings()
                .map(|(file, finding)| JsonFinding {
                    path: file.path.display().to_string(),
                    line: finding.line,
                    code: finding.code,
                    message: finding.message,
                })
                .collect(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
