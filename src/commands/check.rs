use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::checker::FileFindings;
use crate::cli::Cli;
use crate::error::Result;
use crate::output::{
    ColorMode, ErrorOutput, JsonFormatter, OutputFormat, OutputFormatter, TextFormatter,
};
use crate::report::Report;
use crate::scanner::find_files;
use crate::{EXIT_CONFIG_ERROR, EXIT_FINDINGS, EXIT_SUCCESS};

use super::context::{CheckContext, build_config, read_document};

#[must_use]
pub fn run_check(cli: &Cli) -> i32 {
    match run_check_impl(cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            ErrorOutput::new(cli.color.into()).print_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

pub(crate) fn run_check_impl(cli: &Cli) -> Result<i32> {
    let config = build_config(cli)?;
    let ctx = CheckContext::from_config(&config)?;
    let color_mode: ColorMode = cli.color.into();

    let discovery = find_files(&ctx.scanner, &cli.paths)?;
    if !cli.quiet {
        let errors = ErrorOutput::new(color_mode);
        for root in &discovery.invalid_roots {
            errors.print_warning(&format!("path not found: {}", root.display()));
        }
    }
    log::debug!("discovered {} file(s)", discovery.files.len());

    let report = check_files(&ctx, &discovery.files)?;

    let output = format_report(cli.format, &report, color_mode, cli.verbose > 0 && !cli.quiet)?;
    if !output.is_empty() {
        print!("{output}");
    }

    Ok(if report.is_clean() {
        EXIT_SUCCESS
    } else {
        EXIT_FINDINGS
    })
}

/// Check `files` in parallel, keeping discovery order. Any read or decode
/// failure aborts the whole run.
///
/// # Errors
/// Returns the error of the earliest failing file in discovery order.
pub(crate) fn check_files(ctx: &CheckContext, files: &[PathBuf]) -> Result<Report> {
    let outcomes: Vec<Result<FileFindings>> = files
        .par_iter()
        .map(|path| check_file(ctx, path))
        .collect();
    let results = outcomes.into_iter().collect::<Result<Vec<_>>>()?;
    Ok(Report::new(results))
}

fn check_file(ctx: &CheckContext, path: &Path) -> Result<FileFindings> {
    let document = read_document(path)?;
    let mut findings = ctx.rules.check(&document);
    if let Some(ignored) = ctx.path_ignores.codes_for(path) {
        findings.retain(|finding| !ignored.contains(&finding.code));
    }

    log::info!(
        "{}: {} line(s), {} error(s)",
        path.display(),
        document.len(),
        findings.len()
    );
    Ok(FileFindings::new(path.to_path_buf(), findings))
}

pub(crate) fn format_report(
    format: OutputFormat,
    report: &Report,
    color_mode: ColorMode,
    verbose: bool,
) -> Result<String> {
    match format {
        OutputFormat::Text => TextFormatter::with_verbose(color_mode, verbose).format(report),
        OutputFormat::Json => JsonFormatter.format(report),
    }
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
