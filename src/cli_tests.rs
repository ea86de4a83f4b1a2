use std::path::PathBuf;

use super::*;
use crate::checker::Code;

#[test]
fn cli_default_path() {
    let cli = Cli::parse_from(["doc8"]);
    assert_eq!(cli.paths, vec![PathBuf::from(".")]);
    assert_eq!(cli.format, OutputFormat::Text);
    assert!(!cli.quiet);
    assert_eq!(cli.verbose, 0);
}

#[test]
fn cli_with_paths() {
    let cli = Cli::parse_from(["doc8", "docs", "README.rst"]);
    assert_eq!(
        cli.paths,
        vec![PathBuf::from("docs"), PathBuf::from("README.rst")]
    );
}

#[test]
fn cli_verbose_count() {
    let cli = Cli::parse_from(["doc8", "-vv"]);
    assert_eq!(cli.verbose, 2);
}

#[test]
fn cli_quiet_conflicts_with_verbose() {
    assert!(Cli::try_parse_from(["doc8", "-q", "-v"]).is_err());
}

#[test]
fn cli_config_conflicts_with_no_config() {
    assert!(Cli::try_parse_from(["doc8", "--config", "tox.ini", "--no-config"]).is_err());
}

#[test]
fn cli_json_format() {
    let cli = Cli::parse_from(["doc8", "--format", "json"]);
    assert_eq!(cli.format, OutputFormat::Json);
    assert!(Cli::try_parse_from(["doc8", "--format", "xml"]).is_err());
}

#[test]
fn default_cli_settings_are_empty() {
    let settings = Cli::parse_from(["doc8"]).to_settings().unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn ignore_accepts_comma_lists_and_repeats() {
    let cli = Cli::parse_from(["doc8", "--ignore", "D001, d002", "--ignore", "D004"]);
    let settings = cli.to_settings().unwrap();
    assert_eq!(settings.ignore, vec![Code::D001, Code::D002, Code::D004]);
}

#[test]
fn unknown_ignore_code_is_an_error() {
    let cli = Cli::parse_from(["doc8", "--ignore", "D010"]);
    assert!(cli.to_settings().is_err());
}

#[test]
fn scalar_overrides() {
    let cli = Cli::parse_from([
        "doc8",
        "--max-line-length",
        "100",
        "--no-literal-blocks",
        "--gitignore",
    ]);
    let settings = cli.to_settings().unwrap();
    assert_eq!(settings.max_line_length, Some(100));
    assert_eq!(settings.literal_blocks, Some(false));
    assert_eq!(settings.gitignore, Some(true));
}

#[test]
fn ignore_path_errors_entries() {
    let cli = Cli::parse_from([
        "doc8",
        "--ignore-path-errors",
        "docs/api.rst;D001;D002",
        "--ignore-path",
        "docs/_build",
        "--extension",
        "rest",
    ]);
    let settings = cli.to_settings().unwrap();
    assert_eq!(
        settings.ignore_path_errors,
        vec![(PathBuf::from("docs/api.rst"), vec![Code::D001, Code::D002])]
    );
    assert_eq!(settings.ignore_paths, vec!["docs/_build"]);
    assert_eq!(settings.extensions, vec!["rest"]);
}

#[test]
fn color_choice_maps_to_mode() {
    assert_eq!(ColorMode::from(ColorChoice::Never), ColorMode::Never);
    assert_eq!(ColorMode::from(ColorChoice::Always), ColorMode::Always);
    assert_eq!(ColorMode::from(ColorChoice::Auto), ColorMode::Auto);
}
