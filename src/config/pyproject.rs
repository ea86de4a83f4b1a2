//! `[tool.doc8]` table of a `pyproject.toml`-style TOML file.

use serde::Deserialize;

use crate::error::Result;

use super::model::Settings;
use super::values::{parse_codes, parse_list, parse_path_errors};

#[derive(Debug, Default, Deserialize)]
struct PyProject {
    #[serde(default)]
    tool: Option<Tools>,
}

#[derive(Debug, Default, Deserialize)]
struct Tools {
    #[serde(default)]
    doc8: Option<TomlSettings>,
}

/// A list option may be written as a TOML array or a comma-separated string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ListValue {
    One(String),
    Many(Vec<String>),
}

impl ListValue {
    fn into_items(self) -> Vec<String> {
        match self {
            Self::One(value) => parse_list(&value),
            Self::Many(values) => values
                .iter()
                .flat_map(|value| parse_list(value))
                .collect(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct TomlSettings {
    #[serde(alias = "max_line_length")]
    max_line_length: Option<usize>,
    ignore: Option<ListValue>,
    #[serde(alias = "ignore_path")]
    ignore_path: Option<ListValue>,
    #[serde(alias = "ignore_path_errors")]
    ignore_path_errors: Option<ListValue>,
    #[serde(alias = "extensions")]
    extension: Option<ListValue>,
    #[serde(alias = "literal_blocks")]
    literal_blocks: Option<bool>,
    gitignore: Option<bool>,
}

/// Parse the `[tool.doc8]` table; `None` when the file has no such table.
///
/// # Errors
/// Returns an error if the TOML is malformed or holds unknown codes.
pub fn settings_from_toml(content: &str) -> Result<Option<Settings>> {
    let project: PyProject = toml::from_str(content)?;
    let Some(raw) = project.tool.and_then(|tool| tool.doc8) else {
        return Ok(None);
    };

    let mut settings = Settings {
        max_line_length: raw.max_line_length,
        literal_blocks: raw.literal_blocks,
        gitignore: raw.gitignore,
        ..Settings::default()
    };
    if let Some(ignore) = raw.ignore {
        settings.ignore = parse_codes(&ignore.into_items().join(","))?;
    }
    if let Some(paths) = raw.ignore_path {
        settings.ignore_paths = paths.into_items();
    }
    if let Some(entries) = raw.ignore_path_errors {
        settings.ignore_path_errors = entries
            .into_items()
            .iter()
            .map(String::as_str)
            .map(parse_path_errors)
            .collect::<Result<_>>()?;
    }
    if let Some(extensions) = raw.extension {
        settings.extensions = extensions.into_items();
    }

    Ok(Some(settings))
}
