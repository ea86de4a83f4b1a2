//! Minimal INI reader for the `[doc8]` section of `doc8.ini`, `tox.ini` and friends.
//!
//! Supports `key = value` and `key: value`, full-line `#`/`;` comments and
//! indented continuation lines. Keys are lower-cased with `_` folded to `-`.

use indexmap::IndexMap;

use crate::error::Result;

use super::model::Settings;
use super::values::{parse_bool, parse_codes, parse_list, parse_path_errors, parse_usize};

pub const SECTION: &str = "doc8";

pub type Section = IndexMap<String, String>;

/// Extract the named section, or `None` if the file has no such section.
#[must_use]
pub fn find_section(content: &str, name: &str) -> Option<Section> {
    let mut current: Option<&str> = None;
    let mut section: Option<Section> = None;
    let mut last_key: Option<String> = None;

    for raw in content.lines() {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with(';') {
            continue;
        }

        if let Some(header) = trimmed
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
        {
            current = Some(header.trim());
            last_key = None;
            if current == Some(name) {
                section.get_or_insert_with(Section::new);
            }
            continue;
        }

        if current != Some(name) {
            continue;
        }
        let Some(values) = section.as_mut() else {
            continue;
        };

        if raw.starts_with(char::is_whitespace)
            && let Some(key) = &last_key
            && let Some(value) = values.get_mut(key)
        {
            value.push('\n');
            value.push_str(trimmed);
            continue;
        }

        if let Some((key, value)) = split_entry(trimmed) {
            values.insert(key.clone(), value.to_string());
            last_key = Some(key);
        }
    }

    section
}

fn split_entry(line: &str) -> Option<(String, &str)> {
    let at = line.find(['=', ':'])?;
    let key = line[..at].trim().to_ascii_lowercase().replace('_', "-");
    if key.is_empty() {
        return None;
    }
    Some((key, line[at + 1..].trim()))
}

/// Convert a `[doc8]` section into settings.
///
/// Unknown keys are ignored.
///
/// # Errors
/// Returns an error for malformed integers, booleans or codes.
pub fn settings_from_section(section: &Section, source_name: &str) -> Result<Settings> {
    let mut settings = Settings::default();

    for (key, value) in section {
        match key.as_str() {
            "max-line-length" => {
                settings.max_line_length = Some(parse_usize(key, value, source_name)?);
            }
            "ignore" => settings.ignore = parse_codes(value)?,
            "ignore-path" => settings.ignore_paths = parse_list(value),
            "ignore-path-errors" => {
                settings.ignore_path_errors = parse_list(value)
                    .iter()
                    .map(String::as_str)
                    .map(parse_path_errors)
                    .collect::<Result<_>>()?;
            }
            "extension" | "extensions" => settings.extensions.extend(parse_list(value)),
            "literal-blocks" => {
                settings.literal_blocks = Some(parse_bool(key, value, source_name)?);
            }
            "gitignore" => settings.gitignore = Some(parse_bool(key, value, source_name)?),
            other => log::debug!("ignoring unknown option '{other}' in {source_name}"),
        }
    }

    Ok(settings)
}

#[cfg(test)]
#[path = "ini_tests.rs"]
mod tests;
