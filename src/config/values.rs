//! Parsing of individual option values shared by the INI and TOML sources.

use std::path::PathBuf;

use crate::checker::{Code, parse_code_list};
use crate::error::{Doc8Error, Result};

/// Split a list value on commas and newlines, trimming and dropping empty tokens.
pub fn parse_list(value: &str) -> Vec<String> {
    value
        .split([',', '\n'])
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse the codes of an `ignore` value.
///
/// # Errors
/// Returns [`Doc8Error::InvalidCode`] for an unknown code.
pub fn parse_codes(value: &str) -> Result<Vec<Code>> {
    parse_code_list(&value.replace('\n', ","))
}

/// # Errors
/// Returns [`Doc8Error::InvalidValue`] if `value` is not an integer.
pub fn parse_usize(key: &str, value: &str, source_name: &str) -> Result<usize> {
    value
        .trim()
        .parse()
        .map_err(|_| invalid(key, value, source_name))
}

/// # Errors
/// Returns [`Doc8Error::InvalidValue`] if `value` is not a recognized boolean.
pub fn parse_bool(key: &str, value: &str, source_name: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(invalid(key, value, source_name)),
    }
}

/// Parse one `path;CODE;CODE` entry of `ignore-path-errors`.
///
/// # Errors
/// Returns an error if the entry has no path, no codes, or an unknown code.
pub fn parse_path_errors(entry: &str) -> Result<(PathBuf, Vec<Code>)> {
    let mut parts = entry.split(';').map(str::trim);
    let path = parts.next().filter(|p| !p.is_empty()).ok_or_else(|| {
        Doc8Error::Config(format!("ignore-path-errors entry '{entry}' has no path"))
    })?;
    let codes = parts
        .filter(|token| !token.is_empty())
        .map(str::parse)
        .collect::<Result<Vec<Code>>>()?;
    if codes.is_empty() {
        return Err(Doc8Error::Config(format!(
            "ignore-path-errors entry '{entry}' must name at least one code"
        )));
    }
    Ok((PathBuf::from(path), codes))
}

fn invalid(key: &str, value: &str, source_name: &str) -> Doc8Error {
    Doc8Error::InvalidValue {
        key: key.to_string(),
        value: value.trim().to_string(),
        source_name: source_name.to_string(),
    }
}
