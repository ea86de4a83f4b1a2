use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Doc8Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid value for '{key}' in {source_name}: {value}")]
    InvalidValue {
        key: String,
        value: String,
        source_name: String,
    },

    #[error("Unknown error code: {0}")]
    InvalidCode(String),

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unable to decode {path} as UTF-8")]
    Decode {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl Doc8Error {
    /// Short category label used as the heading of printed errors.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_)
            | Self::InvalidValue { .. }
            | Self::InvalidCode(_)
            | Self::InvalidPattern { .. }
            | Self::TomlParse(_) => "Config",
            Self::FileRead { .. } => "FileRead",
            Self::Decode { .. } => "Decode",
            Self::Io(_) => "IO",
            Self::JsonSerialize(_) => "Output",
        }
    }

    /// Optional hint shown under the error message.
    #[must_use]
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::InvalidCode(_) => Some("Valid codes are D001, D002, D003 and D004"),
            Self::InvalidPattern { .. } => Some("Check glob syntax of 'ignore-path' entries"),
            Self::Decode { .. } => Some("Convert the file to UTF-8 or exclude it with --ignore-path"),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Doc8Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
