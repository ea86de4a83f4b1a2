use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Doc8Error;

/// Identifier of the rule a finding originates from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Code {
    /// Line too long.
    D001,
    /// Trailing whitespace.
    D002,
    /// Tab used for indentation.
    D003,
    /// Literal carriage return.
    D004,
}

impl Code {
    pub const ALL: [Self; 4] = [Self::D001, Self::D002, Self::D003, Self::D004];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::D001 => "D001",
            Self::D002 => "D002",
            Self::D003 => "D003",
            Self::D004 => "D004",
        }
    }

    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::D001 => "Line too long",
            Self::D002 => "Trailing whitespace",
            Self::D003 => "Tabulation used for indentation",
            Self::D004 => "Found literal carriage return",
        }
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Code {
    type Err = Doc8Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|code| code.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| Doc8Error::InvalidCode(trimmed.to_string()))
    }
}

/// Parse a comma-separated list of codes, skipping empty tokens.
///
/// # Errors
/// Returns [`Doc8Error::InvalidCode`] for the first token that is not a known code.
pub fn parse_code_list(value: &str) -> crate::Result<Vec<Code>> {
    value
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::parse)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive_and_trimmed() {
        assert_eq!(" d003 ".parse::<Code>().unwrap(), Code::D003);
        assert!(matches!(
            "D005".parse::<Code>(),
            Err(Doc8Error::InvalidCode(code)) if code == "D005"
        ));
    }

    #[test]
    fn code_list_skips_empty_tokens() {
        assert_eq!(
            parse_code_list("D001,, D004 ,").unwrap(),
            vec![Code::D001, Code::D004]
        );
        assert!(parse_code_list("").unwrap().is_empty());
        assert!(parse_code_list("D001,X").is_err());
    }

    #[test]
    fn display_matches_identifier() {
        assert_eq!(Code::D002.to_string(), "D002");
        assert_eq!(Code::D002.message(), "Trailing whitespace");
    }
}
