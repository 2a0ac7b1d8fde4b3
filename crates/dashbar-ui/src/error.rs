use std::fmt;

use dashbar_attrs::ParseError;

/// Errors raised while turning an attribute sheet into widget configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The sheet itself did not parse.
    Parse(ParseError),
    /// The sheet has no block for the requested widget.
    MissingBlock(String),
    /// A property has the wrong kind or is out of range.
    InvalidValue {
        key: String,
        expected: &'static str,
        found: String,
        line: usize,
        col: usize,
    },
    /// Values parse but describe an unusable widget (e.g. zero dashes).
    InvalidConfiguration(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(e) => write!(f, "{e}"),
            ConfigError::MissingBlock(name) => write!(f, "no `{name}` block in attribute sheet"),
            ConfigError::InvalidValue { key, expected, found, line, col } => {
                write!(f, "{line}:{col}: `{key}` expects {expected}, found {found}")
            }
            ConfigError::InvalidConfiguration(msg) => write!(f, "invalid configuration: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ParseError> for ConfigError {
    fn from(e: ParseError) -> Self {
        ConfigError::Parse(e)
    }
}
