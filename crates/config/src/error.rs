use std::fmt;

use texstyle_style::StyleError;

#[derive(Debug)]
pub enum ConfigError {
    /// File could not be read (missing file, permissions, ...).
    Io { path: String, message: String },
    /// TOML / JSON parse error, or a top level that is not a table.
    Parse(String),
    /// Required key absent.
    MissingKey(String),
    /// Key present with the wrong type.
    InvalidValue { key: String, expected: &'static str },
    /// Keys left over after extracting the known ones.
    UnrecognizedKeys(Vec<String>),
    /// The values were read but the settings could not be built.
    Style(StyleError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, message } => write!(f, "cannot read '{path}': {message}"),
            Self::Parse(msg) => write!(f, "config parse error: {msg}"),
            Self::MissingKey(key) => write!(f, "missing required key '{key}'"),
            Self::InvalidValue { key, expected } => {
                write!(f, "key '{key}': expected {expected}")
            }
            Self::UnrecognizedKeys(keys) => {
                let quoted: Vec<String> = keys.iter().map(|k| format!("'{k}'")).collect();
                write!(f, "unrecognized key(s): {}", quoted.join(", "))
            }
            Self::Style(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Style(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StyleError> for ConfigError {
    fn from(err: StyleError) -> Self {
        Self::Style(err)
    }
}
