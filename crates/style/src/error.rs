use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum StyleError {
    /// TeX engine name outside the supported set.
    InvalidEngine(String),
    /// A length or font size that is not a finite positive number.
    InvalidDimension { name: &'static str, value: f64 },
    /// Value that matplotlibrc syntax cannot carry without changing it.
    Unrepresentable { key: String, reason: &'static str },
    /// IO error (rc file write, etc.).
    Io(String),
}

impl fmt::Display for StyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEngine(name) => write!(
                f,
                "invalid texengine '{name}': must be one of 'latex', 'xelatex' or 'lualatex'"
            ),
            Self::InvalidDimension { name, value } => {
                write!(f, "'{name}' must be a positive number, got {value}")
            }
            Self::Unrepresentable { key, reason } => {
                write!(f, "cannot write '{key}' to matplotlibrc: {reason}")
            }
            Self::Io(msg) => write!(f, "IO error: {msg}"),
        }
    }
}

impl std::error::Error for StyleError {}
