use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::StyleError;

/// TeX engine that typesets the target document (and the pgf output)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TexEngine {
    Latex,
    Xelatex,
    Lualatex,
}

impl TexEngine {
    pub const ALL: [TexEngine; 3] = [TexEngine::Latex, TexEngine::Xelatex, TexEngine::Lualatex];

    /// Name as passed to `pgf.texsystem`
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Latex => "latex",
            Self::Xelatex => "xelatex",
            Self::Lualatex => "lualatex",
        }
    }
}

impl FromStr for TexEngine {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "latex" => Ok(Self::Latex),
            "xelatex" => Ok(Self::Xelatex),
            "lualatex" => Ok(Self::Lualatex),
            other => Err(StyleError::InvalidEngine(other.to_string())),
        }
    }
}

impl fmt::Display for TexEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Texsystem that only reads ASCII input and needs explicit encodings.
pub const ASCII_TEXSYSTEM: &str = "pdflatex";

/// Lines prepended to `pgf.preamble` for a given texsystem name.
///
/// Only `pdflatex` gets any, and it is not a `TexEngine`, so the builder never
/// hits this branch today. It starts mattering once the enum grows.
pub fn encoding_preamble(texsystem: &str) -> &'static [&'static str] {
    if texsystem == ASCII_TEXSYSTEM {
        &[r"\usepackage[utf8x]{inputenc}", r"\usepackage[T1]{fontenc}"]
    } else {
        &[]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_supported_engine() {
        for engine in TexEngine::ALL {
            assert_eq!(engine.as_str().parse::<TexEngine>().unwrap(), engine);
        }
    }

    #[test]
    fn rejects_unknown_engine() {
        for name in ["pdflatex", "LuaLaTeX", "", "context"] {
            let err = name.parse::<TexEngine>().unwrap_err();
            assert_eq!(err, StyleError::InvalidEngine(name.to_string()));
        }
    }

    #[test]
    fn error_message_lists_choices() {
        let err = "tectonic".parse::<TexEngine>().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("tectonic"));
        assert!(msg.contains("'latex', 'xelatex' or 'lualatex'"));
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&TexEngine::Xelatex).unwrap();
        assert_eq!(json, r#""xelatex""#);
        let parsed: TexEngine = serde_json::from_str(r#""lualatex""#).unwrap();
        assert_eq!(parsed, TexEngine::Lualatex);
    }

    #[test]
    fn encoding_preamble_only_for_pdflatex() {
        assert_eq!(
            encoding_preamble("pdflatex"),
            &[r"\usepackage[utf8x]{inputenc}", r"\usepackage[T1]{fontenc}"]
        );
        for engine in TexEngine::ALL {
            assert!(encoding_preamble(engine.as_str()).is_empty());
        }
    }
}
