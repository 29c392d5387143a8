// Document setup files
// Loaded from a TOML (or .json) file, default <config_dir>/texstyle/texstyle.toml

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use texstyle_style::settings::{DEFAULT_PRIM_FONTSIZE_PT, DEFAULT_SEC_FONTSIZE_PT};
use texstyle_style::{RcParams, Settings, SettingsBuilder, StyleSink, TexEngine, Value};

use crate::error::ConfigError;

pub const KEY_TEXTWIDTH: &str = "textwidth_inches";
pub const KEY_TEXENGINE: &str = "texengine";
pub const KEY_PRIM_FONTSIZE: &str = "prim_fontsize_pt";
pub const KEY_SEC_FONTSIZE: &str = "sec_fontsize_pt";
pub const KEY_LATEX_ARGS: &str = "latex_args";

/// Key the toml deserializer wraps datetimes in
const TOML_DATETIME_KEY: &str = "$__toml_private_datetime";

type Document = BTreeMap<String, Value>;

/// Validated contents of a config file
#[derive(Debug, Clone, PartialEq)]
pub struct LatexConfig {
    pub textwidth_inches: f64,
    pub texengine: TexEngine,
    pub prim_fontsize_pt: f64,
    pub sec_fontsize_pt: f64,
    /// Overrides merged over the generated rc params
    pub latex_args: RcParams,
}

impl LatexConfig {
    /// Get the default config file path
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("texstyle")
            .join("texstyle.toml")
    }

    /// Read and validate a file. `.json` files are parsed as JSON, anything
    /// else as TOML.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json_str(&contents)
        } else {
            Self::from_toml_str(&contents)
        }
    }

    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let doc: Document =
            toml::from_str(input).map_err(|e| ConfigError::Parse(e.to_string()))?;
        Self::from_document(doc)
    }

    pub fn from_json_str(input: &str) -> Result<Self, ConfigError> {
        let doc: Document =
            serde_json::from_str(input).map_err(|e| ConfigError::Parse(e.to_string()))?;
        Self::from_document(doc)
    }

    fn from_document(mut doc: Document) -> Result<Self, ConfigError> {
        // Required
        let textwidth_inches = take_number(&mut doc, KEY_TEXTWIDTH)?
            .ok_or_else(|| ConfigError::MissingKey(KEY_TEXTWIDTH.into()))?;
        let texengine = take_string(&mut doc, KEY_TEXENGINE)?
            .ok_or_else(|| ConfigError::MissingKey(KEY_TEXENGINE.into()))?;

        // Optional, each defaulted on its own
        let prim_fontsize_pt =
            take_number(&mut doc, KEY_PRIM_FONTSIZE)?.unwrap_or(DEFAULT_PRIM_FONTSIZE_PT);
        let sec_fontsize_pt =
            take_number(&mut doc, KEY_SEC_FONTSIZE)?.unwrap_or(DEFAULT_SEC_FONTSIZE_PT);
        let latex_args = match doc.remove(KEY_LATEX_ARGS) {
            None => RcParams::new(),
            Some(Value::Map(map)) => {
                if let Some(key) = map.iter().find(|(_, v)| is_datetime(v)).map(|(k, _)| k) {
                    return Err(ConfigError::InvalidValue {
                        key: format!("{KEY_LATEX_ARGS}.{key}"),
                        expected: "a bool, number, string, list or table, not a datetime",
                    });
                }
                map
            }
            Some(_) => {
                return Err(ConfigError::InvalidValue {
                    key: KEY_LATEX_ARGS.into(),
                    expected: "a table",
                })
            }
        };

        if !doc.is_empty() {
            return Err(ConfigError::UnrecognizedKeys(doc.into_keys().collect()));
        }

        Ok(Self {
            textwidth_inches,
            texengine: texengine.parse()?,
            prim_fontsize_pt,
            sec_fontsize_pt,
            latex_args,
        })
    }

    pub fn into_builder(self, interactive: bool) -> SettingsBuilder {
        SettingsBuilder::new(self.textwidth_inches, self.texengine)
            .prim_fontsize_pt(self.prim_fontsize_pt)
            .sec_fontsize_pt(self.sec_fontsize_pt)
            .interactive(interactive)
            .overrides(self.latex_args)
    }
}

fn is_datetime(value: &Value) -> bool {
    match value {
        Value::Map(map) => map.contains_key(TOML_DATETIME_KEY) || map.values().any(is_datetime),
        Value::List(items) => items.iter().any(is_datetime),
        _ => false,
    }
}

fn take_number(doc: &mut Document, key: &str) -> Result<Option<f64>, ConfigError> {
    match doc.remove(key) {
        None => Ok(None),
        Some(Value::Number(n)) => Ok(Some(n)),
        Some(_) => Err(ConfigError::InvalidValue {
            key: key.into(),
            expected: "a number",
        }),
    }
}

fn take_string(doc: &mut Document, key: &str) -> Result<Option<String>, ConfigError> {
    match doc.remove(key) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(_) => Err(ConfigError::InvalidValue {
            key: key.into(),
            expected: "a string",
        }),
    }
}

/// Load a config file and apply it to `sink`
pub fn load<S: StyleSink + ?Sized>(
    path: &Path,
    interactive: bool,
    sink: &mut S,
) -> Result<Settings, ConfigError> {
    let config = LatexConfig::from_path(path)?;
    log::info!(
        "Loaded texstyle config from {} (engine={}, textwidth={}in)",
        path.display(),
        config.texengine,
        config.textwidth_inches
    );
    Ok(config.into_builder(interactive).apply(sink)?)
}

/// Load from `LatexConfig::default_path()`
pub fn load_default<S: StyleSink + ?Sized>(
    interactive: bool,
    sink: &mut S,
) -> Result<Settings, ConfigError> {
    load(&LatexConfig::default_path(), interactive, sink)
}
