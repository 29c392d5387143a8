// Style sinks
// The plotting library's global style registry, seen from our side

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::StyleError;
use crate::value::{RcParams, Value};

/// Where built settings get written.
///
/// Mirrors the three operations a plotting library exposes on its global
/// style state. Writes are last-writer-wins; nothing is ever rolled back.
pub trait StyleSink {
    /// Set one rc param
    fn update(&mut self, key: &str, value: &Value);

    /// Render files of `format` through `backend` without switching the
    /// active backend
    fn register_backend(&mut self, format: &str, backend: &str);

    /// Switch the active backend for everything
    fn use_backend(&mut self, backend: &str);
}

impl<S: StyleSink + ?Sized> StyleSink for &mut S {
    fn update(&mut self, key: &str, value: &Value) {
        (**self).update(key, value)
    }

    fn register_backend(&mut self, format: &str, backend: &str) {
        (**self).register_backend(format, backend)
    }

    fn use_backend(&mut self, backend: &str) {
        (**self).use_backend(backend)
    }
}

/// In-memory style registry
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleRegistry {
    params: RcParams,
    backends: BTreeMap<String, String>,
    active_backend: Option<String>,
}

impl StyleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.params.get(key)
    }

    pub fn params(&self) -> &RcParams {
        &self.params
    }

    /// Backend registered for an output format, e.g. "pdf"
    pub fn backend_for(&self, format: &str) -> Option<&str> {
        self.backends.get(format).map(String::as_str)
    }

    pub fn active_backend(&self) -> Option<&str> {
        self.active_backend.as_deref()
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Render params as matplotlibrc text, one `key : value` per line.
    /// A `backend` line is emitted first when a backend was switched on.
    ///
    /// Fails on values the rc parser would read back differently: list items
    /// containing `,` (lists are split on commas), and any `#` or line break.
    pub fn to_rc_string(&self) -> Result<String, StyleError> {
        let mut out = String::new();
        if let Some(backend) = &self.active_backend {
            out.push_str(&format!("backend : {backend}\n"));
        }
        for (key, value) in &self.params {
            check_rc_value(key, value, false)?;
            out.push_str(&format!("{key} : {value}\n"));
        }
        Ok(out)
    }

    /// Write `to_rc_string()` to disk, creating parent directories
    pub fn write_rc_file(&self, path: &Path) -> Result<(), StyleError> {
        let rc = self.to_rc_string()?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| StyleError::Io(e.to_string()))?;
            }
        }
        fs::write(path, rc).map_err(|e| StyleError::Io(e.to_string()))?;
        log::debug!("Wrote {} rc params to {}", self.params.len(), path.display());
        Ok(())
    }
}

fn check_rc_value(key: &str, value: &Value, in_list: bool) -> Result<(), StyleError> {
    let fail = |reason: &'static str| {
        Err(StyleError::Unrepresentable {
            key: key.to_string(),
            reason,
        })
    };
    match value {
        Value::String(s) => {
            if s.contains('#') {
                return fail("'#' starts a comment");
            }
            if s.contains(['\n', '\r']) {
                return fail("line breaks end the entry");
            }
            if in_list && s.contains(',') {
                return fail("list item contains ','");
            }
            Ok(())
        }
        Value::List(items) => items.iter().try_for_each(|item| check_rc_value(key, item, true)),
        Value::Map(_) => fail("tables have no rc syntax"),
        Value::Null | Value::Bool(_) | Value::Number(_) => Ok(()),
    }
}

impl StyleSink for StyleRegistry {
    fn update(&mut self, key: &str, value: &Value) {
        self.params.insert(key.to_string(), value.clone());
    }

    fn register_backend(&mut self, format: &str, backend: &str) {
        self.backends.insert(format.to_string(), backend.to_string());
    }

    fn use_backend(&mut self, backend: &str) {
        self.active_backend = Some(backend.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_is_last_writer_wins() {
        let mut reg = StyleRegistry::new();
        reg.update("font.size", &Value::Number(11.0));
        reg.update("font.size", &Value::Number(12.0));
        assert_eq!(reg.len(), 1);
        assert_eq!(reg.get("font.size"), Some(&Value::Number(12.0)));
    }

    #[test]
    fn register_does_not_switch_active_backend() {
        let mut reg = StyleRegistry::new();
        reg.register_backend("pdf", "pgf");
        assert_eq!(reg.backend_for("pdf"), Some("pgf"));
        assert_eq!(reg.active_backend(), None);

        reg.use_backend("pgf");
        assert_eq!(reg.active_backend(), Some("pgf"));
    }

    #[test]
    fn rc_string_is_sorted_with_backend_first() {
        let mut reg = StyleRegistry::new();
        reg.update("text.usetex", &Value::Bool(true));
        reg.update("font.family", &Value::from("serif"));
        reg.use_backend("pgf");

        assert_eq!(
            reg.to_rc_string().unwrap(),
            "backend : pgf\nfont.family : serif\ntext.usetex : True\n"
        );
    }

    #[test]
    fn rc_string_rejects_comma_in_list_item() {
        let mut reg = StyleRegistry::new();
        reg.update(
            "text.latex.preamble",
            &Value::string_list([r"\usepackage[locale=US,per-mode=symbol]{siunitx}"]),
        );
        let err = reg.to_rc_string().unwrap_err();
        assert!(matches!(
            err,
            StyleError::Unrepresentable { ref key, .. } if key == "text.latex.preamble"
        ));

        // same text as a plain string is fine
        let mut reg = StyleRegistry::new();
        reg.update("pgf.texsystem", &Value::from("a,b"));
        assert_eq!(reg.to_rc_string().unwrap(), "pgf.texsystem : a,b\n");
    }

    #[test]
    fn rc_string_rejects_hash_breaks_and_tables() {
        for value in [
            Value::from(r"\newcommand{\#}{x}"),
            Value::string_list(["a\nb"]),
            Value::Map(Default::default()),
        ] {
            let mut reg = StyleRegistry::new();
            reg.update("k", &value);
            assert!(matches!(
                reg.to_rc_string(),
                Err(StyleError::Unrepresentable { .. })
            ));
        }
    }

    #[test]
    fn rc_string_writes_none() {
        let mut reg = StyleRegistry::new();
        reg.update("savefig.bbox", &Value::Null);
        assert_eq!(reg.to_rc_string().unwrap(), "savefig.bbox : None\n");
    }

    #[test]
    fn failed_rc_write_leaves_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("matplotlibrc");
        let mut reg = StyleRegistry::new();
        reg.update("text.latex.preamble", &Value::string_list(["a,b"]));
        assert!(reg.write_rc_file(&path).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn write_rc_file_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mpl").join("matplotlibrc");

        let mut reg = StyleRegistry::new();
        reg.update("font.size", &Value::Number(10.95));
        reg.write_rc_file(&path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "font.size : 10.95\n");
    }

    #[test]
    fn sink_through_mut_ref() {
        fn push(mut sink: impl StyleSink) {
            sink.update("a", &Value::Bool(false));
        }
        let mut reg = StyleRegistry::new();
        push(&mut reg);
        assert_eq!(reg.get("a"), Some(&Value::Bool(false)));
    }
}
