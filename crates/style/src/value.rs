// Style values
// Opaque rc param values: whatever the plotting library accepts for a key

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Style key -> value, sorted by key
pub type RcParams = BTreeMap<String, Value>;

/// A single rc param value.
///
/// Deserializes untagged, so a TOML or JSON document can carry any of these
/// without annotations. Integers are widened to `Number`; JSON `null`
/// becomes `Null` (matplotlib's `None`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    List(Vec<Value>),
    Map(BTreeMap<String, Value>),
}

impl Value {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Empty list, used for preambles and font family lists
    pub fn empty_list() -> Self {
        Value::List(Vec::new())
    }

    /// List of strings, e.g. preamble lines
    pub fn string_list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Value::List(items.into_iter().map(|s| Value::String(s.into())).collect())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

/// matplotlibrc syntax: `None`, `True`/`False`, lists comma-joined
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "None"),
            Value::Bool(true) => write!(f, "True"),
            Value::Bool(false) => write!(f, "False"),
            Value::Number(n) => write!(f, "{n}"),
            Value::String(s) => write!(f, "{s}"),
            Value::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
            Value::Map(map) => {
                write!(f, "{{")?;
                for (i, (k, v)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{k}: {v}")?;
                }
                write!(f, "}}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_rc_syntax() {
        assert_eq!(Value::Bool(true).to_string(), "True");
        assert_eq!(Value::Number(10.95).to_string(), "10.95");
        assert_eq!(Value::Number(9.0).to_string(), "9");
        assert_eq!(Value::empty_list().to_string(), "");
        let figsize = Value::List(vec![Value::Number(4.5), Value::Number(2.5)]);
        assert_eq!(figsize.to_string(), "4.5, 2.5");
    }

    #[test]
    fn deserializes_untagged_from_json() {
        let v: Value = serde_json::from_str(r#"["a", 1, true, {"k": 2.5}]"#).unwrap();
        let items = v.as_list().unwrap();
        assert_eq!(items[0].as_str(), Some("a"));
        assert_eq!(items[1].as_f64(), Some(1.0));
        assert_eq!(items[2].as_bool(), Some(true));
        match &items[3] {
            Value::Map(m) => assert_eq!(m["k"], Value::Number(2.5)),
            other => panic!("expected map, got {other:?}"),
        }
    }

    #[test]
    fn null_deserializes_and_displays_as_none() {
        let v: Value = serde_json::from_str(r#"{"savefig.bbox": null}"#).unwrap();
        match v {
            Value::Map(m) => {
                assert_eq!(m["savefig.bbox"], Value::Null);
                assert_eq!(m["savefig.bbox"].to_string(), "None");
            }
            other => panic!("expected map, got {other:?}"),
        }
    }

    #[test]
    fn string_list_builds_strings() {
        let v = Value::string_list([r"\usepackage{a}", r"\usepackage{b}"]);
        assert_eq!(v.as_list().map(|l| l.len()), Some(2));
        assert_eq!(v.as_list().unwrap()[1].as_str(), Some(r"\usepackage{b}"));
    }
}
