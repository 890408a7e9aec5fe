//! Answer values and their comparison-ready forms.

pub mod answers;
pub mod normalize;

pub use answers::AnswerSet;

use serde::{Deserialize, Serialize};
use std::{borrow::Cow, fmt};

///
/// Value
///
/// One answer as collected from a respondent: text, number, boolean, a list
/// of selected choice values, or empty. Untagged on the wire, so the JSON
/// shape is the natural one (`"x"`, `3`, `true`, `["a","b"]`, `null`).
/// Unanswered fields are `Empty`, never absent, so emptiness checks are
/// always well-defined.
///

#[remain::sorted]
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    #[default]
    Empty,
    List(Vec<String>),
    Number(f64),
    Text(String),
}

impl Value {
    /// Raw text form: numbers render integral values without a trailing
    /// `.0`, booleans as `true`/`false`, lists comma-joined, empty as `""`.
    /// Case is preserved; comparison folding happens in [`normalize`].
    #[must_use]
    pub fn canonical_text(&self) -> Cow<'_, str> {
        match self {
            Self::Bool(b) => Cow::Borrowed(if *b { "true" } else { "false" }),
            Self::Empty => Cow::Borrowed(""),
            Self::List(items) => Cow::Owned(items.join(",")),
            Self::Number(n) => Cow::Owned(number_text(*n)),
            Self::Text(s) => Cow::Borrowed(s),
        }
    }

    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical_text())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<Vec<String>> for Value {
    fn from(items: Vec<String>) -> Self {
        Self::List(items)
    }
}

// answer ingestion maps JSON null through Option
impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Empty, Into::into)
    }
}

fn number_text(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 {
        format!("{n:.0}")
    } else {
        n.to_string()
    }
}

/// Case-fold for comparisons, with an ASCII fast path that avoids
/// allocating when the input is already lower-case.
#[must_use]
pub fn fold_ci(s: &str) -> Cow<'_, str> {
    if s.is_ascii() {
        if s.bytes().any(|b| b.is_ascii_uppercase()) {
            Cow::Owned(s.to_ascii_lowercase())
        } else {
            Cow::Borrowed(s)
        }
    } else {
        Cow::Owned(s.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untagged_wire_shapes() {
        assert_eq!(
            serde_json::from_str::<Value>("\"hi\"").unwrap(),
            Value::Text("hi".to_string())
        );
        assert_eq!(serde_json::from_str::<Value>("3").unwrap(), Value::Number(3.0));
        assert_eq!(serde_json::from_str::<Value>("true").unwrap(), Value::Bool(true));
        assert_eq!(serde_json::from_str::<Value>("null").unwrap(), Value::Empty);
        assert_eq!(
            serde_json::from_str::<Value>("[\"a\",\"b\"]").unwrap(),
            Value::List(vec!["a".to_string(), "b".to_string()])
        );

        assert_eq!(serde_json::to_string(&Value::Empty).unwrap(), "null");
    }

    #[test]
    fn canonical_text_forms() {
        assert_eq!(Value::Number(30.0).canonical_text(), "30");
        assert_eq!(Value::Number(2.5).canonical_text(), "2.5");
        assert_eq!(Value::Bool(true).canonical_text(), "true");
        assert_eq!(Value::Empty.canonical_text(), "");
        assert_eq!(
            Value::List(vec!["a".to_string(), "b".to_string()]).canonical_text(),
            "a,b"
        );
    }

    #[test]
    fn fold_ci_borrows_when_already_folded() {
        assert!(matches!(fold_ci("already lower"), Cow::Borrowed(_)));
        assert_eq!(fold_ci("MiXeD"), "mixed");
        assert_eq!(fold_ci("ÅNGSTRÖM"), "ångström");
    }

    #[test]
    fn option_maps_none_to_empty() {
        assert_eq!(Value::from(None::<String>), Value::Empty);
        assert_eq!(Value::from(Some("x")), Value::Text("x".to_string()));
    }
}
