use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const EMPTY: Value = Value::Empty;

///
/// AnswerSet
///
/// The per-session mapping from field name to current value, accumulated
/// across pages. Lookups never fail: a name with no entry reads as `Empty`,
/// and the session seeds an explicit `Empty` entry for every field the
/// respondent reaches.
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AnswerSet {
    entries: BTreeMap<String, Value>,
}

impl AnswerSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value for `name`; `Empty` when never set.
    #[must_use]
    pub fn get(&self, name: &str) -> &Value {
        self.entries.get(name).unwrap_or(&EMPTY)
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.entries.insert(name.into(), value.into());
    }

    /// Seed an `Empty` entry for a newly reached field without clobbering an
    /// existing answer.
    pub fn ensure(&mut self, name: impl Into<String>) {
        self.entries.entry(name.into()).or_insert(Value::Empty);
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl FromIterator<(String, Value)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl From<BTreeMap<String, Value>> for AnswerSet {
    fn from(entries: BTreeMap<String, Value>) -> Self {
        Self { entries }
    }
}
