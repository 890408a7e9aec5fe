//! Comparison-ready forms of answer values.
//!
//! Every operator sees answers through one of these views: a case-folded
//! string, a parsed f64, an emptiness bit, or the raw list elements. A value
//! that cannot take the requested form is an evaluation miss, never an
//! error.

use crate::value::{Value, fold_ci};
use std::borrow::Cow;

/// Case-folded text form for string-class operators. `Empty` participates
/// as `""` so equality against an unanswered field is well-defined.
#[must_use]
pub fn comparable_text(value: &Value) -> Cow<'_, str> {
    match value {
        Value::Bool(b) => Cow::Borrowed(if *b { "true" } else { "false" }),
        Value::Empty => Cow::Borrowed(""),
        Value::Text(s) => fold_ci(s),
        other => {
            let mut text = other.canonical_text().into_owned();
            if text.is_ascii() {
                text.make_ascii_lowercase();
            } else {
                text = text.to_lowercase();
            }

            Cow::Owned(text)
        }
    }
}

/// Numeric form for ordered comparisons. Booleans coerce to `1`/`0`; text
/// parses after trimming; lists and empty are a miss.
#[must_use]
pub fn numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Empty | Value::List(_) => None,
        Value::Number(n) => Some(*n),
        Value::Text(s) => s.trim().parse().ok(),
    }
}

/// Emptiness per the normalizer: `Empty`, `""`, and `[]` are empty;
/// everything else (including `"0"` and `false`) is not.
#[must_use]
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Empty => true,
        Value::List(items) => items.is_empty(),
        Value::Text(s) => s.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

/// List elements for element-wise `contains`-class comparisons.
#[must_use]
pub fn elements(value: &Value) -> Option<&[String]> {
    match value {
        Value::List(items) => Some(items),
        _ => None,
    }
}
