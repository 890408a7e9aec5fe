//! Type-aware substitution of `@name` tokens.

use crate::{
    eval::FieldCatalog,
    obs::{MetricsEvent, sink},
    text::reference_spans,
    value::{AnswerSet, Value, fold_ci, normalize},
};
use formflow_schema::types::FieldType;

/// Replace every resolvable `@name` token in `text` with the formatted
/// current value of that field. Unresolvable tokens stay verbatim.
#[must_use]
pub fn interpolate<C: FieldCatalog>(text: &str, answers: &AnswerSet, catalog: &C) -> String {
    let spans = reference_spans(text, catalog);
    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;

    for span in &spans {
        out.push_str(&text[cursor..span.start]);
        out.push_str(&display_value(
            answers.get(span.field.name),
            span.field.field_type,
        ));
        cursor = span.end;
    }
    out.push_str(&text[cursor..]);

    sink::record(MetricsEvent::TextInterpolated {
        tokens: text.matches('@').count() as u64,
        replaced: spans.len() as u64,
    });

    out
}

/// Human-facing formatting for one value.
///
/// Empty renders as nothing, so the token disappears rather than printing a
/// placeholder. Booleans render `Yes`/`No`; a boolean-typed field answered
/// with loose text gets the same treatment through [`truthy`]. Lists join
/// with a comma and space. Everything else is canonical text.
#[must_use]
pub fn display_value(value: &Value, field_type: FieldType) -> String {
    if normalize::is_empty(value) {
        return String::new();
    }

    match value {
        Value::Bool(b) => yes_no(*b).to_string(),
        Value::List(items) => items.join(", "),
        other if field_type == FieldType::Boolean => yes_no(truthy(other)).to_string(),
        other => other.canonical_text().into_owned(),
    }
}

const fn yes_no(b: bool) -> &'static str {
    if b { "Yes" } else { "No" }
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Empty => false,
        Value::List(items) => !items.is_empty(),
        Value::Number(n) => *n != 0.0,
        Value::Text(s) => {
            let folded = fold_ci(s.trim());
            !matches!(folded.as_ref(), "" | "0" | "false" | "no")
        }
    }
}
