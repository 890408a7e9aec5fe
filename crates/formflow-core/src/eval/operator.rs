//! Pure operator evaluation.
//!
//! One function, no state: `(operator, value, literal) -> bool`. Fail-closed
//! throughout: an unknown operator, a missing literal where one is needed,
//! or a value that cannot take the requested comparison form all evaluate to
//! `false`, never to an error.

use crate::value::{Value, fold_ci, normalize};
use formflow_schema::types::ConditionOperator;

/// Evaluate one operator against a field's current value and an optional
/// literal operand.
#[must_use]
pub fn evaluate(operator: ConditionOperator, value: &Value, literal: Option<&str>) -> bool {
    match operator {
        ConditionOperator::Contains => literal.is_some_and(|lit| text_contains(value, lit)),
        ConditionOperator::Equals => literal.is_some_and(|lit| text_equals(value, lit)),
        ConditionOperator::GreaterEqual => numeric_test(value, literal, |lhs, rhs| lhs >= rhs),
        ConditionOperator::GreaterThan => numeric_test(value, literal, |lhs, rhs| lhs > rhs),
        ConditionOperator::In => literal.is_some_and(|lit| token_member(value, lit)),
        ConditionOperator::IsEmpty => normalize::is_empty(value),
        ConditionOperator::IsNotEmpty => !normalize::is_empty(value),
        ConditionOperator::LessEqual => numeric_test(value, literal, |lhs, rhs| lhs <= rhs),
        ConditionOperator::LessThan => numeric_test(value, literal, |lhs, rhs| lhs < rhs),
        ConditionOperator::NotContains => {
            // An empty needle fails both polarities, so `not_contains` with
            // a blank literal is not vacuously true.
            literal.is_some_and(|lit| !lit.is_empty() && !text_contains(value, lit))
        }
        ConditionOperator::NotEquals => literal.is_some_and(|lit| !text_equals(value, lit)),
        ConditionOperator::NotIn => literal.is_some_and(|lit| !token_member(value, lit)),
        ConditionOperator::Unsupported => false,
    }
}

fn text_equals(value: &Value, literal: &str) -> bool {
    normalize::comparable_text(value) == fold_ci(literal)
}

/// Case-insensitive substring test. List values match element-wise: any
/// selected entry containing the needle counts. An empty needle never
/// matches.
fn text_contains(value: &Value, literal: &str) -> bool {
    if literal.is_empty() {
        return false;
    }
    let needle = fold_ci(literal);

    match normalize::elements(value) {
        Some(items) => items
            .iter()
            .any(|item| fold_ci(item).contains(needle.as_ref())),
        None => normalize::comparable_text(value).contains(needle.as_ref()),
    }
}

/// Membership against a comma-separated literal: split, trim, and fold each
/// token, then compare against the value's whole comparable text.
fn token_member(value: &Value, literal: &str) -> bool {
    let text = normalize::comparable_text(value);

    literal
        .split(',')
        .map(str::trim)
        .any(|token| fold_ci(token) == text)
}

/// Ordered comparison with both sides as f64. Either side failing to parse
/// is a non-match.
fn numeric_test(
    value: &Value,
    literal: Option<&str>,
    cmp: impl FnOnce(f64, f64) -> bool,
) -> bool {
    let Some(lhs) = normalize::numeric(value) else {
        return false;
    };
    let Some(rhs) = literal.and_then(|lit| lit.trim().parse::<f64>().ok()) else {
        return false;
    };

    cmp(lhs, rhs)
}
