use crate::types::{ConditionAction, ConditionOperator};
use serde::{Deserialize, Serialize};

///
/// ConditionRule
///
/// A data-driven predicate over one other field's answer, with an action
/// applied to the owning field when the predicate matches. Rules have no
/// explicit priority: they evaluate in list order and later matching rules
/// of the same action category win.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ConditionRule {
    pub source_field_name: String,
    pub operator: ConditionOperator,

    /// Literal operand; absent for emptiness checks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    pub action: ConditionAction,
}

impl ConditionRule {
    #[must_use]
    pub fn new(
        source: impl Into<String>,
        operator: ConditionOperator,
        action: ConditionAction,
    ) -> Self {
        Self {
            source_field_name: source.into(),
            operator,
            value: None,
            action,
        }
    }

    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_shape_uses_boundary_names() {
        let rule = ConditionRule::new(
            "contact_pref",
            ConditionOperator::Equals,
            ConditionAction::Show,
        )
        .with_value("email");

        let json = serde_json::to_value(&rule).unwrap();
        assert_eq!(json["source_field_name"], "contact_pref");
        assert_eq!(json["operator"], "equals");
        assert_eq!(json["value"], "email");
        assert_eq!(json["action"], "show");
    }

    #[test]
    fn value_is_optional_on_the_wire() {
        let rule: ConditionRule = serde_json::from_str(
            r#"{"source_field_name": "age", "operator": "is_empty", "action": "hide"}"#,
        )
        .unwrap();

        assert_eq!(rule.value, None);
        assert_eq!(rule.operator, ConditionOperator::IsEmpty);
    }
}
