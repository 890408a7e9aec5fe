use crate::types::{ConditionOperator, FieldId, PageId};
use serde::{Deserialize, Serialize};

///
/// NavigationRule
///
/// A page-to-page transition predicate. Conditioned rules test a source
/// field's answer; the default rule (`is_default`, at most one per page) is
/// the fallback when no conditioned rule matches. A default rule with no
/// target page signals form completion.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct NavigationRule {
    /// Nullable only on the default rule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_field_id: Option<FieldId>,

    #[serde(default)]
    pub operator: ConditionOperator,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_page_id: Option<PageId>,

    #[serde(default)]
    pub is_default: bool,
}

impl NavigationRule {
    /// Conditioned transition: go to `target` when `source` satisfies the operator.
    #[must_use]
    pub const fn when(source: FieldId, operator: ConditionOperator, target: PageId) -> Self {
        Self {
            source_field_id: Some(source),
            operator,
            value: None,
            target_page_id: Some(target),
            is_default: false,
        }
    }

    /// Fallback transition; `None` completes the form.
    #[must_use]
    pub fn default_to(target: impl Into<Option<PageId>>) -> Self {
        Self {
            source_field_id: None,
            operator: ConditionOperator::Unsupported,
            value: None,
            target_page_id: target.into(),
            is_default: true,
        }
    }

    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}
