use crate::{
    node::{ConditionRule, FieldOptions, default_true},
    types::{FieldId, FieldType},
};
use serde::{Deserialize, Serialize};

///
/// Field
///
/// One answerable unit on a page. `name` doubles as the answer-map key and
/// the human reference token (`@name`), so it is unique per form and drawn
/// from the token charset. `is_required`/`is_visible` are authoring-time
/// baselines that condition rules override at run time.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Field {
    pub id: FieldId,
    pub name: String,

    #[serde(default)]
    pub label: String,

    pub field_type: FieldType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,

    #[serde(default)]
    pub order: u32,

    #[serde(default)]
    pub is_required: bool,

    #[serde(default = "default_true")]
    pub is_visible: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,

    /// Paragraph template text; may carry reference tokens.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    #[serde(default, skip_serializing_if = "FieldOptions::is_none")]
    pub options: FieldOptions,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<ConditionRule>,
}

impl Field {
    /// Bare field with baseline flags (visible, not required, no options).
    #[must_use]
    pub fn new(id: FieldId, name: impl Into<String>, field_type: FieldType) -> Self {
        let name = name.into();

        Self {
            id,
            label: name.clone(),
            name,
            field_type,
            placeholder: None,
            help_text: None,
            order: 0,
            is_required: false,
            is_visible: true,
            default_value: None,
            content: None,
            options: FieldOptions::None,
            conditions: Vec::new(),
        }
    }

    #[must_use]
    pub fn has_conditions(&self) -> bool {
        !self.conditions.is_empty()
    }

    /// Falls back to the field name when no label was authored.
    #[must_use]
    pub fn display_label(&self) -> &str {
        if self.label.is_empty() {
            &self.name
        } else {
            &self.label
        }
    }
}
