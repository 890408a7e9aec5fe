use crate::types::FieldType;
use serde::{Deserialize, Serialize};

///
/// FieldOptions
///
/// Type-specific option payload, dispatched by the owning field's
/// `field_type`: choice lists for choice-based fields, numeric bounds for
/// rating/number, an attachment descriptor for file fields, nothing for the
/// rest. Tagged on the wire by `kind`.
///

#[remain::sorted]
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldOptions {
    Attachment {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        content_type: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        url: Option<String>,
    },

    Choices {
        choices: Vec<Choice>,
    },

    #[default]
    None,

    Range {
        min: f64,
        max: f64,
    },
}

impl FieldOptions {
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Attachment { .. } => "attachment",
            Self::Choices { .. } => "choices",
            Self::None => "none",
            Self::Range { .. } => "range",
        }
    }

    #[must_use]
    pub fn choices(&self) -> Option<&[Choice]> {
        match self {
            Self::Choices { choices } => Some(choices),
            _ => None,
        }
    }

    /// Whether this payload is legal on a field of the given type.
    #[must_use]
    pub const fn matches_field_type(&self, field_type: FieldType) -> bool {
        match self {
            Self::Attachment { .. } => matches!(field_type, FieldType::File),
            Self::Choices { .. } => field_type.is_choice_based(),
            Self::None => true,
            Self::Range { .. } => field_type.is_range_based(),
        }
    }
}

///
/// Choice
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Choice {
    pub value: String,

    #[serde(default)]
    pub label: String,
}

impl Choice {
    #[must_use]
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// Falls back to the stored value when no label was authored.
    #[must_use]
    pub fn display_label(&self) -> &str {
        if self.label.is_empty() {
            &self.value
        } else {
            &self.label
        }
    }
}
