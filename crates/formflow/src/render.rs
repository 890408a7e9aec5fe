//! The render surface: what a client needs to draw one page.
//!
//! Shapes here are the JSON boundary. Field state flags flatten into each
//! rendered field so clients read `is_visible` directly, and condition
//! rules ride along verbatim so a client can mirror same-page logic on
//! keystroke without a round-trip.

use formflow_core::{eval::FieldState, value::Value};
use formflow_schema::{
    node::{ConditionRule, FieldOptions},
    types::{FieldId, FieldType, FormId, PageId},
};
use serde::{Deserialize, Serialize};

///
/// RenderedField
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct RenderedField {
    pub id: FieldId,
    pub name: String,
    pub label: String,
    pub field_type: FieldType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,

    #[serde(flatten)]
    pub state: FieldState,

    pub current_value: Value,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,

    #[serde(default, skip_serializing_if = "FieldOptions::is_none")]
    pub options: FieldOptions,

    /// Interpolated paragraph content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// The authored template behind `content`, untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_content: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<ConditionRule>,
}

///
/// RenderedPage
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct RenderedPage {
    pub id: PageId,
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub fields: Vec<RenderedField>,
}

///
/// PageRender
///
/// One page ready for a client, with the next-page decision pre-resolved so
/// the client can label its submit control without a second call.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct PageRender {
    pub form_id: FormId,
    pub form_title: String,
    pub page: RenderedPage,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page_id: Option<PageId>,

    pub is_complete: bool,
    pub progress: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered_field() -> RenderedField {
        RenderedField {
            id: FieldId::new(7),
            name: "age".to_string(),
            label: "Age".to_string(),
            field_type: FieldType::Number,
            placeholder: None,
            help_text: None,
            state: FieldState {
                is_visible: true,
                is_required: false,
                is_enabled: true,
            },
            current_value: Value::Number(30.0),
            default_value: None,
            options: FieldOptions::None,
            content: None,
            original_content: None,
            conditions: Vec::new(),
        }
    }

    #[test]
    fn state_flags_flatten_into_the_field() {
        let json = serde_json::to_value(rendered_field()).expect("serializable");

        assert_eq!(json["is_visible"], true);
        assert_eq!(json["is_required"], false);
        assert_eq!(json["is_enabled"], true);
        assert_eq!(json["current_value"], 30.0);
        assert!(json.get("state").is_none());
    }

    #[test]
    fn empty_payloads_stay_off_the_wire() {
        let json = serde_json::to_value(rendered_field()).expect("serializable");

        assert!(json.get("placeholder").is_none());
        assert!(json.get("options").is_none());
        assert!(json.get("conditions").is_none());
        assert!(json.get("content").is_none());
    }

    #[test]
    fn round_trips_through_json() {
        let field = rendered_field();
        let json = serde_json::to_string(&field).expect("serializable");
        let back: RenderedField = serde_json::from_str(&json).expect("deserializable");

        assert_eq!(back, field);
    }
}
