//! Structural graph for FormFlow: the authored shape of a form (pages,
//! fields, condition and navigation rules, option payloads) plus the staged
//! validation that makes "already-validated graph" a checkable contract.
//!
//! Nodes are plain serde-shaped data with snake_case wire names; the
//! evaluator in `formflow-core` consumes them read-only.

pub mod error;
pub mod node;
pub mod types;
pub mod validate;

///
/// CONSTANTS
///

/// Maximum length of a field name.
///
/// Field names double as reference tokens inside free text, so keeping them
/// short bounds the token scanner's longest-match work.
pub const MAX_FIELD_NAME_LEN: usize = 64;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        error::{GraphError, GraphErrors},
        node::{Choice, ConditionRule, Field, FieldOptions, Form, NavigationRule, Page},
        types::{ConditionAction, ConditionOperator, FieldId, FieldType, FormId, PageId},
        validate::validate_form,
    };
}
