//! Structural graph nodes: forms, pages, fields, and the rules attached to
//! them. Nodes are plain serde-shaped data; every structural invariant lives
//! in [`crate::validate`].

mod condition;
mod field;
mod form;
mod navigation;
mod options;
mod page;

pub use condition::ConditionRule;
pub use field::Field;
pub use form::Form;
pub use navigation::NavigationRule;
pub use options::{Choice, FieldOptions};
pub use page::Page;

// serde default helper shared by node structs
pub(crate) fn default_true() -> bool {
    true
}
