//! Rule evaluation: operators, condition folding, page projection, and
//! navigation.
//!
//! Everything here is pure and deterministic: the same form snapshot and
//! answer set always produce the same output, and repeated evaluation has
//! no side effects beyond metrics events. Malformed data folds to a
//! non-match; the only hard failure is a rule referencing a field or page
//! absent from the snapshot.

pub mod effect;
pub mod navigate;
pub mod operator;
pub mod project;

#[cfg(test)]
mod tests;

// re-exports
pub use effect::{EffectSet, resolve_conditions};
pub use navigate::{NextPage, resolve_next_page};
pub use operator::evaluate;
pub use project::{FieldProjection, FieldState, PageProjection, project_page};

use formflow_schema::{
    node::Form,
    types::{FieldId, FieldType},
};

///
/// FieldRef
///
/// The minimal view of a field the evaluator needs: identity, canonical
/// name, and type. `name` is the answer-map key; rules may spell it with
/// different casing, so resolution always goes through a [`FieldCatalog`].
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FieldRef<'a> {
    pub id: FieldId,
    pub name: &'a str,
    pub field_type: FieldType,
}

///
/// FieldCatalog
///
/// Name and id resolution over a form snapshot. Name lookups are
/// case-insensitive; the returned [`FieldRef::name`] is the canonical
/// spelling. Implemented by `Form` directly and by the engine facade's
/// prebuilt index.
///

pub trait FieldCatalog {
    fn resolve_name(&self, name: &str) -> Option<FieldRef<'_>>;

    fn resolve_id(&self, id: FieldId) -> Option<FieldRef<'_>>;

    /// Canonical names of every field in the snapshot, for the text
    /// scanner's longest-match search. Order is not significant.
    fn field_names(&self) -> impl Iterator<Item = &str>;
}

impl FieldCatalog for Form {
    fn resolve_name(&self, name: &str) -> Option<FieldRef<'_>> {
        self.field_by_name(name).map(|field| FieldRef {
            id: field.id,
            name: &field.name,
            field_type: field.field_type,
        })
    }

    fn resolve_id(&self, id: FieldId) -> Option<FieldRef<'_>> {
        self.field_by_id(id).map(|field| FieldRef {
            id: field.id,
            name: &field.name,
            field_type: field.field_type,
        })
    }

    fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields().map(|field| field.name.as_str())
    }
}
