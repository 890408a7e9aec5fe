//! Shared fixtures for core tests.

pub mod fixtures;

use crate::eval::{FieldCatalog, FieldRef};
use formflow_schema::types::{FieldId, FieldType};

///
/// TestCatalog
///
/// Minimal name/id resolver for evaluator tests that do not need a whole
/// `Form`.
///

#[derive(Debug, Default)]
pub struct TestCatalog {
    fields: Vec<(FieldId, String, FieldType)>,
}

impl TestCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, id: u64, name: &str, field_type: FieldType) -> Self {
        self.fields
            .push((FieldId::new(id), name.to_string(), field_type));
        self
    }
}

impl FieldCatalog for TestCatalog {
    fn resolve_name(&self, name: &str) -> Option<FieldRef<'_>> {
        self.fields
            .iter()
            .find(|(_, held, _)| held.eq_ignore_ascii_case(name))
            .map(|(id, held, field_type)| FieldRef {
                id: *id,
                name: held,
                field_type: *field_type,
            })
    }

    fn resolve_id(&self, id: FieldId) -> Option<FieldRef<'_>> {
        self.fields
            .iter()
            .find(|(held, _, _)| *held == id)
            .map(|(held, name, field_type)| FieldRef {
                id: *held,
                name,
                field_type: *field_type,
            })
    }

    fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(_, name, _)| name.as_str())
    }
}
