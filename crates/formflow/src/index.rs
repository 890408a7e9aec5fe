//! Prebuilt lookups over one form snapshot.

use formflow_core::value::fold_ci;
use formflow_schema::{
    node::Form,
    types::{FieldId, FieldType, PageId},
};
use std::collections::BTreeMap;

///
/// FieldSlot
///
/// Owned copy of the per-field facts the index serves without walking the
/// form again.
///

#[derive(Clone, Debug)]
pub struct FieldSlot {
    pub name: String,
    pub field_type: FieldType,
    pub page_id: PageId,
}

///
/// FieldIndex
///
/// Case-folded name lookup, id lookup, and structural page order, built
/// once at engine construction. The evaluator resolves names on every rule
/// of every render, so these replace the snapshot's linear scans.
///

#[derive(Clone, Debug, Default)]
pub struct FieldIndex {
    by_name: BTreeMap<String, FieldId>,
    by_id: BTreeMap<FieldId, FieldSlot>,
    page_order: Vec<PageId>,
}

impl FieldIndex {
    #[must_use]
    pub fn build(form: &Form) -> Self {
        let mut by_name = BTreeMap::new();
        let mut by_id = BTreeMap::new();

        for page in &form.pages {
            for field in &page.fields {
                by_name.insert(fold_ci(&field.name).into_owned(), field.id);
                by_id.insert(
                    field.id,
                    FieldSlot {
                        name: field.name.clone(),
                        field_type: field.field_type,
                        page_id: page.id,
                    },
                );
            }
        }

        let page_order = form.ordered_pages().iter().map(|page| page.id).collect();

        Self {
            by_name,
            by_id,
            page_order,
        }
    }

    #[must_use]
    pub fn field_id(&self, name: &str) -> Option<FieldId> {
        self.by_name.get(fold_ci(name).as_ref()).copied()
    }

    #[must_use]
    pub fn slot(&self, id: FieldId) -> Option<&FieldSlot> {
        self.by_id.get(&id)
    }

    /// Position of `id` in structural page order.
    #[must_use]
    pub fn page_position(&self, id: PageId) -> Option<usize> {
        self.page_order.iter().position(|page| *page == id)
    }

    #[must_use]
    pub fn page_count(&self) -> usize {
        self.page_order.len()
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.by_id.values().map(|slot| slot.name.as_str())
    }
}
