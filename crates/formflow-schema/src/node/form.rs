use crate::{
    node::{Field, Page, default_true},
    types::{FieldId, FormId, PageId},
};
use serde::{Deserialize, Serialize};

///
/// Form
///
/// The root of the structural graph: an ordered set of pages. Structural
/// page order is authored `order` with list position breaking ties, and is
/// what navigation falls through to when no rule matches.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Form {
    pub id: FormId,
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default = "default_true")]
    pub is_active: bool,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pages: Vec<Page>,
}

impl Form {
    #[must_use]
    pub fn new(id: FormId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: None,
            is_active: true,
            pages: Vec::new(),
        }
    }

    /// The page flagged `is_first`. Validation guarantees exactly one.
    #[must_use]
    pub fn first_page(&self) -> Option<&Page> {
        self.pages.iter().find(|page| page.is_first)
    }

    #[must_use]
    pub fn page(&self, id: PageId) -> Option<&Page> {
        self.pages.iter().find(|page| page.id == id)
    }

    /// Pages in structural order.
    #[must_use]
    pub fn ordered_pages(&self) -> Vec<&Page> {
        let mut pages: Vec<&Page> = self.pages.iter().collect();
        pages.sort_by_key(|page| page.order);
        pages
    }

    /// The structural successor of `id`, if one exists.
    #[must_use]
    pub fn page_after(&self, id: PageId) -> Option<&Page> {
        let ordered = self.ordered_pages();
        let position = ordered.iter().position(|page| page.id == id)?;

        ordered.get(position + 1).copied()
    }

    /// Every field on every page, in page list order.
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.pages.iter().flat_map(|page| page.fields.iter())
    }

    /// Case-insensitive field lookup across the whole form.
    #[must_use]
    pub fn field_by_name(&self, name: &str) -> Option<&Field> {
        self.fields()
            .find(|field| field.name.eq_ignore_ascii_case(name))
    }

    #[must_use]
    pub fn field_by_id(&self, id: FieldId) -> Option<&Field> {
        self.fields().find(|field| field.id == id)
    }
}
