use crate::{
    node::{Field, NavigationRule},
    types::PageId,
};
use serde::{Deserialize, Serialize};

///
/// Page
///
/// An ordered group of fields plus the navigation rules that leave it.
/// Exactly one page per form carries `is_first`.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Page {
    pub id: PageId,
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub order: u32,

    #[serde(default)]
    pub is_first: bool,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<Field>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub navigation: Vec<NavigationRule>,
}

impl Page {
    #[must_use]
    pub fn new(id: PageId, title: impl Into<String>, order: u32) -> Self {
        Self {
            id,
            title: title.into(),
            description: None,
            order,
            is_first: false,
            fields: Vec::new(),
            navigation: Vec::new(),
        }
    }

    #[must_use]
    pub fn first(id: PageId, title: impl Into<String>, order: u32) -> Self {
        let mut page = Self::new(id, title, order);
        page.is_first = true;
        page
    }

    /// The fallback navigation rule, if authored.
    #[must_use]
    pub fn default_rule(&self) -> Option<&NavigationRule> {
        self.navigation.iter().find(|rule| rule.is_default)
    }

    /// Non-default rules in authored order.
    pub fn conditioned_rules(&self) -> impl Iterator<Item = &NavigationRule> {
        self.navigation.iter().filter(|rule| !rule.is_default)
    }

    /// Case-insensitive field lookup within this page.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields
            .iter()
            .find(|field| field.name.eq_ignore_ascii_case(name))
    }

    /// Fields sorted by authored `order`, ties broken by list position.
    #[must_use]
    pub fn ordered_fields(&self) -> Vec<&Field> {
        let mut fields: Vec<&Field> = self.fields.iter().collect();
        fields.sort_by_key(|field| field.order);
        fields
    }
}
