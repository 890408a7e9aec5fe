//! Field state projection for one page.

use crate::{
    error::StructuralReferenceError,
    eval::{FieldCatalog, effect},
    obs::{MetricsEvent, sink},
    value::AnswerSet,
};
use formflow_schema::{
    node::Page,
    types::{FieldId, PageId},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

///
/// FieldState
///
/// The render-facing triple for one field. Serialized with the boundary
/// names the rendering layer consumes.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct FieldState {
    pub is_visible: bool,
    pub is_required: bool,
    pub is_enabled: bool,
}

///
/// FieldProjection
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct FieldProjection {
    pub field_id: FieldId,
    pub name: String,
    #[serde(flatten)]
    pub state: FieldState,
    pub skip: bool,
}

///
/// PageProjection
///
/// States for every field on one page, in render order. `skip` is carried
/// for the navigation resolver; it does not affect rendering.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct PageProjection {
    pub page_id: PageId,
    pub fields: Vec<FieldProjection>,
}

impl PageProjection {
    #[must_use]
    pub fn state_of(&self, name: &str) -> Option<&FieldState> {
        self.fields
            .iter()
            .find(|field| field.name.eq_ignore_ascii_case(name))
            .map(|field| &field.state)
    }

    /// Canonical names of the fields marked `skip`, for the navigation
    /// resolver.
    #[must_use]
    pub fn skipped_names(&self) -> BTreeSet<String> {
        self.fields
            .iter()
            .filter(|field| field.skip)
            .map(|field| field.name.clone())
            .collect()
    }
}

/// Project every field on `page`.
///
/// Fields carrying rules get their folded effect; fields without rules pass
/// their authored baseline flags through unchanged (and are always
/// enabled). Idempotent and side-effect-free: repeated calls with the same
/// answers produce identical output.
pub fn project_page<C: FieldCatalog>(
    page: &Page,
    answers: &AnswerSet,
    catalog: &C,
) -> Result<PageProjection, StructuralReferenceError> {
    let ordered = page.ordered_fields();
    let mut fields = Vec::with_capacity(ordered.len());
    let mut skipped = 0u64;

    for field in ordered {
        let (state, skip) = if field.has_conditions() {
            let folded = effect::resolve_conditions(&field.conditions, answers, catalog)?;
            (
                FieldState {
                    is_visible: folded.is_visible(),
                    is_required: folded.is_required(),
                    is_enabled: folded.is_enabled(),
                },
                folded.skip,
            )
        } else {
            (
                FieldState {
                    is_visible: field.is_visible,
                    is_required: field.is_required,
                    is_enabled: true,
                },
                false,
            )
        };

        if skip {
            skipped = skipped.saturating_add(1);
        }

        fields.push(FieldProjection {
            field_id: field.id,
            name: field.name.clone(),
            state,
            skip,
        });
    }

    sink::record(MetricsEvent::PageProjected {
        fields: fields.len() as u64,
        skipped,
    });

    Ok(PageProjection {
        page_id: page.id,
        fields,
    })
}
