//! The engine facade: one validated form snapshot behind prebuilt indexes.

use crate::{
    index::FieldIndex,
    render::{PageRender, RenderedField, RenderedPage},
};
use formflow_core::{
    error::StructuralReferenceError,
    eval::{
        FieldCatalog, FieldProjection, FieldRef, NextPage, PageProjection, project_page,
        resolve_next_page,
    },
    text,
    value::AnswerSet,
};
use formflow_schema::{
    error::{GraphError, GraphErrors},
    node::{Field, Form, Page},
    types::{FieldId, PageId},
    validate::validate_form,
};
use thiserror::Error as ThisError;

///
/// EngineError
///
/// Construction failures carry the full validation report; runtime
/// operations only ever fail on references the caller made up (an unknown
/// page id) or a structural hole validation cannot see from one snapshot.
///

#[remain::sorted]
#[derive(Clone, Debug, PartialEq, ThisError)]
pub enum EngineError {
    #[error(transparent)]
    Graph(#[from] GraphErrors),

    #[error(transparent)]
    Structural(#[from] StructuralReferenceError),

    #[error("unknown field '{name}'")]
    UnknownField { name: String },

    #[error("unknown page id {id}")]
    UnknownPage { id: PageId },
}

///
/// FormEngine
///
/// A validated form snapshot plus its [`FieldIndex`]. Construction runs the
/// full structural validation, so every later operation may assume the
/// graph invariants hold.
///

#[derive(Clone, Debug)]
pub struct FormEngine {
    form: Form,
    index: FieldIndex,
    first_page: PageId,
}

impl FormEngine {
    pub fn new(form: Form) -> Result<Self, EngineError> {
        validate_form(&form)?;

        let first_page = form
            .first_page()
            .map(|page| page.id)
            .ok_or_else(|| GraphErrors::from(GraphError::MissingFirstPage))?;
        let index = FieldIndex::build(&form);

        Ok(Self {
            form,
            index,
            first_page,
        })
    }

    #[must_use]
    pub const fn form(&self) -> &Form {
        &self.form
    }

    #[must_use]
    pub const fn first_page(&self) -> PageId {
        self.first_page
    }

    fn page(&self, id: PageId) -> Result<&Page, EngineError> {
        self.form.page(id).ok_or(EngineError::UnknownPage { id })
    }

    /// Projected field states for one page.
    pub fn project_page(
        &self,
        page_id: PageId,
        answers: &AnswerSet,
    ) -> Result<PageProjection, EngineError> {
        let page = self.page(page_id)?;

        Ok(project_page(page, answers, self)?)
    }

    /// Where submitting `page_id` with these answers leads.
    pub fn next_page(&self, page_id: PageId, answers: &AnswerSet) -> Result<NextPage, EngineError> {
        let page = self.page(page_id)?;
        let projection = project_page(page, answers, self)?;
        let skipped = projection.skipped_names();

        Ok(resolve_next_page(&self.form, page, answers, &skipped, self)?)
    }

    #[must_use]
    pub fn interpolate(&self, template: &str, answers: &AnswerSet) -> String {
        text::interpolate(template, answers, self)
    }

    #[must_use]
    pub fn encode_references(&self, template: &str) -> String {
        text::encode_references(template, self)
    }

    #[must_use]
    pub fn decode_references(&self, template: &str) -> String {
        text::decode_references(template, self)
    }

    /// Fraction of structural pages at or before `page_id`.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn progress_at(&self, page_id: PageId) -> f64 {
        let count = self.index.page_count();
        if count == 0 {
            return 0.0;
        }

        self.index
            .page_position(page_id)
            .map_or(0.0, |position| (position + 1) as f64 / count as f64)
    }

    /// Render one page for a client: projected states, current values,
    /// interpolated paragraph content, and the pre-resolved next-page
    /// decision.
    pub fn render_page(
        &self,
        page_id: PageId,
        answers: &AnswerSet,
    ) -> Result<PageRender, EngineError> {
        let page = self.page(page_id)?;
        let projection = project_page(page, answers, self)?;
        let skipped = projection.skipped_names();
        let decision = resolve_next_page(&self.form, page, answers, &skipped, self)?;

        // project_page walks ordered_fields, so the two sequences line up.
        let fields = page
            .ordered_fields()
            .into_iter()
            .zip(&projection.fields)
            .map(|(field, projected)| self.render_field(field, projected, answers))
            .collect();

        Ok(PageRender {
            form_id: self.form.id,
            form_title: self.form.title.clone(),
            page: RenderedPage {
                id: page.id,
                title: page.title.clone(),
                description: page.description.clone(),
                fields,
            },
            next_page_id: decision.page_id(),
            is_complete: decision.is_complete(),
            progress: self.progress_at(page.id),
        })
    }

    fn render_field(
        &self,
        field: &Field,
        projected: &FieldProjection,
        answers: &AnswerSet,
    ) -> RenderedField {
        let content = field
            .content
            .as_ref()
            .map(|template| self.interpolate(template, answers));

        RenderedField {
            id: field.id,
            name: field.name.clone(),
            label: field.display_label().to_string(),
            field_type: field.field_type,
            placeholder: field.placeholder.clone(),
            help_text: field.help_text.clone(),
            state: projected.state,
            current_value: answers.get(&field.name).clone(),
            default_value: field.default_value.clone(),
            options: field.options.clone(),
            content,
            original_content: field.content.clone(),
            conditions: field.conditions.clone(),
        }
    }
}

impl FieldCatalog for FormEngine {
    fn resolve_name(&self, name: &str) -> Option<FieldRef<'_>> {
        self.resolve_id(self.index.field_id(name)?)
    }

    fn resolve_id(&self, id: FieldId) -> Option<FieldRef<'_>> {
        self.index.slot(id).map(|slot| FieldRef {
            id,
            name: &slot.name,
            field_type: slot.field_type,
        })
    }

    fn field_names(&self) -> impl Iterator<Item = &str> {
        self.index.field_names()
    }
}
