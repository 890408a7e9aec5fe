//! One respondent's fill-out state.

use crate::{
    engine::{EngineError, FormEngine},
    render::PageRender,
};
use formflow_core::{
    eval::{FieldCatalog, NextPage},
    value::{AnswerSet, Value},
};
use formflow_schema::types::PageId;
use serde::{Deserialize, Serialize};
use std::{collections::BTreeSet, fmt, sync::Arc};
use time::OffsetDateTime;

///
/// SessionStatus
///

#[remain::sorted]
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    Abandoned,
    Completed,
    InProgress,
}

impl SessionStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Abandoned => "abandoned",
            Self::Completed => "completed",
            Self::InProgress => "in_progress",
        }
    }

    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Abandoned | Self::Completed)
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

///
/// VisitedFieldRegistry
///
/// Append-only record of every page visited and every field name reached.
/// Pages append per visit, so loops leave a trail; field names collect into
/// a set. Never shrunk.
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct VisitedFieldRegistry {
    fields: BTreeSet<String>,
    pages: Vec<PageId>,
}

impl VisitedFieldRegistry {
    fn register_page(&mut self, page_id: PageId, field_names: impl IntoIterator<Item = String>) {
        self.pages.push(page_id);
        self.fields.extend(field_names);
    }

    /// Pages in visit order, revisits included.
    #[must_use]
    pub fn pages(&self) -> &[PageId] {
        &self.pages
    }

    #[must_use]
    pub fn contains_field(&self, name: &str) -> bool {
        self.fields.contains(name)
    }

    #[must_use]
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }
}

///
/// FormSession
///
/// Session id, answer set, visited registry, position, status, timestamps.
/// All mutators take `&mut self`: ownership is the serialization point, two
/// requests cannot race one session without an external queue.
///

#[derive(Clone, Debug)]
pub struct FormSession {
    engine: Arc<FormEngine>,
    id: String,
    status: SessionStatus,
    current_page: PageId,
    answers: AnswerSet,
    visited: VisitedFieldRegistry,
    started_at: OffsetDateTime,
    completed_at: Option<OffsetDateTime>,
}

impl FormSession {
    /// Open a session positioned at the form's first page.
    #[must_use]
    pub fn start(engine: Arc<FormEngine>, id: impl Into<String>) -> Self {
        let current_page = engine.first_page();
        let mut session = Self {
            engine,
            id: id.into(),
            status: SessionStatus::InProgress,
            current_page,
            answers: AnswerSet::new(),
            visited: VisitedFieldRegistry::default(),
            started_at: OffsetDateTime::now_utc(),
            completed_at: None,
        };
        session.register_visit(current_page);

        session
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub const fn status(&self) -> SessionStatus {
        self.status
    }

    #[must_use]
    pub const fn current_page(&self) -> PageId {
        self.current_page
    }

    #[must_use]
    pub const fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    #[must_use]
    pub const fn visited(&self) -> &VisitedFieldRegistry {
        &self.visited
    }

    #[must_use]
    pub const fn started_at(&self) -> OffsetDateTime {
        self.started_at
    }

    #[must_use]
    pub const fn completed_at(&self) -> Option<OffsetDateTime> {
        self.completed_at
    }

    /// Upsert one answer. The name may be spelled with any casing; the
    /// stored key is the canonical field name.
    pub fn set_answer(&mut self, name: &str, value: impl Into<Value>) -> Result<(), EngineError> {
        let field = self
            .engine
            .resolve_name(name)
            .ok_or_else(|| EngineError::UnknownField {
                name: name.to_string(),
            })?;

        self.answers.set(field.name, value);

        Ok(())
    }

    /// The current page's render.
    pub fn render(&self) -> Result<PageRender, EngineError> {
        self.engine.render_page(self.current_page, &self.answers)
    }

    /// Submit the current page and move where navigation points.
    ///
    /// Advancing a terminal session is a no-op that reports completion.
    pub fn advance(&mut self) -> Result<NextPage, EngineError> {
        if self.status.is_terminal() {
            return Ok(NextPage::Complete);
        }

        let decision = self.engine.next_page(self.current_page, &self.answers)?;
        match decision {
            NextPage::Goto(page_id) => {
                self.current_page = page_id;
                self.register_visit(page_id);
            }
            NextPage::Complete => {
                self.status = SessionStatus::Completed;
                self.completed_at = Some(OffsetDateTime::now_utc());
            }
        }

        Ok(decision)
    }

    /// Mark the session dropped. Terminal; answers are retained.
    pub fn abandon(&mut self) {
        if self.status == SessionStatus::InProgress {
            self.status = SessionStatus::Abandoned;
        }
    }

    /// Fraction of structural pages at or before the current one, `1.0`
    /// once completed.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.status == SessionStatus::Completed {
            return 1.0;
        }

        self.engine.progress_at(self.current_page)
    }

    fn register_visit(&mut self, page_id: PageId) {
        // Navigation targets are validated, so the lookup cannot miss.
        let Some(page) = self.engine.form().page(page_id) else {
            return;
        };
        let names: Vec<String> = page
            .fields
            .iter()
            .map(|field| field.name.clone())
            .collect();

        self.visited.register_page(page_id, names.iter().cloned());
        for name in names {
            self.answers.ensure(name);
        }
    }
}
