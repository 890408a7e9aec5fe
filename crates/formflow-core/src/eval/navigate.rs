//! Next-page resolution for one page submit.

use crate::{
    error::StructuralReferenceError,
    eval::{FieldCatalog, operator},
    obs::{MetricsEvent, sink},
    value::AnswerSet,
};
use formflow_schema::{
    node::{Form, Page},
    types::PageId,
};
use std::collections::BTreeSet;

///
/// NextPage
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NextPage {
    Complete,
    Goto(PageId),
}

impl NextPage {
    #[must_use]
    pub const fn is_complete(self) -> bool {
        matches!(self, Self::Complete)
    }

    #[must_use]
    pub const fn page_id(self) -> Option<PageId> {
        match self {
            Self::Goto(id) => Some(id),
            Self::Complete => None,
        }
    }
}

/// Resolve where a submit of `page` leads.
///
/// First-match-wins over the conditioned rules in authored order, which is
/// a deliberate asymmetry with condition folding: navigation needs one
/// deterministic destination, condition effects are cumulative. `skipped`
/// holds the canonical names of fields the current projection marked
/// `skip`; rules sourced from them are bypassed without evaluation, as are
/// rules with no destination. When nothing matches, the default rule
/// decides (no target means the form is done); with no default either, the
/// page falls through to structural order and the last page completes.
pub fn resolve_next_page<C: FieldCatalog>(
    form: &Form,
    page: &Page,
    answers: &AnswerSet,
    skipped: &BTreeSet<String>,
    catalog: &C,
) -> Result<NextPage, StructuralReferenceError> {
    let decision = resolve_inner(form, page, answers, skipped, catalog)?;

    sink::record(MetricsEvent::NavigationResolved {
        complete: decision.is_complete(),
    });

    Ok(decision)
}

fn resolve_inner<C: FieldCatalog>(
    form: &Form,
    page: &Page,
    answers: &AnswerSet,
    skipped: &BTreeSet<String>,
    catalog: &C,
) -> Result<NextPage, StructuralReferenceError> {
    for rule in page.conditioned_rules() {
        // Rules with no destination or no source cannot fire.
        let Some(target) = rule.target_page_id else {
            continue;
        };
        let Some(source_id) = rule.source_field_id else {
            continue;
        };

        let source = catalog
            .resolve_id(source_id)
            .ok_or(StructuralReferenceError::UnknownFieldId { id: source_id })?;

        // A skipped source field takes its rules out of play.
        if skipped.contains(source.name) {
            continue;
        }
        if form.page(target).is_none() {
            return Err(StructuralReferenceError::UnknownPage { id: target });
        }

        if operator::evaluate(rule.operator, answers.get(source.name), rule.value.as_deref()) {
            return Ok(NextPage::Goto(target));
        }
    }

    if let Some(default) = page.default_rule() {
        return match default.target_page_id {
            Some(target) => {
                if form.page(target).is_none() {
                    return Err(StructuralReferenceError::UnknownPage { id: target });
                }

                Ok(NextPage::Goto(target))
            }
            // A default rule with no destination ends the form.
            None => Ok(NextPage::Complete),
        };
    }

    // Structural fallthrough: the next page in order, or done on the last.
    Ok(form
        .page_after(page.id)
        .map_or(NextPage::Complete, |next| NextPage::Goto(next.id)))
}
