use crate::{
    error::{GraphError, GraphErrors},
    node::Form,
};
use std::collections::{BTreeMap, BTreeSet};

fn check_first_page(form: &Form, errors: &mut GraphErrors) {
    let count = form.pages.iter().filter(|page| page.is_first).count();
    match count {
        0 => errors.push(GraphError::MissingFirstPage),
        1 => {}
        _ => errors.push(GraphError::MultipleFirstPages { count }),
    }
}

fn check_identity(form: &Form, errors: &mut GraphErrors) {
    let mut page_ids = BTreeMap::new();
    for page in &form.pages {
        *page_ids.entry(page.id).or_insert(0u32) += 1;
    }
    for (id, count) in page_ids {
        if count > 1 {
            errors.push(GraphError::DuplicatePageId { id });
        }
    }

    let mut field_ids = BTreeMap::new();
    let mut field_names = BTreeMap::new();
    for field in form.fields() {
        *field_ids.entry(field.id).or_insert(0u32) += 1;
        *field_names
            .entry(field.name.to_ascii_lowercase())
            .or_insert(0u32) += 1;
    }
    for (id, count) in field_ids {
        if count > 1 {
            errors.push(GraphError::DuplicateFieldId { id });
        }
    }
    for (name, count) in field_names {
        if count > 1 {
            errors.push(GraphError::DuplicateFieldName { name });
        }
    }
}

fn check_conditions(form: &Form, errors: &mut GraphErrors) {
    let known: BTreeSet<String> = form
        .fields()
        .map(|field| field.name.to_ascii_lowercase())
        .collect();

    for field in form.fields() {
        for rule in &field.conditions {
            if rule.source_field_name.eq_ignore_ascii_case(&field.name) {
                errors.push(GraphError::SelfCondition {
                    field: field.name.clone(),
                });
            } else if !known.contains(&rule.source_field_name.to_ascii_lowercase()) {
                errors.push(GraphError::UnknownConditionSource {
                    field: field.name.clone(),
                    source: rule.source_field_name.clone(),
                });
            }
        }
    }
}

fn check_navigation(form: &Form, errors: &mut GraphErrors) {
    let field_ids: BTreeSet<_> = form.fields().map(|field| field.id).collect();
    let page_ids: BTreeSet<_> = form.pages.iter().map(|page| page.id).collect();

    for page in &form.pages {
        let defaults = page.navigation.iter().filter(|rule| rule.is_default).count();
        if defaults > 1 {
            errors.push(GraphError::MultipleDefaultRules { page: page.id });
        }

        for rule in &page.navigation {
            if rule.is_default {
                if rule.source_field_id.is_some() {
                    errors.push(GraphError::DefaultRuleWithSource { page: page.id });
                }
            } else {
                match rule.source_field_id {
                    None => errors.push(GraphError::NavigationSourceMissing { page: page.id }),
                    Some(source) if !field_ids.contains(&source) => {
                        errors.push(GraphError::UnknownNavigationSource {
                            page: page.id,
                            source,
                        });
                    }
                    Some(_) => {}
                }
            }

            if let Some(target) = rule.target_page_id
                && !page_ids.contains(&target)
            {
                errors.push(GraphError::UnknownNavigationTarget {
                    page: page.id,
                    target,
                });
            }
        }
    }
}

/// Whole-form checks: identity, flags, and reference integrity.
pub(crate) fn validate_graph(form: &Form, errors: &mut GraphErrors) {
    check_first_page(form, errors);
    check_identity(form, errors);
    check_conditions(form, errors);
    check_navigation(form, errors);
}
