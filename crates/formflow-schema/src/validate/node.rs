use crate::{
    MAX_FIELD_NAME_LEN,
    error::{GraphError, GraphErrors},
    node::{Field, FieldOptions, Form},
};

// Token charset the text scanner relies on.
fn is_token_name(name: &str) -> bool {
    name.chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn check_field(field: &Field, errors: &mut GraphErrors) {
    if field.name.is_empty() {
        errors.push(GraphError::EmptyFieldName { id: field.id });
    } else {
        if field.name.len() > MAX_FIELD_NAME_LEN {
            errors.push(GraphError::FieldNameTooLong {
                name: field.name.clone(),
                len: field.name.len(),
                max: MAX_FIELD_NAME_LEN,
            });
        }
        if !is_token_name(&field.name) {
            errors.push(GraphError::InvalidFieldName {
                name: field.name.clone(),
            });
        }
    }

    if !field.options.matches_field_type(field.field_type) {
        errors.push(GraphError::OptionsMismatch {
            field: field.name.clone(),
            field_type: field.field_type,
            kind: field.options.kind(),
        });
    }

    match &field.options {
        FieldOptions::Choices { choices } => {
            if choices.is_empty() {
                errors.push(GraphError::EmptyChoices {
                    field: field.name.clone(),
                });
            }
            if choices.iter().any(|choice| choice.value.is_empty()) {
                errors.push(GraphError::EmptyChoiceValue {
                    field: field.name.clone(),
                });
            }
        }
        FieldOptions::Range { min, max } => {
            if min > max {
                errors.push(GraphError::InvalidRange {
                    field: field.name.clone(),
                    min: *min,
                    max: *max,
                });
            }
        }
        FieldOptions::Attachment { .. } | FieldOptions::None => {}
    }
}

/// Per-node checks: everything decidable from one node in isolation.
pub(crate) fn validate_nodes(form: &Form, errors: &mut GraphErrors) {
    for page in &form.pages {
        if page.title.is_empty() {
            errors.push(GraphError::EmptyPageTitle { id: page.id });
        }
        for field in &page.fields {
            check_field(field, errors);
        }
    }
}
