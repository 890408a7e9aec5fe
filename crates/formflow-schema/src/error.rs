use crate::types::{FieldId, FieldType, PageId};
use derive_more::{Deref, IntoIterator};
use std::fmt;

///
/// GraphError
///
/// One structural violation found while validating an authored form.
/// Validation collects every violation instead of stopping at the first,
/// so authoring tools can show the full list in one pass.
///

#[remain::sorted]
#[derive(Clone, Debug, PartialEq)]
pub enum GraphError {
    DefaultRuleWithSource { page: PageId },
    DuplicateFieldId { id: FieldId },
    DuplicateFieldName { name: String },
    DuplicatePageId { id: PageId },
    EmptyChoices { field: String },
    EmptyChoiceValue { field: String },
    EmptyFieldName { id: FieldId },
    EmptyPageTitle { id: PageId },
    FieldNameTooLong { name: String, len: usize, max: usize },
    InvalidFieldName { name: String },
    InvalidRange { field: String, min: f64, max: f64 },
    MissingFirstPage,
    MultipleDefaultRules { page: PageId },
    MultipleFirstPages { count: usize },
    NavigationSourceMissing { page: PageId },
    OptionsMismatch {
        field: String,
        field_type: FieldType,
        kind: &'static str,
    },
    SelfCondition { field: String },
    UnknownConditionSource { field: String, source: String },
    UnknownNavigationSource { page: PageId, source: FieldId },
    UnknownNavigationTarget { page: PageId, target: PageId },
}

// Hand-written instead of derived with thiserror: two variants carry a data
// field named `source`, which thiserror would force to be the error's
// `source()` cause rather than message data.
impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DefaultRuleWithSource { page } => {
                write!(f, "page {page} default navigation rule carries a source field")
            }
            Self::DuplicateFieldId { id } => write!(f, "duplicate field id {id}"),
            Self::DuplicateFieldName { name } => {
                write!(f, "duplicate field name '{name}' (names are case-insensitive)")
            }
            Self::DuplicatePageId { id } => write!(f, "duplicate page id {id}"),
            Self::EmptyChoiceValue { field } => {
                write!(f, "field '{field}' has a choice with an empty value")
            }
            Self::EmptyChoices { field } => {
                write!(f, "field '{field}' has an empty choice list")
            }
            Self::EmptyFieldName { id } => write!(f, "field id {id} has an empty name"),
            Self::EmptyPageTitle { id } => write!(f, "page id {id} has an empty title"),
            Self::FieldNameTooLong { name, len, max } => {
                write!(f, "field name '{name}' is {len} characters, maximum is {max}")
            }
            Self::InvalidFieldName { name } => {
                write!(f, "field name '{name}' contains characters outside [A-Za-z0-9_]")
            }
            Self::InvalidRange { field, min, max } => {
                write!(f, "field '{field}' range options are inverted ({min} > {max})")
            }
            Self::MissingFirstPage => write!(f, "form has no first page"),
            Self::MultipleDefaultRules { page } => {
                write!(f, "page {page} has more than one default navigation rule")
            }
            Self::MultipleFirstPages { count } => {
                write!(f, "form has {count} pages flagged first, expected exactly one")
            }
            Self::NavigationSourceMissing { page } => {
                write!(f, "page {page} has a conditioned navigation rule without a source field")
            }
            Self::OptionsMismatch {
                field,
                field_type,
                kind,
            } => write!(f, "field '{field}' ({field_type}) cannot carry {kind} options"),
            Self::SelfCondition { field } => {
                write!(f, "field '{field}' has a condition referencing itself")
            }
            Self::UnknownConditionSource { field, source } => {
                write!(f, "field '{field}' condition references unknown field '{source}'")
            }
            Self::UnknownNavigationSource { page, source } => {
                write!(f, "page {page} navigation rule references unknown field id {source}")
            }
            Self::UnknownNavigationTarget { page, target } => {
                write!(f, "page {page} navigation rule targets unknown page id {target}")
            }
        }
    }
}

impl std::error::Error for GraphError {}

///
/// GraphErrors
///
/// Every violation found by one validation pass, in discovery order.
///

#[derive(Clone, Debug, Default, Deref, IntoIterator, PartialEq)]
pub struct GraphErrors {
    #[deref]
    #[into_iterator(owned, ref)]
    errors: Vec<GraphError>,
}

impl GraphErrors {
    pub fn push(&mut self, error: GraphError) {
        self.errors.push(error);
    }

    /// `Ok(())` when no violations were recorded.
    pub fn into_result(self) -> Result<(), Self> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl From<GraphError> for GraphErrors {
    fn from(error: GraphError) -> Self {
        Self {
            errors: vec![error],
        }
    }
}

impl fmt::Display for GraphErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} structural violation(s)", self.errors.len())?;
        for error in &self.errors {
            write!(f, "; {error}")?;
        }

        Ok(())
    }
}

impl std::error::Error for GraphErrors {}
