use formflow_schema::types::{FieldId, PageId};
use thiserror::Error as ThisError;

///
/// StructuralReferenceError
///
/// The one hard failure class in the evaluator: a rule referencing a field
/// or page absent from the provided form snapshot. Everything else (unknown
/// operators, non-numeric operands, unresolvable text tokens) degrades to a
/// non-match; a dangling reference means the authoring layer handed over an
/// inconsistent graph, which the engine refuses to paper over.
///

#[remain::sorted]
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum StructuralReferenceError {
    #[error("condition references unknown field '{name}'")]
    UnknownField { name: String },

    #[error("navigation rule references unknown field id {id}")]
    UnknownFieldId { id: FieldId },

    #[error("navigation rule targets unknown page id {id}")]
    UnknownPage { id: PageId },
}
