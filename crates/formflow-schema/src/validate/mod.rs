//! Staged structural validation.
//!
//! Stage one checks each node in isolation (names, titles, option payloads);
//! stage two checks whole-form properties (identity, first-page flag, rule
//! reference integrity). Both stages always run so one pass reports every
//! violation.

mod graph;
mod node;

use crate::{error::GraphErrors, node::Form};

/// Validate an authored form against the structural invariants the evaluator
/// assumes. Evaluation behavior is undefined only for forms this rejects.
pub fn validate_form(form: &Form) -> Result<(), GraphErrors> {
    let mut errors = GraphErrors::default();

    node::validate_nodes(form, &mut errors);
    graph::validate_graph(form, &mut errors);

    errors.into_result()
}
