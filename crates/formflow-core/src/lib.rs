//! Evaluation core for FormFlow: answer values, operator evaluation,
//! condition folding, page projection, navigation, and reference text.
//!
//! This crate has no I/O and no clock. It is one shared evaluator meant to
//! be embedded on both sides of a client/server split, so the two can never
//! disagree on an operator or a boundary case.
#![warn(unreachable_pub)]

// public exports are one module level down
pub mod error;
pub mod eval;
pub mod obs;
pub mod text;
pub mod value;

// test
#[cfg(test)]
pub(crate) mod test_support;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, sinks, or free functions are re-exported here.
///

pub mod prelude {
    pub use crate::{
        eval::{
            EffectSet, FieldCatalog, FieldProjection, FieldRef, FieldState, NextPage,
            PageProjection,
        },
        text::ReferenceSpan,
        value::{AnswerSet, Value},
    };
}
