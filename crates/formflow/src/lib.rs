//! Facade over the FormFlow evaluator: a validated form snapshot behind
//! prebuilt indexes, the render surface clients consume, and the
//! per-respondent fill-out session.
//!
//! ## Crate layout
//! - `core`: the pure evaluator (values, conditions, projection, navigation,
//!   reference text).
//! - `schema`: the structural graph and its validation.
//! - `engine`: [`FormEngine`], one validated snapshot plus indexes.
//! - `session`: [`FormSession`], one respondent's mutable state.

pub use formflow_core as core;
pub use formflow_schema as schema;

pub mod engine;
pub mod index;
pub mod render;
pub mod session;

// test
#[cfg(test)]
pub(crate) mod test_support;

// re-exports
pub use engine::{EngineError, FormEngine};
pub use render::{PageRender, RenderedField, RenderedPage};
pub use session::{FormSession, SessionStatus, VisitedFieldRegistry};

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        engine::{EngineError, FormEngine},
        render::{PageRender, RenderedField, RenderedPage},
        session::{FormSession, SessionStatus},
    };
    pub use formflow_core::prelude::*;
    pub use formflow_schema::prelude::*;
}
