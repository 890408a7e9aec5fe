//! Subcommand implementations plus the shared loaders.

pub mod next;
pub mod render;
pub mod run;
pub mod text;
pub mod validate;

use anyhow::{Context, Result};
use formflow::{FormEngine, core::value::AnswerSet, schema::node::Form};
use std::path::Path;

pub fn load_form(path: &Path) -> Result<Form> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let form =
        serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))?;

    Ok(form)
}

pub fn load_engine(path: &Path) -> Result<FormEngine> {
    let form = load_form(path)?;

    Ok(FormEngine::new(form)?)
}

/// Answers are a JSON object keyed by field name; `None` means none given.
pub fn load_answers(path: Option<&Path>) -> Result<AnswerSet> {
    let Some(path) = path else {
        return Ok(AnswerSet::new());
    };
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let answers =
        serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))?;

    Ok(answers)
}
