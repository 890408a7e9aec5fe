use crate::commands::{load_answers, load_engine};
use anyhow::Result;
use formflow::schema::types::PageId;
use std::path::Path;

pub fn run(path: &Path, answers: Option<&Path>, page: Option<u64>) -> Result<()> {
    let engine = load_engine(path)?;
    let answers = load_answers(answers)?;
    let page_id = page.map_or_else(|| engine.first_page(), PageId::new);

    let render = engine.render_page(page_id, &answers)?;
    println!("{}", serde_json::to_string_pretty(&render)?);

    Ok(())
}
