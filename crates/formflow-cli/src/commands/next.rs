use crate::commands::{load_answers, load_engine};
use anyhow::Result;
use formflow::{core::eval::NextPage, schema::types::PageId};
use std::path::Path;

pub fn run(path: &Path, page: u64, answers: Option<&Path>) -> Result<()> {
    let engine = load_engine(path)?;
    let answers = load_answers(answers)?;

    match engine.next_page(PageId::new(page), &answers)? {
        NextPage::Goto(id) => println!("goto {id}"),
        NextPage::Complete => println!("complete"),
    }

    Ok(())
}
