use crate::commands::{load_answers, load_engine};
use anyhow::Result;
use std::path::Path;

pub fn run(
    path: &Path,
    template: &str,
    answers: Option<&Path>,
    encode: bool,
    decode: bool,
) -> Result<()> {
    let engine = load_engine(path)?;

    let output = if encode {
        engine.encode_references(template)
    } else if decode {
        engine.decode_references(template)
    } else {
        let answers = load_answers(answers)?;
        engine.interpolate(template, &answers)
    };
    println!("{output}");

    Ok(())
}
