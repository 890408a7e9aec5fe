use crate::commands::load_form;
use anyhow::{Result, bail};
use formflow::schema::validate::validate_form;
use std::path::Path;

pub fn run(path: &Path) -> Result<()> {
    let form = load_form(path)?;

    match validate_form(&form) {
        Ok(()) => {
            println!(
                "ok: {} page(s), {} field(s)",
                form.pages.len(),
                form.fields().count()
            );

            Ok(())
        }
        Err(errors) => {
            for error in &errors {
                eprintln!("error: {error}");
            }

            bail!("{} structural violation(s)", errors.len())
        }
    }
}
