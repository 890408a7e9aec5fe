use crate::commands::load_engine;
use anyhow::Result;
use formflow::{
    FormEngine, FormSession, SessionStatus,
    core::{
        obs::{CountingSink, with_metrics_sink},
        value::Value,
    },
    render::RenderedField,
    schema::types::FieldType,
};
use rustyline::{DefaultEditor, error::ReadlineError};
use std::{collections::BTreeSet, path::Path, sync::Arc};
use ulid::Ulid;

pub fn run(path: &Path, session_id: Option<String>, metrics: bool) -> Result<()> {
    let engine = Arc::new(load_engine(path)?);
    let session_id = session_id.unwrap_or_else(|| Ulid::new().to_string());

    if metrics {
        let sink = CountingSink::new();
        let outcome = with_metrics_sink(&sink, || fill(engine, &session_id));
        println!("{}", serde_json::to_string_pretty(&sink.snapshot())?);

        outcome
    } else {
        fill(engine, &session_id)
    }
}

fn fill(engine: Arc<FormEngine>, session_id: &str) -> Result<()> {
    let mut editor = DefaultEditor::new()?;
    let mut session = FormSession::start(engine, session_id);
    println!("session {session_id}");

    'pages: loop {
        let mut prompted: BTreeSet<String> = BTreeSet::new();
        println!("\n== {} ==", session.render()?.page.title);

        // Re-render after every answer so same-page reveals prompt too.
        'fields: loop {
            let render = session.render()?;
            for field in &render.page.fields {
                if !field.state.is_visible || prompted.contains(&field.name) {
                    continue;
                }
                prompted.insert(field.name.clone());

                if field.field_type == FieldType::Paragraph {
                    if let Some(content) = &field.content {
                        println!("{content}");
                    }
                    continue;
                }

                let Some(value) = prompt_field(&mut editor, field)? else {
                    session.abandon();
                    break 'pages;
                };
                session.set_answer(&field.name, value)?;
                continue 'fields;
            }

            break;
        }

        if session.advance()?.is_complete() {
            break;
        }
    }

    match session.status() {
        SessionStatus::Completed => {
            println!("\ncompleted {session_id}");
            println!("{}", serde_json::to_string_pretty(session.answers())?);
        }
        status => println!("\n{status}"),
    }

    Ok(())
}

/// Prompt until the line parses for the field's type. `None` means the
/// respondent bailed out (ctrl-c / ctrl-d).
fn prompt_field(editor: &mut DefaultEditor, field: &RenderedField) -> Result<Option<Value>> {
    let marker = if field.state.is_required { " *" } else { "" };
    let prompt = format!("{}{marker}> ", field.label);

    loop {
        match editor.readline(&prompt) {
            Ok(line) => {
                let line = line.trim();
                if !line.is_empty() {
                    editor.add_history_entry(line)?;
                }
                match parse_answer(line, field.field_type) {
                    Ok(value) => return Ok(Some(value)),
                    Err(reason) => println!("{reason}"),
                }
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => return Ok(None),
            Err(err) => return Err(err.into()),
        }
    }
}

fn parse_answer(line: &str, field_type: FieldType) -> Result<Value, String> {
    if line.is_empty() {
        return Ok(Value::Empty);
    }

    match field_type {
        FieldType::Number | FieldType::Rating => line
            .parse::<f64>()
            .map(Value::Number)
            .map_err(|_| format!("'{line}' is not a number")),
        FieldType::Boolean => match line.to_ascii_lowercase().as_str() {
            "y" | "yes" | "true" | "1" => Ok(Value::Bool(true)),
            "n" | "no" | "false" | "0" => Ok(Value::Bool(false)),
            _ => Err(format!("'{line}' is not yes/no")),
        },
        FieldType::Checkbox | FieldType::Multiselect => Ok(Value::List(
            line.split(',').map(|part| part.trim().to_string()).collect(),
        )),
        _ => Ok(Value::Text(line.to_string())),
    }
}
