//! Developer CLI for FormFlow form documents.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "formflow")]
#[command(about = "FormFlow developer tools", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a form document and report every structural violation
    Validate {
        /// Path to the form JSON document
        form: PathBuf,
    },

    /// Render one page as the client-facing JSON
    Render {
        form: PathBuf,

        /// Answers JSON file (an object keyed by field name)
        #[arg(long)]
        answers: Option<PathBuf>,

        /// Page id; defaults to the first page
        #[arg(long)]
        page: Option<u64>,
    },

    /// Resolve where submitting a page leads
    Next {
        form: PathBuf,

        /// Page id to submit
        #[arg(long)]
        page: u64,

        #[arg(long)]
        answers: Option<PathBuf>,
    },

    /// Interpolate a template, or run the reference codec over it
    Text {
        form: PathBuf,

        /// Template text with @name references
        template: String,

        #[arg(long)]
        answers: Option<PathBuf>,

        /// Rewrite @name tokens to @#id instead of interpolating
        #[arg(long, conflicts_with = "decode")]
        encode: bool,

        /// Rewrite @#id tokens back to @name instead of interpolating
        #[arg(long)]
        decode: bool,
    },

    /// Fill a form interactively
    Run {
        form: PathBuf,

        /// Session id; generated when omitted
        #[arg(long)]
        session: Option<String>,

        /// Print evaluation counters at the end
        #[arg(long)]
        metrics: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { form } => commands::validate::run(&form),
        Commands::Render {
            form,
            answers,
            page,
        } => commands::render::run(&form, answers.as_deref(), page),
        Commands::Next {
            form,
            page,
            answers,
        } => commands::next::run(&form, page, answers.as_deref()),
        Commands::Text {
            form,
            template,
            answers,
            encode,
            decode,
        } => commands::text::run(&form, &template, answers.as_deref(), encode, decode),
        Commands::Run {
            form,
            session,
            metrics,
        } => commands::run::run(&form, session, metrics),
    }
}
