//! Book form - command line host for a single form session
//!
//! Reads a record from a JSON file and drives one form session over it,
//! either as a new entry typed in field by field or as an edit of an
//! existing record. The submitted record is printed as JSON on stdout.

use anyhow::{Context, Result};
use book_form::state::FieldName;
use book_form::{FormConfig, FormModel, InMemoryRegistry, Record};
use clap::Parser;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(
    name = "book-form",
    version,
    about = "Drive a book form session over a JSON record"
)]
struct Args {
    /// Load the record as an existing book (identifier locked).
    #[arg(long)]
    edit: bool,
    /// JSON array of identifiers that already exist.
    #[arg(long)]
    registry: Option<PathBuf>,
    /// Record to enter or edit.
    record: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "book_form=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();
    let config = FormConfig::load()?;

    let registry = match args.registry.as_ref().or(config.registry_path.as_ref()) {
        Some(path) => InMemoryRegistry::load(path)?,
        None => InMemoryRegistry::default(),
    };
    tracing::debug!(known = registry.len(), "identifier registry ready");

    let content = fs::read_to_string(&args.record)
        .with_context(|| format!("Failed to read {}", args.record.display()))?;
    let record: Record = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {}", args.record.display()))?;

    let mut form = FormModel::new(Arc::new(registry), config.form_options());
    if args.edit {
        form.reset(Some(&record));
    } else {
        enter_record(&mut form, &record)?;
    }
    form.settle().await;

    for name in FieldName::ALL {
        let field = form.field(name);
        if field.is_enabled() {
            tracing::info!(field = name.label(), verdict = %field.verdict(), "field");
        }
    }
    tracing::info!(verdict = %form.authors().verdict(), "authors");

    // Handle any errors
    match form.submit() {
        Ok(submitted) => {
            println!("{}", serde_json::to_string_pretty(&submitted)?);
            Ok(())
        }
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
}

/// Type a record into a fresh form the way an operator would
fn enter_record(form: &mut FormModel, record: &Record) -> Result<()> {
    for name in FieldName::ALL {
        form.set_field_value(name, record.get(name));
    }
    for (index, author) in record.authors.iter().enumerate() {
        if index > 0 {
            form.add_list_entry();
        }
        form.set_list_entry(index, author.as_str())?;
    }
    Ok(())
}
