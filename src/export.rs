use std::io::Write;

use serde::Serialize;
use tracing::{info, instrument};

use crate::config::ExportConfig;
use crate::error::Result;
use crate::io::excel_read;
use crate::model::Catalog;

/// Header printed above the exercise catalog.
pub const EXERCISES_HEADER: &str = "=== EXERCISES ===";

/// Header printed above the day templates.
pub const TEMPLATES_HEADER: &str = "=== TEMPLATES ===";

/// Loads the exercise catalog and every day template.
#[instrument(
    level = "info",
    skip_all,
    fields(
        exercises = %config.exercises_path.display(),
        templates = %config.template_dir.display()
    )
)]
pub fn load(config: &ExportConfig) -> Result<Catalog> {
    let exercises = excel_read::read_exercises(&config.exercises_path, config.exercise_options)?;
    let templates = excel_read::read_templates(&config.template_dir, config.template_options)?;
    info!(
        exercise_count = exercises.len(),
        template_count = templates.len(),
        "catalog loaded"
    );
    Ok(Catalog {
        exercises,
        templates,
    })
}

/// Renders the catalog as the labelled two-block JSON document.
pub fn render(catalog: &Catalog) -> Result<String> {
    let mut output = String::new();
    push_section(&mut output, EXERCISES_HEADER, &catalog.exercises)?;
    output.push('\n');
    push_section(&mut output, TEMPLATES_HEADER, &catalog.templates)?;
    Ok(output)
}

/// Loads, renders and writes the document. Nothing is written unless every
/// input was read successfully.
pub fn run<W: Write>(config: &ExportConfig, mut writer: W) -> Result<()> {
    let catalog = load(config)?;
    let output = render(&catalog)?;
    writer.write_all(output.as_bytes())?;
    writer.flush()?;
    Ok(())
}

fn push_section<T: Serialize>(output: &mut String, header: &str, items: &[T]) -> Result<()> {
    output.push_str(header);
    output.push('\n');
    output.push_str(&serde_json::to_string_pretty(items)?);
    output.push('\n');
    Ok(())
}
