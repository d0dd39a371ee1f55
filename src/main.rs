use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use workout_export::config::{
    DEFAULT_EXERCISES_PATH, DEFAULT_TEMPLATE_DIR, ExerciseOptions, ExportConfig, TemplateOptions,
};
use workout_export::{Result, ToolError, export};

fn main() {
    let cli = Cli::parse();
    if let Err(error) = run(cli) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    init_logging()?;
    let config = cli.into_config();
    let stdout = std::io::stdout();
    export::run(&config, stdout.lock())
}

fn init_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| ToolError::Logging(error.to_string()))
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Print the exercise catalog and weekly day templates as JSON."
)]
struct Cli {
    /// Exercise catalog workbook.
    #[arg(long, default_value = DEFAULT_EXERCISES_PATH)]
    exercises: PathBuf,

    /// Directory holding the `Day N.xlsx` template workbooks.
    #[arg(long, default_value = DEFAULT_TEMPLATE_DIR)]
    templates: PathBuf,

    /// Treat the first row of each template sheet as a header and skip it.
    #[arg(long)]
    skip_template_header: bool,

    /// Fail unless the catalog header reads category, bodyPart, name, equipment.
    #[arg(long)]
    strict_header: bool,
}

impl Cli {
    fn into_config(self) -> ExportConfig {
        ExportConfig {
            exercises_path: self.exercises,
            template_dir: self.templates,
            exercise_options: ExerciseOptions {
                strict_header: self.strict_header,
            },
            template_options: TemplateOptions {
                skip_header: self.skip_template_header,
            },
        }
    }
}
