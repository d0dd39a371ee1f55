use std::path::{Path, PathBuf};

/// Number of day templates in a weekly plan.
pub const DAY_COUNT: u32 = 7;

/// Default location of the exercise catalog, relative to the working directory.
pub const DEFAULT_EXERCISES_PATH: &str = "exercise/exercises.xlsx";

/// Default directory holding the `Day N.xlsx` templates.
pub const DEFAULT_TEMPLATE_DIR: &str = "template";

/// File name of the template for `day`.
pub fn template_file_name(day: u32) -> String {
    format!("Day {day}.xlsx")
}

/// Options for reading the exercise catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExerciseOptions {
    /// Require the header row to name the catalog columns in order.
    pub strict_header: bool,
}

/// Options for reading day templates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TemplateOptions {
    /// Discard the first row of each template sheet.
    pub skip_header: bool,
}

/// Inputs of a single export run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    pub exercises_path: PathBuf,
    pub template_dir: PathBuf,
    pub exercise_options: ExerciseOptions,
    pub template_options: TemplateOptions,
}

impl ExportConfig {
    /// Path of the template file for `day`.
    pub fn template_path(&self, day: u32) -> PathBuf {
        template_path(&self.template_dir, day)
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            exercises_path: PathBuf::from(DEFAULT_EXERCISES_PATH),
            template_dir: PathBuf::from(DEFAULT_TEMPLATE_DIR),
            exercise_options: ExerciseOptions::default(),
            template_options: TemplateOptions::default(),
        }
    }
}

pub(crate) fn template_path(dir: &Path, day: u32) -> PathBuf {
    dir.join(template_file_name(day))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_fixed_layout() {
        let config = ExportConfig::default();

        assert_eq!(config.exercises_path, Path::new("exercise/exercises.xlsx"));
        assert_eq!(config.template_path(1), Path::new("template/Day 1.xlsx"));
        assert_eq!(config.template_path(DAY_COUNT), Path::new("template/Day 7.xlsx"));
        assert!(!config.template_options.skip_header);
        assert!(!config.exercise_options.strict_header);
    }
}
