use std::path::Path;

use calamine::{DataType, Range, Reader, Xlsx, open_workbook};
use tracing::{debug, info, instrument};

use crate::config::{DAY_COUNT, ExerciseOptions, TemplateOptions, template_path};
use crate::error::{Result, ToolError};
use crate::model::{CellValue, EXERCISE_COLUMNS, ExerciseRecord, TemplateRecord};

/// Reads the exercise catalog from the first sheet of the workbook at `path`.
///
/// Row 0 is the header and never becomes a record. Data rows with an empty
/// first cell are skipped.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub fn read_exercises(path: &Path, options: ExerciseOptions) -> Result<Vec<ExerciseRecord>> {
    let range = read_first_sheet(path)?;
    let exercises = exercises_from_range(&range, options)?;
    info!(exercise_count = exercises.len(), "read exercise catalog");
    Ok(exercises)
}

/// Reads the template for every day from `Day N.xlsx` files under `dir`.
///
/// Every file is read before this returns, so a missing day fails the whole
/// call.
#[instrument(level = "info", skip_all, fields(dir = %dir.display()))]
pub fn read_templates(dir: &Path, options: TemplateOptions) -> Result<Vec<TemplateRecord>> {
    (1..=DAY_COUNT)
        .map(|day| read_template(&template_path(dir, day), day, options))
        .collect()
}

/// Reads a single day template.
#[instrument(level = "debug", skip_all, fields(path = %path.display(), day = day))]
pub fn read_template(path: &Path, day: u32, options: TemplateOptions) -> Result<TemplateRecord> {
    let range = read_first_sheet(path)?;
    let exercises = template_entries_from_range(&range, options);
    info!(day, entry_count = exercises.len(), "read day template");
    Ok(TemplateRecord::for_day(day, exercises))
}

fn read_first_sheet(path: &Path) -> Result<Range<DataType>> {
    if !path.exists() {
        return Err(ToolError::MissingInput(path.to_path_buf()));
    }

    let mut workbook: Xlsx<_> = open_workbook(path)?;
    let sheet_name = workbook.sheet_names().first().cloned().ok_or_else(|| {
        ToolError::InvalidWorkbook(format!("'{}' has no worksheets", path.display()))
    })?;
    let range_result = workbook
        .worksheet_range(&sheet_name)
        .ok_or_else(|| ToolError::InvalidWorkbook(format!("missing sheet '{sheet_name}'")))?;
    let range = range_result.map_err(ToolError::from)?;
    Ok(range)
}

fn exercises_from_range(
    range: &Range<DataType>,
    options: ExerciseOptions,
) -> Result<Vec<ExerciseRecord>> {
    if options.strict_header {
        check_header(range)?;
    }

    let mut exercises = Vec::new();
    for row in 1..row_count(range) {
        if cell_value(range.get_value((row, 0))).is_none() {
            debug!(row = row + 1, "skipping exercise row with empty first cell");
            continue;
        }

        let cells: Vec<Option<CellValue>> = (0..EXERCISE_COLUMNS.len() as u32)
            .map(|col| cell_value(range.get_value((row, col))))
            .collect();
        exercises.push(ExerciseRecord::from_columns(&cells));
    }

    Ok(exercises)
}

fn template_entries_from_range(range: &Range<DataType>, options: TemplateOptions) -> Vec<CellValue> {
    let first_row = u32::from(options.skip_header);
    (first_row..row_count(range))
        .filter_map(|row| cell_value(range.get_value((row, 0))))
        .collect()
}

fn check_header(range: &Range<DataType>) -> Result<()> {
    for (col_idx, expected) in EXERCISE_COLUMNS.iter().enumerate() {
        let found = cell_value(range.get_value((0, col_idx as u32)))
            .map(|cell| cell.to_text())
            .unwrap_or_default();
        if normalize_header(&found) != normalize_header(expected) {
            return Err(ToolError::ColumnMismatch {
                column: col_idx + 1,
                expected: (*expected).to_string(),
                found,
            });
        }
    }
    Ok(())
}

/// Number of sheet rows up to the last used one. calamine trims leading empty
/// rows and columns off a range, so cells are addressed by absolute sheet
/// position: row 0 is sheet row 1 and column 0 is column A.
fn row_count(range: &Range<DataType>) -> u32 {
    range.end().map(|(last_row, _)| last_row + 1).unwrap_or(0)
}

fn normalize_header(value: &str) -> String {
    value
        .chars()
        .filter(|ch| !ch.is_whitespace() && *ch != '_' && *ch != '-')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Converts a cell into its raw value, or `None` when the cell is empty.
///
/// Only an empty cell or an empty string counts as empty: `0`, `"0"` and
/// `false` are kept. Date cells keep their Excel serial number.
fn cell_value(cell: Option<&DataType>) -> Option<CellValue> {
    match cell {
        Some(DataType::String(value)) if value.is_empty() => None,
        Some(DataType::String(value)) => Some(CellValue::Text(value.clone())),
        Some(DataType::Float(value)) => Some(number_value(*value)),
        Some(DataType::Int(value)) => Some(CellValue::Int(*value)),
        Some(DataType::Bool(value)) => Some(CellValue::Bool(*value)),
        Some(DataType::DateTime(value)) => Some(CellValue::Float(*value)),
        Some(DataType::Empty) | None => None,
        Some(other) => Some(CellValue::Text(other.to_string())),
    }
}

/// xlsx stores every number as a float; whole values come back as integers.
fn number_value(value: f64) -> CellValue {
    if value.fract() == 0.0 && value >= i64::MIN as f64 && value < i64::MAX as f64 {
        CellValue::Int(value as i64)
    } else {
        CellValue::Float(value)
    }
}
