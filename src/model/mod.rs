use serde::Serialize;

/// Column names of the exercise catalog, in sheet order. Column `i` of every
/// data row feeds the field named `EXERCISE_COLUMNS[i]`.
pub const EXERCISE_COLUMNS: [&str; 4] = ["category", "bodyPart", "name", "equipment"];

/// Raw value of a non-empty spreadsheet cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Text cell.
    Text(String),
    /// Integer cell, including whole numbers stored as floats.
    Int(i64),
    /// Fractional number cell. Date cells also land here as serials.
    Float(f64),
    /// Boolean cell.
    Bool(bool),
}

impl CellValue {
    /// Renders the value the way it reads in the sheet.
    pub fn to_text(&self) -> String {
        match self {
            CellValue::Text(value) => value.clone(),
            CellValue::Int(value) => value.to_string(),
            CellValue::Float(value) => value.to_string(),
            CellValue::Bool(value) => value.to_string(),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

/// One row of the exercise catalog.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseRecord {
    pub category: Option<String>,
    pub body_part: Option<String>,
    pub name: Option<String>,
    pub equipment: Option<String>,
}

impl ExerciseRecord {
    /// Builds a record from cells laid out in [`EXERCISE_COLUMNS`] order; each
    /// cell is assigned to the field named by its column. Missing trailing
    /// cells become `None`.
    pub fn from_columns(cells: &[Option<CellValue>]) -> Self {
        let mut record = Self::default();
        for (column, cell) in EXERCISE_COLUMNS.iter().zip(cells) {
            let value = cell.as_ref().map(CellValue::to_text);
            match *column {
                "category" => record.category = value,
                "bodyPart" => record.body_part = value,
                "name" => record.name = value,
                "equipment" => record.equipment = value,
                _ => {}
            }
        }
        record
    }
}

/// One day of the weekly plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemplateRecord {
    pub id: String,
    pub name: String,
    pub exercises: Vec<CellValue>,
}

impl TemplateRecord {
    /// Creates a template for the given day. Identity comes from the day
    /// number alone.
    pub fn for_day(day: u32, exercises: Vec<CellValue>) -> Self {
        Self {
            id: format!("day{day}"),
            name: format!("Day {day}"),
            exercises,
        }
    }
}

/// Everything a run loads before anything is printed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    pub exercises: Vec<ExerciseRecord>,
    pub templates: Vec<TemplateRecord>,
}
