#![allow(dead_code)]

use std::fs;
use std::path::Path;

use rust_xlsxwriter::Workbook;

/// Writes `rows` to the first sheet of a new workbook. Empty strings leave the
/// cell unwritten.
pub fn write_sheet(path: &Path, rows: &[&[&str]]) {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    for (row_idx, row) in rows.iter().enumerate() {
        for (col_idx, cell) in row.iter().enumerate() {
            if cell.is_empty() {
                continue;
            }
            worksheet
                .write_string(row_idx as u32, col_idx as u16, *cell)
                .expect("cell written");
        }
    }
    workbook.save(path).expect("workbook saved");
}

/// Lays out `exercise/exercises.xlsx` and `template/Day 1..7.xlsx` under `root`.
pub fn write_fixture_tree(root: &Path) {
    let exercise_dir = root.join("exercise");
    let template_dir = root.join("template");
    fs::create_dir_all(&exercise_dir).expect("exercise dir");
    fs::create_dir_all(&template_dir).expect("template dir");

    write_sheet(
        &exercise_dir.join("exercises.xlsx"),
        &[
            &["category", "bodyPart", "name", "equipment"],
            &["Strength", "Legs", "Squat", "Barbell"],
            &["", "Chest", "Ghost", "Cable"],
            &["Strength", "Back", "Row", "Dumbbell"],
            &["Cardio", "Full Body"],
        ],
    );

    for day in 1..=7 {
        let path = template_dir.join(format!("Day {day}.xlsx"));
        if day == 1 {
            write_sheet(&path, &[&["Squat"], &["Row"], &[""], &["Curl"]]);
        } else {
            write_sheet(&path, &[&["Row"]]);
        }
    }
}
