//! File ingestion: CSV and JSON sources for the validation suites.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde_json::Value;

use crate::error::{Result, TabqcError};

use super::rows::{rows_to_table, RowRecord};
use super::table::DataTable;

/// Cell markers read as missing at ingestion.
const NULL_MARKERS: &[&str] = &["", "NA"];

/// Read a CSV or JSON file into row records, auto-detecting by extension.
///
/// JSON accepts an array of objects, a `{"rows": [...]}` wrapper, or a single
/// object (treated as one row). This is the wire shape the HTTP API takes, so
/// duplicate CSV headers collapse here; use [`read_table`] when header
/// duplication itself is under test.
pub fn read_rows(path: impl AsRef<Path>) -> Result<Vec<RowRecord>> {
    let path = path.as_ref();
    match extension_of(path)?.as_str() {
        "csv" => csv_to_rows(path),
        "json" => json_to_rows(path),
        other => Err(TabqcError::UnsupportedFormat(format!(
            "unsupported file extension '.{other}', use .csv or .json"
        ))),
    }
}

/// Read a CSV or JSON file directly into a [`DataTable`].
///
/// The CSV path preserves headers exactly as written, including blank and
/// duplicated names.
pub fn read_table(path: impl AsRef<Path>) -> Result<DataTable> {
    let path = path.as_ref();
    match extension_of(path)?.as_str() {
        "csv" => csv_to_table(path),
        "json" => rows_to_table(&json_to_rows(path)?),
        other => Err(TabqcError::UnsupportedFormat(format!(
            "unsupported file extension '.{other}', use .csv or .json"
        ))),
    }
}

fn extension_of(path: &Path) -> Result<String> {
    path.extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .ok_or_else(|| {
            TabqcError::UnsupportedFormat(format!(
                "no file extension on '{}', use .csv or .json",
                path.display()
            ))
        })
}

fn csv_to_table(path: &Path) -> Result<DataTable> {
    let file = File::open(path).map_err(|e| TabqcError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let headers: Vec<String> = reader.headers()?.iter().map(|s| s.to_string()).collect();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        rows.push(record.iter().map(read_cell).collect());
    }

    Ok(DataTable::new(headers, rows))
}

fn csv_to_rows(path: &Path) -> Result<Vec<RowRecord>> {
    let table = csv_to_table(path)?;

    let mut rows = Vec::with_capacity(table.row_count());
    for row in &table.rows {
        let mut record = RowRecord::new();
        for (header, cell) in table.headers.iter().zip(row) {
            let value = match cell {
                Some(text) => Value::String(text.clone()),
                None => Value::Null,
            };
            record.insert(header.clone(), value);
        }
        rows.push(record);
    }
    Ok(rows)
}

fn json_to_rows(path: &Path) -> Result<Vec<RowRecord>> {
    let mut contents = String::new();
    File::open(path)
        .and_then(|mut f| f.read_to_string(&mut contents))
        .map_err(|e| TabqcError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

    let data: Value = serde_json::from_str(&contents)?;
    match data {
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::Object(record) => Ok(record),
                _ => Err(TabqcError::MalformedRows(
                    "JSON array must contain objects".to_string(),
                )),
            })
            .collect(),
        Value::Object(mut object) => match object.remove("rows") {
            Some(Value::Array(items)) => items
                .into_iter()
                .map(|item| match item {
                    Value::Object(record) => Ok(record),
                    _ => Err(TabqcError::MalformedRows(
                        "'rows' array must contain objects".to_string(),
                    )),
                })
                .collect(),
            Some(_) => Err(TabqcError::MalformedRows(
                "'rows' must be an array".to_string(),
            )),
            // A single object is one row.
            None => Ok(vec![object]),
        },
        _ => Err(TabqcError::MalformedRows(
            "JSON input must be an array of objects or an object".to_string(),
        )),
    }
}

fn read_cell(field: &str) -> Option<String> {
    if NULL_MARKERS.contains(&field) {
        None
    } else {
        Some(field.to_string())
    }
}
