//! Conversion of row records into a [`DataTable`].

use indexmap::IndexSet;
use serde_json::Value;

use crate::error::{Result, TabqcError};

use super::table::DataTable;

/// One uploaded row: a mapping from field name to JSON value.
pub type RowRecord = serde_json::Map<String, Value>;

/// Build a table from a sequence of row records.
///
/// Headers are the union of field names across all rows, in first-encountered
/// order. Rows do not need a common shape: a field missing from a row becomes
/// a missing cell. An empty sequence yields a table with zero columns and
/// zero rows.
pub fn rows_to_table(rows: &[RowRecord]) -> Result<DataTable> {
    if rows.is_empty() {
        return Ok(DataTable::empty());
    }

    let mut headers: IndexSet<String> = IndexSet::new();
    for row in rows {
        for key in row.keys() {
            headers.insert(key.clone());
        }
    }

    let mut table_rows = Vec::with_capacity(rows.len());
    for row in rows {
        let mut cells = Vec::with_capacity(headers.len());
        for header in &headers {
            cells.push(match row.get(header) {
                None => None,
                Some(value) => coerce_cell(header, value)?,
            });
        }
        table_rows.push(cells);
    }

    Ok(DataTable::new(headers.into_iter().collect(), table_rows))
}

/// Coerce one JSON value to cell text. All checks treat cells as text, so
/// numbers and booleans use their display form; nested values cannot form a
/// uniform table and are rejected.
fn coerce_cell(field: &str, value: &Value) -> Result<Option<String>> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        Value::Array(_) | Value::Object(_) => Err(TabqcError::MalformedRows(format!(
            "field '{field}' holds a nested value"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> RowRecord {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn test_headers_union_in_first_encountered_order() {
        let rows = vec![
            record(json!({"a": 1, "b": "x"})),
            record(json!({"c": true, "a": 2})),
        ];

        let table = rows_to_table(&rows).unwrap();
        assert_eq!(table.headers, vec!["a", "b", "c"]);
        assert_eq!(table.rows[0], vec![Some("1".into()), Some("x".into()), None]);
        assert_eq!(table.rows[1], vec![Some("2".into()), None, Some("true".into())]);
    }

    #[test]
    fn test_null_becomes_missing_cell() {
        let rows = vec![record(json!({"a": null, "b": ""}))];
        let table = rows_to_table(&rows).unwrap();
        assert_eq!(table.rows[0], vec![None, Some(String::new())]);
    }

    #[test]
    fn test_empty_rows_yield_empty_table() {
        let table = rows_to_table(&[]).unwrap();
        assert_eq!(table.column_count(), 0);
        assert_eq!(table.row_count(), 0);
    }

    #[test]
    fn test_nested_value_is_rejected() {
        let rows = vec![record(json!({"a": [1, 2]}))];
        let err = rows_to_table(&rows).unwrap_err();
        assert!(matches!(err, TabqcError::MalformedRows(_)));
    }
}
