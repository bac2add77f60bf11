//! Combined structure + schema runs over a matched pair of tables.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::input::{rows_to_table, DataTable, RowRecord};
use crate::report::ValidationReport;

use super::{CheckSet, SchemaValidator, StructureValidator};

/// Reports for one dataset + data dictionary pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinedReport {
    pub structure: ValidationReport,
    pub schema: ValidationReport,
}

/// Run both suites over already-built tables.
///
/// The runs are independent and order-insensitive: the structure suite only
/// reads the dataset, the schema suite only reads the dictionary.
pub fn validate_tables(dataset: &DataTable, datadic: &DataTable) -> CombinedReport {
    CombinedReport {
        structure: StructureValidator::new().validate(dataset, CheckSet::All),
        schema: SchemaValidator::new().validate(datadic, CheckSet::All),
    }
}

/// Convert two row sequences into tables and run both suites.
///
/// A conversion failure on either input fails the whole call; there is no
/// partial-result contract.
pub fn run_both_validations(
    dataset: &[RowRecord],
    datadic: &[RowRecord],
) -> Result<CombinedReport> {
    let dataset_table = rows_to_table(dataset)?;
    let datadic_table = rows_to_table(datadic)?;
    Ok(validate_tables(&dataset_table, &datadic_table))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TabqcError;
    use serde_json::json;

    fn records(value: serde_json::Value) -> Vec<RowRecord> {
        value
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_object().unwrap().clone())
            .collect()
    }

    #[test]
    fn test_combined_report_keys() {
        let report = run_both_validations(&[], &[]).unwrap();
        let value = serde_json::to_value(&report).unwrap();

        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert!(object.contains_key("structure"));
        assert!(object.contains_key("schema"));
    }

    #[test]
    fn test_suites_do_not_cross_contaminate() {
        let dataset = records(json!([
            {"AGE": "30", "SEX": "F", "copy": "x", "copy2": "x"}
        ]));
        let datadic = records(json!([
            {"VariableName": "AGE", "Title": "", "Description": "years"}
        ]));

        let report = run_both_validations(&dataset, &datadic).unwrap();

        assert!(report.structure.contains("duplicated_column"));
        assert!(!report.structure.contains("missing_title"));
        assert!(report.schema.contains("missing_title"));
        assert!(!report.schema.contains("duplicated_column"));
    }

    #[test]
    fn test_conversion_failure_fails_the_whole_call() {
        let dataset = records(json!([{"a": {"nested": true}}]));
        let datadic = records(json!([{"VariableName": "AGE"}]));

        let result = run_both_validations(&dataset, &datadic);
        assert!(matches!(result, Err(TabqcError::MalformedRows(_))));
    }
}
