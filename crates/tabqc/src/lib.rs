//! tabqc: data-quality checks for tabular datasets and data dictionaries.
//!
//! A dataset and its data dictionary are run through two fixed check suites:
//! structural checks on the dataset (blank or duplicated headers, rows, and
//! columns, required minimal columns) and schema checks on the dictionary
//! (standard headers, per-variable metadata, naming conventions). Every
//! check reports a failure count plus the offending identifiers.
//!
//! # Example
//!
//! ```
//! use tabqc::{validate_tables, DataTable};
//!
//! let dataset = DataTable::new(
//!     vec!["AGE".into(), "SEX".into()],
//!     vec![vec![Some("30".into()), Some("F".into())]],
//! );
//! let datadic = DataTable::new(
//!     vec!["VariableName".into(), "Title".into()],
//!     vec![vec![Some("AGE".into()), Some("Age".into())]],
//! );
//!
//! let report = validate_tables(&dataset, &datadic);
//! assert_eq!(report.structure.get("blank_row").unwrap().count, 0);
//! ```

pub mod checks;
pub mod error;
pub mod input;
pub mod report;

pub use checks::{
    is_blank, run_both_validations, validate_tables, CheckSet, CombinedReport, SchemaCheck,
    SchemaValidator, StructureCheck, StructureValidator, MINIMAL_VARS, STANDARD_HEADERS,
};
pub use error::{Result, TabqcError};
pub use input::{read_rows, read_table, rows_to_table, DataTable, RowRecord};
pub use report::{CheckResult, Issue, LongRow, ValidationReport};
