//! Schema checks on the data dictionary table.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::input::DataTable;
use crate::report::{CheckResult, ValidationReport};

use super::{is_blank, CheckSet, MINIMAL_VARS};

/// Header columns every data dictionary is expected to carry, in order.
pub const STANDARD_HEADERS: &[&str] = &[
    "VariableName",
    "Title",
    "Unit_of_Measure",
    "Description",
    "Comments",
    "PermittedValues",
    "DataType",
    "MaximumValue",
    "MinimumValue",
];

/// The column every variable-level check keys on.
const KEY_COLUMN: &str = "VariableName";

/// Longest accepted variable name, in characters.
const MAX_NAME_CHARS: usize = 60;

static OTHER_SYMBOLS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^A-Za-z0-9_.]").unwrap());
static LEADING_LETTER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z]").unwrap());

/// The data dictionary checks, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaCheck {
    DataDicHeaders,
    MissingMinimalVar,
    MissingTitle,
    MissingDescription,
    OtherSymbols,
    Pos1Char,
    Over60Char,
}

impl SchemaCheck {
    pub const ALL: &'static [SchemaCheck] = &[
        SchemaCheck::DataDicHeaders,
        SchemaCheck::MissingMinimalVar,
        SchemaCheck::MissingTitle,
        SchemaCheck::MissingDescription,
        SchemaCheck::OtherSymbols,
        SchemaCheck::Pos1Char,
        SchemaCheck::Over60Char,
    ];

    /// Report key for this check.
    pub fn name(self) -> &'static str {
        match self {
            SchemaCheck::DataDicHeaders => "data_dic_headers",
            SchemaCheck::MissingMinimalVar => "missing_minimal_var",
            SchemaCheck::MissingTitle => "missing_title",
            SchemaCheck::MissingDescription => "missing_description",
            SchemaCheck::OtherSymbols => "other_symbols",
            SchemaCheck::Pos1Char => "pos1_char",
            SchemaCheck::Over60Char => "over_60char",
        }
    }

    fn selected(self, set: CheckSet) -> bool {
        self != SchemaCheck::MissingMinimalVar || set.includes_minimal_vars()
    }
}

/// Validates the completeness and naming conventions of a data dictionary.
#[derive(Debug, Default)]
pub struct SchemaValidator;

impl SchemaValidator {
    pub fn new() -> Self {
        Self
    }

    /// Run the selected checks, one result per check, in fixed order.
    ///
    /// Without a `VariableName` column only the header check can run; the
    /// report is returned with that single entry and every variable-level
    /// check skipped.
    pub fn validate(&self, table: &DataTable, set: CheckSet) -> ValidationReport {
        let mut report = ValidationReport::new();
        report.insert(
            SchemaCheck::DataDicHeaders.name(),
            self.missing_headers(table),
        );

        let Some(key_pos) = table.position_of(KEY_COLUMN) else {
            return report;
        };

        // Non-missing variable names; empty strings are present and stay in.
        let variables: Vec<&str> = table.column_values(key_pos).flatten().collect();

        for &check in SchemaCheck::ALL {
            if !check.selected(set) {
                continue;
            }
            let result = match check {
                SchemaCheck::DataDicHeaders => continue,
                SchemaCheck::MissingMinimalVar => self.missing_minimal_vars(&variables),
                SchemaCheck::MissingTitle => self.blank_metadata(table, key_pos, "Title"),
                SchemaCheck::MissingDescription => {
                    self.blank_metadata(table, key_pos, "Description")
                }
                SchemaCheck::OtherSymbols => CheckResult::from_issues(
                    variables
                        .iter()
                        .filter(|var| OTHER_SYMBOLS.is_match(var))
                        .copied(),
                ),
                SchemaCheck::Pos1Char => CheckResult::from_issues(
                    variables
                        .iter()
                        .filter(|var| !LEADING_LETTER.is_match(var))
                        .copied(),
                ),
                SchemaCheck::Over60Char => CheckResult::from_issues(
                    variables
                        .iter()
                        .filter(|var| var.chars().count() > MAX_NAME_CHARS)
                        .copied(),
                ),
            };
            report.insert(check.name(), result);
        }

        report
    }

    /// Standard headers absent from the table, in standard order.
    fn missing_headers(&self, table: &DataTable) -> CheckResult {
        CheckResult::from_issues(
            STANDARD_HEADERS
                .iter()
                .filter(|header| !table.headers.iter().any(|h| h == *header))
                .copied(),
        )
    }

    /// Minimal required variables absent from the variable names.
    fn missing_minimal_vars(&self, variables: &[&str]) -> CheckResult {
        CheckResult::from_issues(
            MINIMAL_VARS
                .iter()
                .filter(|var| !variables.contains(var))
                .copied(),
        )
    }

    /// Variables whose metadata cell in `column` is blank. A column absent
    /// from the table counts as all-missing, so every variable is reported.
    fn blank_metadata(&self, table: &DataTable, key_pos: usize, column: &str) -> CheckResult {
        let meta_pos = table.position_of(column);

        let mut issues: Vec<&str> = Vec::new();
        for row in 0..table.row_count() {
            let cell = meta_pos.and_then(|pos| table.get(row, pos));
            if is_blank(cell) {
                if let Some(var) = table.get(row, key_pos) {
                    issues.push(var);
                }
            }
        }
        CheckResult::from_issues(issues)
    }
}
