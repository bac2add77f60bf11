//! Structural checks on the dataset table.

use indexmap::IndexMap;
use sha2::{Digest, Sha256};

use crate::input::DataTable;
use crate::report::{CheckResult, ValidationReport};

use super::{is_blank, CheckSet, MINIMAL_VARS};

/// Separator for row/column content keys. Not expected in cell data.
const JOIN: &str = "\u{1f}";

/// The dataset checks, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructureCheck {
    BlankHeader,
    DuplicatedHeader,
    BlankRow,
    BlankColumn,
    DuplicatedRow,
    DuplicatedColumn,
    MinimalVar,
}

impl StructureCheck {
    pub const ALL: &'static [StructureCheck] = &[
        StructureCheck::BlankHeader,
        StructureCheck::DuplicatedHeader,
        StructureCheck::BlankRow,
        StructureCheck::BlankColumn,
        StructureCheck::DuplicatedRow,
        StructureCheck::DuplicatedColumn,
        StructureCheck::MinimalVar,
    ];

    /// Report key for this check.
    pub fn name(self) -> &'static str {
        match self {
            StructureCheck::BlankHeader => "blank_header",
            StructureCheck::DuplicatedHeader => "duplicated_header",
            StructureCheck::BlankRow => "blank_row",
            StructureCheck::BlankColumn => "blank_column",
            StructureCheck::DuplicatedRow => "duplicated_row",
            StructureCheck::DuplicatedColumn => "duplicated_column",
            StructureCheck::MinimalVar => "minimal_var",
        }
    }

    fn selected(self, set: CheckSet) -> bool {
        self != StructureCheck::MinimalVar || set.includes_minimal_vars()
    }
}

/// Validates the shape and content of a dataset table: headers, rows, and
/// columns that are blank or duplicated, plus the minimal required columns.
#[derive(Debug, Default)]
pub struct StructureValidator;

impl StructureValidator {
    pub fn new() -> Self {
        Self
    }

    /// Run the selected checks, one result per check, in fixed order.
    pub fn validate(&self, table: &DataTable, set: CheckSet) -> ValidationReport {
        let mut report = ValidationReport::new();

        for &check in StructureCheck::ALL {
            if !check.selected(set) {
                continue;
            }
            let result = match check {
                StructureCheck::BlankHeader => self.blank_headers(table),
                StructureCheck::DuplicatedHeader => self.duplicated_headers(table),
                StructureCheck::BlankRow => self.blank_rows(table),
                StructureCheck::BlankColumn => self.blank_columns(table),
                StructureCheck::DuplicatedRow => self.duplicated_rows(table),
                StructureCheck::DuplicatedColumn => self.duplicated_columns(table),
                StructureCheck::MinimalVar => self.minimal_vars(table),
            };
            report.insert(check.name(), result);
        }

        report
    }

    /// Empty column names, reported by zero-based position.
    fn blank_headers(&self, table: &DataTable) -> CheckResult {
        CheckResult::from_issues(
            table
                .headers
                .iter()
                .enumerate()
                .filter(|(_, header)| header.is_empty())
                .map(|(position, _)| position),
        )
    }

    /// Header names occurring more than once, each listed once.
    fn duplicated_headers(&self, table: &DataTable) -> CheckResult {
        let mut counts: IndexMap<&str, usize> = IndexMap::new();
        for header in &table.headers {
            *counts.entry(header.as_str()).or_insert(0) += 1;
        }

        CheckResult::from_issues(
            counts
                .iter()
                .filter(|&(_, &count)| count > 1)
                .map(|(header, _)| *header),
        )
    }

    /// Rows whose every cell is blank. Count only.
    fn blank_rows(&self, table: &DataTable) -> CheckResult {
        let count = table
            .rows
            .iter()
            .filter(|row| row.iter().all(|cell| is_blank(cell.as_deref())))
            .count();
        CheckResult::count_only(count)
    }

    /// Columns whose every cell is blank, by name. A column with no rows is
    /// vacuously blank.
    fn blank_columns(&self, table: &DataTable) -> CheckResult {
        CheckResult::from_issues(
            table
                .headers
                .iter()
                .enumerate()
                .filter(|(position, _)| table.column_values(*position).all(is_blank))
                .map(|(_, header)| header.clone()),
        )
    }

    /// Rows whose content matches another row's. The count is the number of
    /// rows participating in any duplicate set, not the number of sets.
    fn duplicated_rows(&self, table: &DataTable) -> CheckResult {
        let mut counts: IndexMap<String, usize> = IndexMap::new();
        for row in &table.rows {
            let key = row
                .iter()
                .map(|cell| cell.as_deref().unwrap_or(""))
                .collect::<Vec<_>>()
                .join(JOIN);
            *counts.entry(key).or_insert(0) += 1;
        }

        let count = counts.values().filter(|&&c| c > 1).sum();
        CheckResult::count_only(count)
    }

    /// Columns whose content is identical to an earlier column's, reported by
    /// the later column's name. Columns are grouped by content digest first;
    /// a digest match is confirmed by exact comparison before a column is
    /// flagged, so hash collisions cannot produce false positives.
    fn duplicated_columns(&self, table: &DataTable) -> CheckResult {
        let mut groups: IndexMap<[u8; 32], Vec<usize>> = IndexMap::new();
        for position in 0..table.column_count() {
            let mut hasher = Sha256::new();
            for cell in table.column_values(position) {
                hasher.update(cell.unwrap_or("").as_bytes());
                hasher.update(JOIN.as_bytes());
            }
            let digest: [u8; 32] = hasher.finalize().into();
            groups.entry(digest).or_default().push(position);
        }

        let mut duplicates = Vec::new();
        for positions in groups.values() {
            let mut firsts: Vec<usize> = Vec::new();
            for &position in positions {
                let repeat = firsts
                    .iter()
                    .any(|&first| columns_equal(table, first, position));
                if repeat {
                    duplicates.push(position);
                } else {
                    firsts.push(position);
                }
            }
        }
        duplicates.sort_unstable();

        CheckResult::from_issues(
            duplicates
                .into_iter()
                .map(|position| table.headers[position].clone()),
        )
    }

    /// Minimal required variables absent from the column names.
    fn minimal_vars(&self, table: &DataTable) -> CheckResult {
        CheckResult::from_issues(
            MINIMAL_VARS
                .iter()
                .filter(|var| !table.headers.iter().any(|h| h == *var))
                .copied(),
        )
    }
}

fn columns_equal(table: &DataTable, a: usize, b: usize) -> bool {
    table.column_values(a).eq(table.column_values(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Issue;

    fn make_table(headers: Vec<&str>, rows: Vec<Vec<&str>>) -> DataTable {
        DataTable::new(
            headers.into_iter().map(String::from).collect(),
            rows.into_iter()
                .map(|r| r.into_iter().map(|c| Some(c.to_string())).collect())
                .collect(),
        )
    }

    fn validate(table: &DataTable) -> ValidationReport {
        StructureValidator::new().validate(table, CheckSet::All)
    }

    #[test]
    fn test_blank_header_positions() {
        let table = make_table(vec!["", "B", ""], vec![vec!["1", "2", "3"]]);
        let result = validate(&table);

        let blank = result.get("blank_header").unwrap();
        assert_eq!(blank.count, 2);
        assert_eq!(blank.issues, vec![Issue::Position(0), Issue::Position(2)]);
    }

    #[test]
    fn test_duplicated_header_listed_once() {
        let table = make_table(vec!["A", "B", "A"], vec![vec!["1", "2", "3"]]);
        let result = validate(&table);

        let dup = result.get("duplicated_header").unwrap();
        assert_eq!(dup.count, 1);
        assert_eq!(dup.issues, vec![Issue::Name("A".into())]);
    }

    #[test]
    fn test_blank_row_counts_fully_blank_rows_only() {
        let table = make_table(
            vec!["a", "b"],
            vec![
                vec!["1", "2"],
                vec!["x", ""],
                vec!["", "NA"],
            ],
        );
        let result = validate(&table);

        assert_eq!(result.get("blank_row").unwrap().count, 1);
        assert!(result.get("blank_row").unwrap().issues.is_empty());
    }

    #[test]
    fn test_blank_column_by_name() {
        let table = make_table(
            vec!["a", "empty"],
            vec![vec!["1", ""], vec!["2", "na"]],
        );
        let result = validate(&table);

        let blank = result.get("blank_column").unwrap();
        assert_eq!(blank.count, 1);
        assert_eq!(blank.issues, vec![Issue::Name("empty".into())]);
    }

    #[test]
    fn test_duplicated_row_counts_participating_rows() {
        // Two duplicate sets: "1,2" appears three times, "3,4" twice.
        let table = make_table(
            vec!["a", "b"],
            vec![
                vec!["1", "2"],
                vec!["3", "4"],
                vec!["1", "2"],
                vec!["1", "2"],
                vec!["5", "6"],
                vec!["3", "4"],
            ],
        );
        let result = validate(&table);

        assert_eq!(result.get("duplicated_row").unwrap().count, 5);
    }

    #[test]
    fn test_duplicated_column_reports_later_column_only() {
        let table = make_table(
            vec!["first", "other", "second"],
            vec![vec!["x", "1", "x"], vec!["y", "2", "y"]],
        );
        let result = validate(&table);

        let dup = result.get("duplicated_column").unwrap();
        assert_eq!(dup.count, 1);
        assert_eq!(dup.issues, vec![Issue::Name("second".into())]);
    }

    #[test]
    fn test_missing_cell_and_empty_text_share_content_keys() {
        let table = DataTable::new(
            vec!["a".into(), "b".into()],
            vec![
                vec![None, Some("x".into())],
                vec![Some(String::new()), Some("x".into())],
            ],
        );
        let result = validate(&table);

        assert_eq!(result.get("duplicated_row").unwrap().count, 2);
    }

    #[test]
    fn test_minimal_var_reports_missing_names() {
        let table = make_table(vec!["AGE", "WEIGHT"], vec![vec!["1", "2"]]);
        let result = validate(&table);

        let minimal = result.get("minimal_var").unwrap();
        assert_eq!(minimal.count, 1);
        assert_eq!(minimal.issues, vec![Issue::Name("SEX".into())]);
    }

    #[test]
    fn test_reduced_set_omits_minimal_var() {
        let table = make_table(vec!["a"], vec![vec!["1"]]);

        let all = validate(&table);
        assert_eq!(all.len(), 7);

        let reduced = StructureValidator::new().validate(&table, CheckSet::NoMinimalVars);
        assert_eq!(reduced.len(), 6);
        assert!(!reduced.contains("minimal_var"));
    }

    #[test]
    fn test_clean_table_reports_all_zero() {
        let table = make_table(
            vec!["AGE", "SEX", "WEIGHT"],
            vec![vec!["30", "F", "62"], vec!["41", "M", "80"]],
        );
        let result = validate(&table);

        for (name, check) in result.iter() {
            assert_eq!(check.count, 0, "check {name} should pass");
            assert!(check.issues.is_empty());
        }
    }
}
