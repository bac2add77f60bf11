//! Check results and the long-format report contract.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Identifier of one offending item.
///
/// Checks report different kinds of identifiers (column positions, column
/// names, variable names); the untagged representation keeps issue lists as
/// plain numbers and strings on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Issue {
    /// A zero-based position (e.g. of a blank header).
    Position(usize),
    /// A column or variable name.
    Name(String),
}

impl From<usize> for Issue {
    fn from(position: usize) -> Self {
        Issue::Position(position)
    }
}

impl From<&str> for Issue {
    fn from(name: &str) -> Self {
        Issue::Name(name.to_string())
    }
}

impl From<String> for Issue {
    fn from(name: String) -> Self {
        Issue::Name(name)
    }
}

/// Outcome of one named check: how many items failed, and which.
///
/// Some checks report a count without naming items (e.g. blank rows), so the
/// issue list may be empty while the count is not.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    pub count: usize,
    #[serde(rename = "issue")]
    pub issues: Vec<Issue>,
}

impl CheckResult {
    /// Result whose count is the number of listed issues.
    pub fn from_issues<I: Into<Issue>>(issues: impl IntoIterator<Item = I>) -> Self {
        let issues: Vec<Issue> = issues.into_iter().map(Into::into).collect();
        Self {
            count: issues.len(),
            issues,
        }
    }

    /// Result that carries a count but names no items.
    pub fn count_only(count: usize) -> Self {
        Self {
            count,
            issues: Vec::new(),
        }
    }
}

/// Report of one validation run: check name to result, in execution order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationReport {
    checks: IndexMap<String, CheckResult>,
}

/// One row of the long-format report. `issue_type` is the fixed literal
/// `"count"` on every row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LongRow {
    pub check: String,
    pub issue_type: String,
    pub count: usize,
    pub issue: Vec<Issue>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, check: impl Into<String>, result: CheckResult) {
        self.checks.insert(check.into(), result);
    }

    pub fn get(&self, check: &str) -> Option<&CheckResult> {
        self.checks.get(check)
    }

    pub fn contains(&self, check: &str) -> bool {
        self.checks.contains_key(check)
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CheckResult)> {
        self.checks.iter().map(|(name, result)| (name.as_str(), result))
    }

    /// Convert to the long format: one row per check.
    pub fn to_long_rows(&self) -> Vec<LongRow> {
        self.checks
            .iter()
            .map(|(check, result)| LongRow {
                check: check.clone(),
                issue_type: "count".to_string(),
                count: result.count,
                issue: result.issues.clone(),
            })
            .collect()
    }

    /// Rebuild a report from long-format rows. Inverse of
    /// [`to_long_rows`](Self::to_long_rows); the `issue_type` tag carries no
    /// information and is dropped.
    pub fn from_long_rows(rows: impl IntoIterator<Item = LongRow>) -> Self {
        let mut report = Self::new();
        for row in rows {
            report.insert(
                row.check,
                CheckResult {
                    count: row.count,
                    issues: row.issue,
                },
            );
        }
        report
    }
}
