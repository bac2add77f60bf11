//! The two validation suites and the pieces they share.

mod run;
mod schema;
mod structure;

pub use run::{run_both_validations, validate_tables, CombinedReport};
pub use schema::{SchemaCheck, SchemaValidator, STANDARD_HEADERS};
pub use structure::{StructureCheck, StructureValidator};

/// Variable names that must appear both as dataset columns and as data
/// dictionary entries. Fixed for the lifetime of the process.
pub const MINIMAL_VARS: &[&str] = &["AGE", "SEX"];

/// Which checks of a suite to run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CheckSet {
    /// Every check, including the minimal-variable check.
    #[default]
    All,
    /// Every check except the minimal-variable check.
    NoMinimalVars,
}

impl CheckSet {
    pub fn includes_minimal_vars(self) -> bool {
        matches!(self, CheckSet::All)
    }
}

/// Classify one cell as blank: missing, empty, or "na" in any case.
///
/// Cells reach the suites as text, so no further coercion happens here.
/// Whitespace is data: `" "` and `"n/a"` are not blank.
pub fn is_blank(cell: Option<&str>) -> bool {
    match cell {
        None => true,
        Some(text) => text.is_empty() || text.eq_ignore_ascii_case("na"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_cells() {
        assert!(is_blank(None));
        assert!(is_blank(Some("")));
        assert!(is_blank(Some("na")));
        assert!(is_blank(Some("NA")));
        assert!(is_blank(Some("Na")));
    }

    #[test]
    fn test_non_blank_cells() {
        assert!(!is_blank(Some("n/a")));
        assert!(!is_blank(Some("0")));
        assert!(!is_blank(Some(" ")));
        assert!(!is_blank(Some("value")));
    }
}
