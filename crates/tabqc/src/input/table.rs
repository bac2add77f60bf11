//! In-memory tabular data.

/// Represents parsed tabular data: named columns over rows of optional cells.
///
/// Every row has exactly as many cells as there are headers; the constructor
/// pads short rows with missing cells and truncates long ones. Header names
/// need not be unique or non-empty -- blank and duplicated headers are a
/// checked property of the data, not a precondition.
#[derive(Debug, Clone, PartialEq)]
pub struct DataTable {
    /// Column headers, in source order.
    pub headers: Vec<String>,
    /// Row data (row-major order). `None` is a missing cell.
    pub rows: Vec<Vec<Option<String>>>,
}

impl DataTable {
    /// Create a new data table, normalizing every row to the header width.
    pub fn new(headers: Vec<String>, mut rows: Vec<Vec<Option<String>>>) -> Self {
        let width = headers.len();
        for row in &mut rows {
            while row.len() < width {
                row.push(None);
            }
            row.truncate(width);
        }
        Self { headers, rows }
    }

    /// Create a table with no columns and no rows.
    pub fn empty() -> Self {
        Self {
            headers: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Get the number of rows (excluding header).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get all values for a column by index.
    pub fn column_values(&self, index: usize) -> impl Iterator<Item = Option<&str>> + '_ {
        self.rows
            .iter()
            .map(move |row| row.get(index).and_then(|c| c.as_deref()))
    }

    /// Get the position of the first column with the given name.
    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Get a column by name.
    pub fn column_by_name(&self, name: &str) -> Option<Vec<Option<&str>>> {
        let index = self.position_of(name)?;
        Some(self.column_values(index).collect())
    }

    /// Get a specific cell value.
    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row).and_then(|r| r.get(col)).and_then(|c| c.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(s: &str) -> Option<String> {
        Some(s.to_string())
    }

    #[test]
    fn test_rows_normalized_to_header_width() {
        let table = DataTable::new(
            vec!["a".into(), "b".into(), "c".into()],
            vec![
                vec![cell("1")],
                vec![cell("2"), cell("3"), cell("4"), cell("5")],
            ],
        );

        assert_eq!(table.rows[0], vec![cell("1"), None, None]);
        assert_eq!(table.rows[1], vec![cell("2"), cell("3"), cell("4")]);
    }

    #[test]
    fn test_column_access() {
        let table = DataTable::new(
            vec!["name".into(), "age".into()],
            vec![
                vec![cell("Alice"), cell("30")],
                vec![cell("Bob"), None],
            ],
        );

        assert_eq!(table.column_count(), 2);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.get(0, 0), Some("Alice"));
        assert_eq!(table.get(1, 1), None);
        assert_eq!(
            table.column_by_name("age"),
            Some(vec![Some("30"), None])
        );
        assert_eq!(table.column_by_name("missing"), None);
    }

    #[test]
    fn test_empty_table() {
        let table = DataTable::empty();
        assert_eq!(table.column_count(), 0);
        assert_eq!(table.row_count(), 0);
    }
}
