use crate::error::RecError;

/// A loosely-typed tabular dataset as handed over by the loader: one header
/// row plus string cells. All typed validation happens in `catalog::build`.
#[derive(Debug, Clone, Default)]
pub struct Table {
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(name: impl Into<String>, headers: Vec<String>) -> Self {
        Self { name: name.into(), headers, rows: Vec::new() }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Position of `column` in the header row, or a schema error naming the
    /// table and the column.
    pub fn require_column(&self, column: &str) -> Result<usize, RecError> {
        self.headers.iter().position(|h| h == column).ok_or_else(|| RecError::Schema {
            table: self.name.clone(),
            column: column.to_string(),
        })
    }

    /// Cell at (row, col); rows shorter than the header row read as empty.
    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.rows[row].get(col).map(String::as_str).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
