use super::columns;

/// Untyped sheet contents, kept in insertion order.
///
/// This is what the store reads and writes. Cells are plain text; a blank
/// cell is the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    /// Empty table carrying the canonical column header.
    pub fn with_canonical_headers() -> Self {
        Self::new(columns::CANONICAL.iter().map(|c| c.to_string()).collect())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of a column, ignoring surrounding whitespace in header names.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h.trim() == name)
    }

    /// Cell text at (row, column name); absent column or short row → "".
    pub fn cell(&self, row: usize, name: &str) -> &str {
        match self.column_index(name) {
            Some(col) => self
                .rows
                .get(row)
                .and_then(|r| r.get(col))
                .map(String::as_str)
                .unwrap_or(""),
            None => "",
        }
    }

    /// Append a row, padding or truncating it to the header width.
    pub fn push_row(&mut self, mut row: Vec<String>) {
        row.resize(self.headers.len(), String::new());
        self.rows.push(row);
    }

    /// Make sure the column exists, filling existing rows with blanks.
    pub fn ensure_column(&mut self, name: &str) -> usize {
        if let Some(idx) = self.column_index(name) {
            return idx;
        }
        self.headers.push(name.to_string());
        for row in &mut self.rows {
            row.resize(self.headers.len(), String::new());
        }
        self.headers.len() - 1
    }
}
