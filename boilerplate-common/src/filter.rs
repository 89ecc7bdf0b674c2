//! Case-insensitive row filtering for list tables

/// Rows at the start of a table that are never filtered
pub const HEADER_ROWS: usize = 1;

/// A lowercased search term
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowFilter {
    term: String,
}

impl RowFilter {
    pub fn new(term: &str) -> Self {
        Self {
            term: term.to_lowercase(),
        }
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    /// Whether a row with this rendered text stays visible
    pub fn matches(&self, row_text: &str) -> bool {
        row_text.to_lowercase().contains(&self.term)
    }

    /// Visibility for every row after the header, in row order
    pub fn visible_rows<'a, I>(&self, rows: I) -> Vec<bool>
    where
        I: IntoIterator<Item = &'a str>,
    {
        rows.into_iter()
            .skip(HEADER_ROWS)
            .map(|row| self.matches(row))
            .collect()
    }
}
