//! Table types.

use super::Paragraph;
use serde::{Deserialize, Serialize};

/// A table structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Table {
    /// Rows in the table
    pub rows: Vec<TableRow>,
}

impl Table {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Add a row to the table.
    pub fn add_row(&mut self, row: TableRow) {
        self.rows.push(row);
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get the number of columns (based on first row).
    pub fn column_count(&self) -> usize {
        self.rows.first().map(|r| r.cells.len()).unwrap_or(0)
    }

    /// Check if the table has no rows.
    ///
    /// A rowless table still renders as an (empty) table element; this is a
    /// structural check, not a rendering gate.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get plain text representation of the table.
    pub fn plain_text(&self) -> String {
        self.rows
            .iter()
            .map(|row| row.plain_text())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

/// A table row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableRow {
    /// Cells in the row
    pub cells: Vec<TableCell>,
}

impl TableRow {
    /// Create a new row with cells.
    pub fn new(cells: Vec<TableCell>) -> Self {
        Self { cells }
    }

    /// Create a row from text values.
    pub fn from_strings<S: Into<String>>(values: impl IntoIterator<Item = S>) -> Self {
        Self::new(values.into_iter().map(TableCell::text).collect())
    }

    /// Get plain text representation.
    pub fn plain_text(&self) -> String {
        self.cells
            .iter()
            .map(|c| c.plain_text())
            .collect::<Vec<_>>()
            .join("\t")
    }
}

/// A table cell holding a sequence of paragraph blocks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableCell {
    /// Paragraph blocks inside the cell
    pub blocks: Vec<Paragraph>,
}

impl TableCell {
    /// Create a new cell with a single plain text paragraph.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            blocks: vec![Paragraph::with_text(text)],
        }
    }

    /// Create an empty cell.
    pub fn empty() -> Self {
        Self { blocks: Vec::new() }
    }

    /// Create a cell with multiple paragraph blocks.
    pub fn with_blocks(blocks: Vec<Paragraph>) -> Self {
        Self { blocks }
    }

    /// Get the plain text of the cell: block texts concatenated in order,
    /// with no separators inserted between blocks.
    pub fn plain_text(&self) -> String {
        self.blocks.iter().map(|p| p.plain_text()).collect()
    }

    /// Check if the cell has no visible content.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty() || self.plain_text().trim().is_empty()
    }
}

impl Default for TableCell {
    fn default() -> Self {
        Self::empty()
    }
}
