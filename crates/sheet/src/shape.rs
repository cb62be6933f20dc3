//! Re-slicing raw sheets into header-named tables.
//!
//! Analytics exports rarely put the header in row 0: there is usually a title
//! or banner row first, and some sheets place several tables side by side.
//! A [`Shape`] states where the header row is and, optionally, which columns
//! belong to the table.

use crate::cell::CellValue;
use crate::error::{Result, StructuralError};
use crate::sheet::RawSheet;
use crate::table::Table;
use std::collections::HashMap;
use std::ops::Range;
use tracing::debug;

/// Describes where a table sits inside a raw sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    /// Row holding the column names.
    pub header_row: usize,
    /// First row of the data body.
    pub data_start: usize,
    /// Columns belonging to the table; `None` means every column.
    pub columns: Option<Range<usize>>,
}

impl Shape {
    /// Header at `row`, data immediately below it.
    #[must_use]
    pub fn header_at(row: usize) -> Self {
        Shape {
            header_row: row,
            data_start: row + 1,
            columns: None,
        }
    }

    /// Row 0 is a title, row 1 holds the column names, data starts at row 2.
    #[must_use]
    pub fn embedded() -> Self {
        Self::header_at(1)
    }

    /// Restrict the table to a column range (side-by-side sub-tables).
    #[must_use]
    pub fn with_columns(mut self, columns: Range<usize>) -> Self {
        self.columns = Some(columns);
        self
    }
}

impl RawSheet {
    /// Normalize the sheet into a table according to `shape`.
    ///
    /// Body rows that are empty across the table's columns are dropped.
    pub fn normalize(&self, shape: &Shape) -> Result<Table> {
        if shape.header_row >= self.row_count() {
            return Err(StructuralError::HeaderRowOutOfBounds {
                sheet: self.name().to_string(),
                row: shape.header_row,
                count: self.row_count(),
            });
        }

        let width = self.col_count();
        let columns = shape.columns.clone().unwrap_or(0..width);
        if columns.is_empty() || columns.end > width {
            return Err(StructuralError::ColumnRangeOutOfBounds {
                sheet: self.name().to_string(),
                start: columns.start,
                end: columns.end,
                count: width,
            });
        }

        let headers = self.header_names(shape.header_row, &columns)?;

        let mut rows = Vec::new();
        let mut source_rows = Vec::new();
        for row_idx in shape.data_start.max(shape.header_row + 1)..self.row_count() {
            let cells: Vec<CellValue> = columns
                .clone()
                .map(|col| self.get(row_idx, col).cloned().unwrap_or_default())
                .collect();
            if cells.iter().all(CellValue::is_null) {
                continue;
            }
            rows.push(cells);
            source_rows.push(row_idx);
        }

        debug!(
            sheet = self.name(),
            header_row = shape.header_row,
            columns = ?columns,
            rows = rows.len(),
            "normalized sheet"
        );

        Ok(Table::new(self.name(), headers, rows, source_rows))
    }

    /// Normalize several side-by-side tables out of one sheet, one per shape.
    pub fn split(&self, shapes: &[Shape]) -> Result<Vec<Table>> {
        shapes.iter().map(|shape| self.normalize(shape)).collect()
    }

    fn header_names(&self, row: usize, columns: &Range<usize>) -> Result<Vec<String>> {
        let names: Vec<String> = columns
            .clone()
            .map(|col| {
                self.get(row, col)
                    .map(|c| c.as_str().trim().to_string())
                    .unwrap_or_default()
            })
            .collect();

        if names.iter().all(String::is_empty) {
            return Err(StructuralError::EmptyHeader {
                sheet: self.name().to_string(),
                row,
            });
        }

        let mut seen = HashMap::new();
        for (i, name) in names.iter().enumerate() {
            if name.is_empty() {
                continue;
            }
            if seen.insert(name.as_str(), i).is_some() {
                return Err(StructuralError::DuplicateColumnName {
                    sheet: self.name().to_string(),
                    name: name.clone(),
                });
            }
        }

        Ok(names)
    }
}
