use crate::cell::CellValue;

/// A sheet as read from the workbook: a grid of cells with no header assumed.
///
/// Row and column indices are anchored at cell A1, so index 4 is always
/// spreadsheet column E regardless of where the used range begins.
#[derive(Debug, Clone, PartialEq)]
pub struct RawSheet {
    name: String,
    data: Vec<Vec<CellValue>>,
}

impl RawSheet {
    /// Create a new empty sheet with a name
    #[must_use]
    pub fn with_name(name: &str) -> Self {
        RawSheet {
            name: name.to_string(),
            data: Vec::new(),
        }
    }

    /// Create a sheet from a 2D vector of values
    #[must_use]
    pub fn from_data<T: Into<CellValue>>(name: &str, data: Vec<Vec<T>>) -> Self {
        let data = data
            .into_iter()
            .map(|row| row.into_iter().map(Into::into).collect())
            .collect();
        RawSheet {
            name: name.to_string(),
            data,
        }
    }

    /// Get the sheet name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the number of rows
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.data.len()
    }

    /// Get the number of columns (width of the widest row)
    #[must_use]
    pub fn col_count(&self) -> usize {
        self.data.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Check if the sheet is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get a cell by row and column index (0-based). Cells past the end of a
    /// short row read as `Null`.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&CellValue> {
        const NULL: &CellValue = &CellValue::Null;
        let cells = self.data.get(row)?;
        Some(cells.get(col).unwrap_or(NULL))
    }

    /// Get a row by index
    #[must_use]
    pub fn row(&self, index: usize) -> Option<&[CellValue]> {
        self.data.get(index).map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ragged_rows() {
        let sheet = RawSheet::from_data(
            "Data",
            vec![
                vec![CellValue::from("a"), CellValue::from("b"), CellValue::from("c")],
                vec![CellValue::from(1)],
            ],
        );

        assert_eq!(sheet.name(), "Data");
        assert_eq!(sheet.row_count(), 2);
        assert_eq!(sheet.col_count(), 3);
        assert_eq!(sheet.get(1, 0), Some(&CellValue::Int(1)));
        assert_eq!(sheet.get(1, 2), Some(&CellValue::Null));
        assert_eq!(sheet.get(2, 0), None);
    }

    #[test]
    fn test_empty_sheet() {
        let sheet = RawSheet::with_name("Empty");
        assert!(sheet.is_empty());
        assert_eq!(sheet.col_count(), 0);
        assert!(sheet.row(0).is_none());
    }
}
