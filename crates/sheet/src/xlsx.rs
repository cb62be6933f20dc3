use crate::book::{Book, BookLoad};
use crate::cell::CellValue;
use crate::error::LoadError;
use crate::sheet::RawSheet;
use calamine::{Data, Range, Reader, Xlsx};
use std::io::Cursor;
use std::path::Path;
use tracing::{info, warn};

/// Convert calamine Data to CellValue
fn data_to_cell_value(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Null,
        Data::Bool(b) => CellValue::Bool(*b),
        Data::Int(i) => CellValue::Int(*i),
        Data::Float(f) => CellValue::Float(*f),
        Data::String(s) => CellValue::String(s.clone()),
        Data::DateTime(dt) => {
            // Excel stores dates as days since 1899-12-30
            CellValue::Float(dt.as_f64())
        }
        Data::DateTimeIso(s) => CellValue::String(s.clone()),
        Data::DurationIso(s) => CellValue::String(s.clone()),
        Data::Error(e) => CellValue::String(format!("#ERROR: {e:?}")),
    }
}

/// Build a sheet anchored at A1 from a calamine range.
///
/// calamine trims leading empty rows and columns from the used range; they are
/// padded back so that indices line up with spreadsheet positions.
fn range_to_sheet(name: &str, range: &Range<Data>) -> RawSheet {
    let Some((start_row, start_col)) = range.start() else {
        return RawSheet::with_name(name);
    };
    let width = start_col as usize + range.width();

    let mut data: Vec<Vec<CellValue>> = vec![vec![CellValue::Null; width]; start_row as usize];
    for row in range.rows() {
        let mut cells = vec![CellValue::Null; start_col as usize];
        cells.extend(row.iter().map(data_to_cell_value));
        data.push(cells);
    }

    RawSheet::from_data(name, data)
}

impl Book {
    /// Load the `required` sheets of an xlsx workbook held in memory.
    ///
    /// Every sheet is attempted independently; failures are collected in
    /// [`BookLoad::errors`] and the sheets that did load are still returned.
    #[must_use]
    pub fn load_xlsx(bytes: &[u8], required: &[&str]) -> BookLoad {
        let mut load = BookLoad::default();

        let mut workbook: Xlsx<Cursor<&[u8]>> = match Xlsx::new(Cursor::new(bytes)) {
            Ok(workbook) => workbook,
            Err(e) => {
                warn!("Unable to open workbook: {}", e);
                load.errors = required
                    .iter()
                    .map(|name| LoadError::Workbook {
                        sheet: (*name).to_string(),
                        message: e.to_string(),
                    })
                    .collect();
                return load;
            }
        };

        let available = workbook.sheet_names();
        for &name in required {
            if !available.iter().any(|s| s == name) {
                warn!("Sheet '{}' is missing from the workbook", name);
                load.errors.push(LoadError::SheetNotFound {
                    name: name.to_string(),
                });
                continue;
            }

            match workbook.worksheet_range(name) {
                Ok(range) => {
                    let sheet = range_to_sheet(name, &range);
                    info!(
                        sheet = name,
                        rows = sheet.row_count(),
                        cols = sheet.col_count(),
                        "loaded sheet"
                    );
                    load.book.insert_sheet(sheet);
                }
                Err(e) => {
                    warn!("Sheet '{}' could not be read: {}", name, e);
                    load.errors.push(LoadError::Unreadable {
                        name: name.to_string(),
                        message: e.to_string(),
                    });
                }
            }
        }

        load
    }

    /// Read an xlsx file fully into memory and load the `required` sheets.
    ///
    /// # Errors
    ///
    /// Returns error only if the file cannot be read; per-sheet problems are
    /// reported through [`BookLoad::errors`].
    pub fn open_xlsx<P: AsRef<Path>>(path: P, required: &[&str]) -> Result<BookLoad, LoadError> {
        let bytes = std::fs::read(path.as_ref())?;
        Ok(Self::load_xlsx(&bytes, required))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_xlsxwriter::Workbook;

    #[test]
    fn test_leading_gaps_are_restored() {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name("FOLLOWERS").unwrap();
        worksheet.write_string(2, 1, "Date").unwrap();
        worksheet.write_number(3, 1, 45658.0).unwrap();
        let bytes = workbook.save_to_buffer().unwrap();

        let load = Book::load_xlsx(&bytes, &["FOLLOWERS"]);
        assert!(load.errors.is_empty());

        let sheet = load.book.get_sheet("FOLLOWERS").unwrap();
        assert_eq!(sheet.row_count(), 4);
        assert_eq!(sheet.get(2, 1), Some(&CellValue::String("Date".to_string())));
        assert_eq!(sheet.get(3, 1), Some(&CellValue::Float(45658.0)));
        assert_eq!(sheet.get(0, 0), Some(&CellValue::Null));
    }

    #[test]
    fn test_not_a_workbook() {
        let load = Book::load_xlsx(b"definitely not a zip archive", &["A", "B"]);
        assert!(load.book.is_empty());
        assert_eq!(load.errors.len(), 2);
        assert!(load
            .errors
            .iter()
            .all(|e| matches!(e, LoadError::Workbook { .. })));
        assert_eq!(load.errors[1].sheet(), Some("B"));
    }
}
