use thiserror::Error;

/// A required sheet could not be read from the workbook.
///
/// Load errors are per sheet: one failing sheet never stops the others from loading.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Workbook could not be opened while reading sheet '{sheet}': {message}")]
    Workbook { sheet: String, message: String },

    #[error("Sheet not found: {name}")]
    SheetNotFound { name: String },

    #[error("Sheet '{name}' is unreadable: {message}")]
    Unreadable { name: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LoadError {
    /// Name of the sheet this error belongs to, when there is one.
    #[must_use]
    pub fn sheet(&self) -> Option<&str> {
        match self {
            LoadError::Workbook { sheet, .. } => Some(sheet),
            LoadError::SheetNotFound { name } | LoadError::Unreadable { name, .. } => Some(name),
            LoadError::Io(_) => None,
        }
    }
}

/// A sheet's layout does not match the header/data structure expected of it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StructuralError {
    #[error("Header row out of bounds: {row} (sheet '{sheet}' has {count} rows)")]
    HeaderRowOutOfBounds {
        sheet: String,
        row: usize,
        count: usize,
    },

    #[error("Column range {start}..{end} out of bounds (sheet '{sheet}' has {count} columns)")]
    ColumnRangeOutOfBounds {
        sheet: String,
        start: usize,
        end: usize,
        count: usize,
    },

    #[error("Header row {row} of sheet '{sheet}' has no column names")]
    EmptyHeader { sheet: String, row: usize },

    #[error("Duplicate column name in sheet '{sheet}': {name}")]
    DuplicateColumnName { sheet: String, name: String },

    #[error("Column not found in sheet '{sheet}': {name}")]
    ColumnNotFound { sheet: String, name: String },

    #[error("Invalid value in column '{column}' at row {row}: expected {expected}, found {found}")]
    InvalidValue {
        column: String,
        row: usize,
        expected: &'static str,
        found: String,
    },

    #[error("Missing value in column '{column}' at row {row}")]
    MissingValue { column: String, row: usize },

    #[error("Column '{column}' is {actual}, not {expected}")]
    ColumnTypeMismatch {
        column: String,
        expected: &'static str,
        actual: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, StructuralError>;
