use crate::cell::CellValue;
use crate::error::{Result, StructuralError};
use chrono::NaiveDate;
use indexmap::IndexMap;
use std::collections::HashMap;

/// Semantic type of a column a consumer expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnType {
    Date,
    Integer,
    Float,
    Text,
}

impl ColumnType {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            ColumnType::Date => "date",
            ColumnType::Integer => "integer",
            ColumnType::Float => "float",
            ColumnType::Text => "text",
        }
    }
}

/// The named, typed columns a consumer reads from a [`Table`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    columns: Vec<(String, ColumnType)>,
}

impl Schema {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn column(mut self, name: &str, ty: ColumnType) -> Self {
        self.columns.push((name.to_string(), ty));
        self
    }

    #[must_use]
    pub fn date(self, name: &str) -> Self {
        self.column(name, ColumnType::Date)
    }

    #[must_use]
    pub fn integer(self, name: &str) -> Self {
        self.column(name, ColumnType::Integer)
    }

    #[must_use]
    pub fn float(self, name: &str) -> Self {
        self.column(name, ColumnType::Float)
    }

    #[must_use]
    pub fn text(self, name: &str) -> Self {
        self.column(name, ColumnType::Text)
    }

    pub fn columns(&self) -> impl Iterator<Item = (&str, ColumnType)> {
        self.columns.iter().map(|(name, ty)| (name.as_str(), *ty))
    }
}

/// A table whose columns are named by a header row.
///
/// Cells stay untyped until [`Table::typed`] validates them against a [`Schema`].
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    name: String,
    headers: Vec<String>,
    column_index: HashMap<String, usize>,
    rows: Vec<Vec<CellValue>>,
    source_rows: Vec<usize>,
}

impl Table {
    pub(crate) fn new(
        name: &str,
        headers: Vec<String>,
        rows: Vec<Vec<CellValue>>,
        source_rows: Vec<usize>,
    ) -> Self {
        let column_index = headers
            .iter()
            .enumerate()
            .filter(|(_, h)| !h.is_empty())
            .map(|(i, h)| (h.clone(), i))
            .collect();
        Table {
            name: name.to_string(),
            headers,
            column_index,
            rows,
            source_rows,
        }
    }

    /// Name of the sheet the table came from
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Column names; unnamed columns are empty strings
    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row index in the originating sheet of body row `index`.
    #[must_use]
    pub fn source_row(&self, index: usize) -> Option<usize> {
        self.source_rows.get(index).copied()
    }

    /// Get the column index by name
    pub fn column_index(&self, name: &str) -> Result<usize> {
        self.column_index
            .get(name)
            .copied()
            .ok_or_else(|| StructuralError::ColumnNotFound {
                sheet: self.name.clone(),
                name: name.to_string(),
            })
    }

    /// Get all body values of a column by name
    pub fn column(&self, name: &str) -> Result<Vec<&CellValue>> {
        let idx = self.column_index(name)?;
        Ok(self.rows.iter().map(|row| &row[idx]).collect())
    }

    /// Convert the columns named in `schema` into typed columns.
    ///
    /// Every cell is checked; the first empty or unconvertible cell fails the
    /// whole conversion. Empty text cells are kept as empty strings.
    pub fn typed(&self, schema: &Schema) -> Result<TypedTable> {
        let mut columns = IndexMap::new();
        for (name, ty) in schema.columns() {
            let cells = self.column(name)?;
            let column = match ty {
                ColumnType::Date => Column::Date(self.convert(name, ty, &cells, CellValue::as_date)?),
                ColumnType::Integer => Column::Integer(self.convert(name, ty, &cells, CellValue::as_int)?),
                ColumnType::Float => Column::Float(self.convert(name, ty, &cells, CellValue::as_float)?),
                ColumnType::Text => Column::Text(cells.iter().map(|c| c.as_str().trim().to_string()).collect()),
            };
            columns.insert(name.to_string(), column);
        }

        Ok(TypedTable {
            name: self.name.clone(),
            len: self.rows.len(),
            columns,
        })
    }

    fn convert<T>(
        &self,
        column: &str,
        ty: ColumnType,
        cells: &[&CellValue],
        f: impl Fn(&CellValue) -> Option<T>,
    ) -> Result<Vec<T>> {
        cells
            .iter()
            .enumerate()
            .map(|(i, cell)| {
                // reported rows are 1-based, as a spreadsheet shows them
                let row = self.source_rows.get(i).map_or(i, |r| r + 1);
                if cell.is_null() {
                    return Err(StructuralError::MissingValue {
                        column: column.to_string(),
                        row,
                    });
                }
                f(*cell).ok_or_else(|| StructuralError::InvalidValue {
                    column: column.to_string(),
                    row,
                    expected: ty.name(),
                    found: format!("{} '{}'", cell.kind(), cell),
                })
            })
            .collect()
    }
}

/// One homogeneous column of a [`TypedTable`].
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    Date(Vec<NaiveDate>),
    Integer(Vec<i64>),
    Float(Vec<f64>),
    Text(Vec<String>),
}

impl Column {
    fn type_name(&self) -> &'static str {
        match self {
            Column::Date(_) => ColumnType::Date.name(),
            Column::Integer(_) => ColumnType::Integer.name(),
            Column::Float(_) => ColumnType::Float.name(),
            Column::Text(_) => ColumnType::Text.name(),
        }
    }
}

/// A table restricted to schema columns, each converted to its declared type.
#[derive(Debug, Clone, PartialEq)]
pub struct TypedTable {
    name: String,
    len: usize,
    columns: IndexMap<String, Column>,
}

impl TypedTable {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn dates(&self, name: &str) -> Result<&[NaiveDate]> {
        match self.get(name)? {
            Column::Date(v) => Ok(v),
            other => Err(mismatch(name, ColumnType::Date, other)),
        }
    }

    pub fn integers(&self, name: &str) -> Result<&[i64]> {
        match self.get(name)? {
            Column::Integer(v) => Ok(v),
            other => Err(mismatch(name, ColumnType::Integer, other)),
        }
    }

    pub fn floats(&self, name: &str) -> Result<&[f64]> {
        match self.get(name)? {
            Column::Float(v) => Ok(v),
            other => Err(mismatch(name, ColumnType::Float, other)),
        }
    }

    pub fn texts(&self, name: &str) -> Result<&[String]> {
        match self.get(name)? {
            Column::Text(v) => Ok(v),
            other => Err(mismatch(name, ColumnType::Text, other)),
        }
    }

    fn get(&self, name: &str) -> Result<&Column> {
        self.columns
            .get(name)
            .ok_or_else(|| StructuralError::ColumnNotFound {
                sheet: self.name.clone(),
                name: name.to_string(),
            })
    }
}

fn mismatch(name: &str, expected: ColumnType, actual: &Column) -> StructuralError {
    StructuralError::ColumnTypeMismatch {
        column: name.to_string(),
        expected: expected.name(),
        actual: actual.type_name(),
    }
}
