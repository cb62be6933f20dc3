use crate::model::RecordError;
use inreview_sheet::{LoadError, StructuralError};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// The semantic datasets a report is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dataset {
    Engagement,
    Posts,
    Followers,
    Demographics,
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Dataset::Engagement => "engagement",
            Dataset::Posts => "top posts",
            Dataset::Followers => "followers",
            Dataset::Demographics => "demographics",
        };
        f.write_str(name)
    }
}

/// A filter or ordering requirement left a reducer with nothing valid to summarize.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DataRangeError {
    #[error("No rows in {table} match {filter}")]
    EmptySelection { table: String, filter: String },

    #[error("Sum of column '{column}' overflows")]
    Overflow { column: String },

    #[error("Column '{column}' is not in descending order at row {row} ({value} follows {previous})")]
    NotDescending {
        column: String,
        row: usize,
        previous: f64,
        value: f64,
    },
}

/// Errors reading a [`ReviewConfig`](crate::ReviewConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Review year {0} is out of range")]
    InvalidYear(i32),
}

/// A failure recorded while building a report.
///
/// Each variant identifies the sheet or dataset that failed; the rest of the
/// report is still produced.
#[derive(Error, Debug)]
pub enum ReviewError {
    #[error("Unable to load sheet '{sheet}': {source}")]
    Load {
        sheet: String,
        #[source]
        source: LoadError,
    },

    #[error("Unexpected layout in {dataset} data: {source}")]
    Structural {
        dataset: Dataset,
        #[source]
        source: StructuralError,
    },

    #[error("Not enough {dataset} data: {source}")]
    DataRange {
        dataset: Dataset,
        #[source]
        source: DataRangeError,
    },

    #[error("Invalid {dataset} record: {source}")]
    Record {
        dataset: Dataset,
        #[source]
        source: RecordError,
    },
}

impl ReviewError {
    /// Dataset the error belongs to; load errors are keyed by sheet instead.
    #[must_use]
    pub fn dataset(&self) -> Option<Dataset> {
        match self {
            ReviewError::Load { .. } => None,
            ReviewError::Structural { dataset, .. }
            | ReviewError::DataRange { dataset, .. }
            | ReviewError::Record { dataset, .. } => Some(*dataset),
        }
    }
}

/// Error produced inside a single reducer, before it is tagged with its dataset.
#[derive(Error, Debug)]
pub enum ReduceError {
    #[error(transparent)]
    Structural(#[from] StructuralError),

    #[error(transparent)]
    DataRange(#[from] DataRangeError),

    #[error(transparent)]
    Record(#[from] RecordError),
}

impl ReduceError {
    pub(crate) fn for_dataset(self, dataset: Dataset) -> ReviewError {
        match self {
            ReduceError::Structural(source) => ReviewError::Structural { dataset, source },
            ReduceError::DataRange(source) => ReviewError::DataRange { dataset, source },
            ReduceError::Record(source) => ReviewError::Record { dataset, source },
        }
    }
}
