use crate::datetime::{excel_serial_to_date, parse_date_text};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents a cell value in a sheet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

impl CellValue {
    /// Check if the value is null or a blank string
    #[must_use]
    pub fn is_null(&self) -> bool {
        match self {
            CellValue::Null => true,
            CellValue::String(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// Try to get the value as an integer.
    ///
    /// Floats only convert when they carry no fractional part.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            CellValue::Int(i) => Some(*i),
            CellValue::Float(f) if f.fract() == 0.0 && f.is_finite() => Some(*f as i64),
            CellValue::String(s) => {
                let cleaned = strip_thousands(s);
                cleaned.parse::<i64>().ok().or_else(|| {
                    cleaned
                        .parse::<f64>()
                        .ok()
                        .filter(|f| f.fract() == 0.0 && f.is_finite())
                        .map(|f| f as i64)
                })
            }
            CellValue::Float(_) | CellValue::Bool(_) | CellValue::Null => None,
        }
    }

    /// Try to get the value as a finite float
    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            CellValue::Float(f) => Some(*f).filter(|f| f.is_finite()),
            CellValue::Int(i) => Some(*i as f64),
            CellValue::String(s) => strip_thousands(s)
                .parse::<f64>()
                .ok()
                .filter(|f| f.is_finite()),
            CellValue::Bool(_) | CellValue::Null => None,
        }
    }

    /// Try to interpret the value as a calendar date.
    ///
    /// Numbers are Excel serial dates; text accepts ISO (`2025-01-31`,
    /// optionally with a time part) and US (`1/31/2025`) layouts.
    #[must_use]
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            CellValue::Float(f) => excel_serial_to_date(*f),
            CellValue::Int(i) => excel_serial_to_date(*i as f64),
            CellValue::String(s) => parse_date_text(s),
            CellValue::Bool(_) | CellValue::Null => None,
        }
    }

    /// Get the value as a string
    #[must_use]
    pub fn as_str(&self) -> String {
        match self {
            CellValue::Null => String::new(),
            CellValue::Bool(b) => b.to_string(),
            CellValue::Int(i) => i.to_string(),
            CellValue::Float(f) => f.to_string(),
            CellValue::String(s) => s.clone(),
        }
    }

    /// Short name of the stored variant, used in error messages.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            CellValue::Null => "empty",
            CellValue::Bool(_) => "bool",
            CellValue::Int(_) => "int",
            CellValue::Float(_) => "float",
            CellValue::String(_) => "text",
        }
    }
}

fn strip_thousands(s: &str) -> String {
    s.trim().chars().filter(|c| *c != ',').collect()
}

impl Default for CellValue {
    fn default() -> Self {
        CellValue::Null
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Null => write!(f, ""),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Int(i) => write!(f, "{i}"),
            CellValue::Float(fl) => write!(f, "{fl}"),
            CellValue::String(s) => write!(f, "{s}"),
        }
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

impl From<i64> for CellValue {
    fn from(i: i64) -> Self {
        CellValue::Int(i)
    }
}

impl From<i32> for CellValue {
    fn from(i: i32) -> Self {
        CellValue::Int(i64::from(i))
    }
}

impl From<f64> for CellValue {
    fn from(f: f64) -> Self {
        CellValue::Float(f)
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::String(s)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::String(s.to_string())
    }
}
