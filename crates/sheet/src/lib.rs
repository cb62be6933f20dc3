//! Sheet loading and normalization for inreview
//!
//! Reads the sheets of an analytics workbook into raw cell grids, then
//! re-slices them into header-named tables whose columns can be converted to
//! typed data in one validated step.
//!
//! # Examples
//!
//! ## Promoting an embedded header row
//!
//! ```
//! use inreview_sheet::{RawSheet, Schema, Shape};
//!
//! let sheet = RawSheet::from_data("FOLLOWERS", vec![
//!     vec!["Total followers on 12/31/2025:", "1200"],
//!     vec!["Date", "New followers"],
//!     vec!["1/1/2025", "3"],
//!     vec!["1/2/2025", "5"],
//! ]);
//!
//! let table = sheet.normalize(&Shape::embedded()).unwrap();
//! let typed = table
//!     .typed(&Schema::new().date("Date").integer("New followers"))
//!     .unwrap();
//!
//! assert_eq!(typed.integers("New followers").unwrap(), [3, 5]);
//! ```
//!
//! ## Side-by-side tables
//!
//! ```
//! use inreview_sheet::{RawSheet, Shape};
//!
//! let sheet = RawSheet::from_data("TOP POSTS", vec![
//!     vec!["Post", "Engagements", "", "Post", "Impressions"],
//!     vec!["a", "10", "", "b", "900"],
//! ]);
//!
//! let tables = sheet
//!     .split(&[
//!         Shape::header_at(0).with_columns(0..2),
//!         Shape::header_at(0).with_columns(3..5),
//!     ])
//!     .unwrap();
//!
//! assert_eq!(tables[1].headers()[1], "Impressions");
//! ```
//!
//! ## Loading a workbook
//!
//! ```no_run
//! use inreview_sheet::Book;
//!
//! let bytes = std::fs::read("export.xlsx").unwrap();
//! let load = Book::load_xlsx(&bytes, &["ENGAGEMENT", "FOLLOWERS"]);
//! for error in &load.errors {
//!     eprintln!("{error}");
//! }
//! ```

mod book;
mod cell;
mod datetime;
mod error;
mod shape;
mod sheet;
mod table;
mod xlsx;

/// Re-export book types.
pub use book::{Book, BookLoad};
/// Re-export cell value type.
pub use cell::CellValue;
/// Re-export date helpers.
pub use datetime::{excel_serial_to_date, parse_date_text};
/// Re-export error types.
pub use error::{LoadError, Result, StructuralError};
/// Re-export normalization shape.
pub use shape::Shape;
/// Re-export raw sheet type.
pub use sheet::RawSheet;
/// Re-export table types.
pub use table::{Column, ColumnType, Schema, Table, TypedTable};
