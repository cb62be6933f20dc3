//! Year-in-review summaries of LinkedIn analytics exports
//!
//! A [`ReviewPipeline`] loads the export workbook, hands each dataset sheet
//! to its [`Reducer`](reducers::Reducer), and folds the resulting metrics and
//! charts into one ordered [`Summary`]. A dataset that fails is reported in
//! [`Report::errors`] and left out; the others still contribute.
//!
//! # Example
//!
//! ```no_run
//! use inreview_report::{Renderer, ReviewConfig, ReviewPipeline, TemplateContext};
//!
//! let config = ReviewConfig::for_year(2025);
//! let bytes = std::fs::read("Content_2025.xlsx").unwrap();
//! let report = ReviewPipeline::new(config).run(&bytes);
//!
//! for error in &report.errors {
//!     eprintln!("{error}");
//! }
//! let context = TemplateContext.render(&report.summary).unwrap();
//! println!("{context}");
//! ```

mod accumulator;
mod config;
mod error;
mod model;
mod pipeline;
pub mod reducers;
mod render;

pub use accumulator::Accumulator;
pub use config::{ReviewConfig, SheetNames, DEFAULT_YEAR};
pub use error::{ConfigError, DataRangeError, Dataset, ReduceError, ReviewError};
pub use model::{
    Chart, ChartType, Contribution, LayoutSpan, Metric, MetricKind, MetricValue, RecordError,
    Summary,
};
pub use pipeline::{Report, ReviewPipeline};
pub use render::{Renderer, TemplateContext};
