use crate::accumulator::Accumulator;
use crate::config::ReviewConfig;
use crate::error::ReviewError;
use crate::model::Summary;
use crate::reducers::{
    DemographicsReducer, EngagementReducer, FollowersReducer, PostsReducer, Reducer,
};
use inreview_sheet::{Book, BookLoad, LoadError};
use std::path::Path;
use tracing::{info, warn};

/// Output of one pipeline run: whatever could be summarized, plus every error
/// that kept a sheet or dataset out of it.
#[derive(Debug)]
pub struct Report {
    pub summary: Summary,
    pub errors: Vec<ReviewError>,
}

impl Report {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Builds a review [`Summary`] from an analytics export.
#[derive(Debug, Clone, Default)]
pub struct ReviewPipeline {
    config: ReviewConfig,
}

impl ReviewPipeline {
    #[must_use]
    pub fn new(config: ReviewConfig) -> Self {
        ReviewPipeline { config }
    }

    #[must_use]
    pub fn config(&self) -> &ReviewConfig {
        &self.config
    }

    /// Run over xlsx bytes.
    #[must_use]
    pub fn run(&self, bytes: &[u8]) -> Report {
        self.run_book(Book::load_xlsx(bytes, &self.config.sheets.required()))
    }

    /// Run over an xlsx file.
    pub fn run_path<P: AsRef<Path>>(&self, path: P) -> Result<Report, LoadError> {
        let load = Book::open_xlsx(path, &self.config.sheets.required())?;
        Ok(self.run_book(load))
    }

    /// Run over an already loaded workbook.
    ///
    /// Datasets are reduced in a fixed order (engagement, top posts,
    /// followers, demographics) and a failure in one never stops the others.
    #[must_use]
    pub fn run_book(&self, load: BookLoad) -> Report {
        info!(year = self.config.year, sheets = load.book.sheet_count(), "building review");

        let mut errors: Vec<ReviewError> = load
            .errors
            .into_iter()
            .map(|source| ReviewError::Load {
                sheet: source.sheet().unwrap_or_default().to_string(),
                source,
            })
            .collect();

        let sheets = &self.config.sheets;
        let year = self.config.year;
        let reducers: [(&str, Box<dyn Reducer>); 4] = [
            (sheets.engagement.as_str(), Box::new(EngagementReducer::new(year))),
            (sheets.top_posts.as_str(), Box::new(PostsReducer::new())),
            (sheets.followers.as_str(), Box::new(FollowersReducer::new(year))),
            (sheets.demographics.as_str(), Box::new(DemographicsReducer::new())),
        ];

        let mut acc = Accumulator::new(self.config.title());
        for (sheet_name, reducer) in &reducers {
            // a sheet that failed to load already has its error recorded
            let Some(sheet) = load.book.get_sheet(sheet_name) else {
                continue;
            };
            match reducer.reduce(sheet) {
                Ok(contribution) => acc.append(contribution),
                Err(e) => {
                    let error = e.for_dataset(reducer.dataset());
                    warn!("{}", error);
                    errors.push(error);
                }
            }
        }

        let summary = acc.finish();
        info!(
            metrics = summary.metrics.len(),
            charts = summary.charts.len(),
            errors = errors.len(),
            "review built"
        );
        Report { summary, errors }
    }
}
