use super::{first_max, Reducer};
use crate::error::{DataRangeError, Dataset, ReduceError};
use crate::model::{Contribution, Metric};
use chrono::{Datelike, NaiveDate};
use inreview_sheet::{RawSheet, Schema, Shape};
use tracing::debug;

const DATE: &str = "Date";
const IMPRESSIONS: &str = "Impressions";
const ENGAGEMENTS: &str = "Engagements";

/// Finds the best reach day and best engagement day of the review year.
#[derive(Debug, Clone)]
pub struct EngagementReducer {
    year: i32,
}

impl EngagementReducer {
    #[must_use]
    pub fn new(year: i32) -> Self {
        EngagementReducer { year }
    }
}

impl Reducer for EngagementReducer {
    fn dataset(&self) -> Dataset {
        Dataset::Engagement
    }

    fn reduce(&self, sheet: &RawSheet) -> Result<Contribution, ReduceError> {
        let table = sheet
            .normalize(&Shape::header_at(0))?
            .typed(&Schema::new().date(DATE).integer(IMPRESSIONS).integer(ENGAGEMENTS))?;

        let dates = table.dates(DATE)?;
        let impressions = table.integers(IMPRESSIONS)?;
        let engagements = table.integers(ENGAGEMENTS)?;

        let mut days: Vec<NaiveDate> = Vec::new();
        let mut reach: Vec<i64> = Vec::new();
        let mut engaged: Vec<i64> = Vec::new();
        for ((&date, &imp), &eng) in dates.iter().zip(impressions).zip(engagements) {
            if date.year() == self.year {
                days.push(date);
                reach.push(imp);
                engaged.push(eng);
            }
        }
        debug!(year = self.year, rows = days.len(), "filtered engagement rows");

        let (Some(top_reach), Some(top_engaged)) = (first_max(&reach), first_max(&engaged)) else {
            return Err(DataRangeError::EmptySelection {
                table: sheet.name().to_string(),
                filter: format!("year {}", self.year),
            }
            .into());
        };

        Ok(Contribution::metrics(vec![
            Metric::standard("Highest Reach Day", reach[top_reach])
                .with_sub_label(days[top_reach].to_string()),
            Metric::standard("Highest Engagement Day", engaged[top_engaged])
                .with_sub_label(days[top_engaged].to_string()),
        ]))
    }
}
