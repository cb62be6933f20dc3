use super::Reducer;
use crate::error::{DataRangeError, Dataset, ReduceError};
use crate::model::{Chart, ChartType, Contribution, LayoutSpan, Metric};
use chrono::{Datelike, NaiveDate};
use inreview_sheet::{RawSheet, Schema, Shape};
use std::collections::BTreeMap;

const DATE: &str = "Date";
const NEW_FOLLOWERS: &str = "New followers";

/// Row 0 holds the running follower total and row 1 is blank.
const HEADER_ROW: usize = 2;

pub const MONTHLY_FOLLOWERS: &str = "Average New Monthly Followers";
pub const TOTAL_FOLLOWERS: &str = "Total New Followers";

/// Sums new followers per calendar month of the review year.
#[derive(Debug, Clone)]
pub struct FollowersReducer {
    year: i32,
}

impl FollowersReducer {
    #[must_use]
    pub fn new(year: i32) -> Self {
        FollowersReducer { year }
    }
}

impl Reducer for FollowersReducer {
    fn dataset(&self) -> Dataset {
        Dataset::Followers
    }

    fn reduce(&self, sheet: &RawSheet) -> Result<Contribution, ReduceError> {
        let table = sheet
            .normalize(&Shape::header_at(HEADER_ROW))?
            .typed(&Schema::new().date(DATE).integer(NEW_FOLLOWERS))?;

        // keyed by month number so iteration is chronological
        let mut monthly: BTreeMap<u32, i64> = BTreeMap::new();
        for (date, &count) in table.dates(DATE)?.iter().zip(table.integers(NEW_FOLLOWERS)?) {
            if date.year() == self.year {
                let sum = monthly.entry(date.month()).or_default();
                *sum = sum.checked_add(count).ok_or_else(overflow)?;
            }
        }

        if monthly.is_empty() {
            return Err(DataRangeError::EmptySelection {
                table: sheet.name().to_string(),
                filter: format!("year {}", self.year),
            }
            .into());
        }

        let labels: Vec<String> = monthly.keys().map(|&m| month_name(self.year, m)).collect();
        let values: Vec<f64> = monthly.values().map(|&v| v as f64).collect();
        let total = monthly
            .values()
            .try_fold(0_i64, |acc, &v| acc.checked_add(v))
            .ok_or_else(overflow)?;
        let average = round_half_up(total as f64 / monthly.len() as f64);

        let chart = Chart::new(MONTHLY_FOLLOWERS, ChartType::Line, labels, values)?
            .with_span(LayoutSpan::FULL)
            .with_height(150);

        Ok(Contribution {
            metrics: vec![
                Metric::standard(MONTHLY_FOLLOWERS, average),
                Metric::standard(TOTAL_FOLLOWERS, total).with_span(LayoutSpan::TWO),
            ],
            charts: vec![chart],
        })
    }
}

fn overflow() -> DataRangeError {
    DataRangeError::Overflow {
        column: NEW_FOLLOWERS.to_string(),
    }
}

fn month_name(year: i32, month: u32) -> String {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d.format("%B").to_string())
        .unwrap_or_default()
}

fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}
