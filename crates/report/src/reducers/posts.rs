use super::{mean, Reducer};
use crate::error::{DataRangeError, Dataset, ReduceError};
use crate::model::{Contribution, Metric, MetricValue};
use inreview_sheet::{RawSheet, Schema, Shape, TypedTable};

const ENGAGEMENTS: &str = "Engagements";
const IMPRESSIONS: &str = "Impressions";

/// Row 0 holds the export note and row 1 is blank; the headers sit on row 2.
const HEADER_ROW: usize = 2;
const ENGAGEMENT_COLUMNS: std::ops::Range<usize> = 0..3;
const REACH_COLUMNS: std::ops::Range<usize> = 4..7;

/// Averages reach and engagement over the top posts and reports the top post's reach.
///
/// The export lists posts by impressions, highest first. That order is
/// checked rather than trusted: an out-of-order reach table fails with
/// [`DataRangeError::NotDescending`] instead of reporting the wrong top post.
#[derive(Debug, Clone, Default)]
pub struct PostsReducer;

impl PostsReducer {
    #[must_use]
    pub fn new() -> Self {
        PostsReducer
    }
}

impl Reducer for PostsReducer {
    fn dataset(&self) -> Dataset {
        Dataset::Posts
    }

    fn reduce(&self, sheet: &RawSheet) -> Result<Contribution, ReduceError> {
        let tables = sheet.split(&[
            Shape::header_at(HEADER_ROW).with_columns(ENGAGEMENT_COLUMNS),
            Shape::header_at(HEADER_ROW).with_columns(REACH_COLUMNS),
        ])?;
        let engagement = tables[0].typed(&Schema::new().float(ENGAGEMENTS))?;
        let reach = tables[1].typed(&Schema::new().float(IMPRESSIONS))?;

        let engagements = engagement.floats(ENGAGEMENTS)?;
        let impressions = reach.floats(IMPRESSIONS)?;

        let mean_engagement =
            mean(engagements).ok_or_else(|| empty_selection(&engagement, ENGAGEMENTS))?;
        let (Some(mean_reach), Some(&top_reach)) = (mean(impressions), impressions.first()) else {
            return Err(empty_selection(&reach, IMPRESSIONS).into());
        };
        ensure_descending(IMPRESSIONS, impressions, |i| tables[1].source_row(i))?;

        Ok(Contribution::metrics(vec![
            Metric::standard("Mean Reach", mean_reach),
            Metric::standard("Mean Engagement", mean_engagement),
            Metric::standard("Top Post Reach", MetricValue::number(top_reach)),
        ]))
    }
}

fn empty_selection(table: &TypedTable, column: &str) -> DataRangeError {
    DataRangeError::EmptySelection {
        table: table.name().to_string(),
        filter: format!("a non-empty '{column}' column"),
    }
}

fn ensure_descending(
    column: &str,
    values: &[f64],
    source_row: impl Fn(usize) -> Option<usize>,
) -> Result<(), DataRangeError> {
    for (i, pair) in values.windows(2).enumerate() {
        if pair[1] > pair[0] {
            return Err(DataRangeError::NotDescending {
                column: column.to_string(),
                row: source_row(i + 1).map_or(i + 1, |r| r + 1),
                previous: pair[0],
                value: pair[1],
            });
        }
    }
    Ok(())
}
