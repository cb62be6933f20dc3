use super::Reducer;
use crate::error::{Dataset, ReduceError};
use crate::model::{Contribution, Metric};
use indexmap::IndexMap;
use inreview_sheet::{RawSheet, Schema, Shape};
use tracing::{debug, warn};

const CATEGORY: &str = "Top Demographics";
const VALUE: &str = "Value";

/// Demographic categories that produce a pill list; anything else is skipped.
pub const RECOGNIZED_CATEGORIES: [&str; 4] = ["Job titles", "Locations", "Industries", "Companies"];

/// Lists the top values of each recognized demographic category.
///
/// Every row after the header counts, including the first data row.
#[derive(Debug, Clone, Default)]
pub struct DemographicsReducer;

impl DemographicsReducer {
    #[must_use]
    pub fn new() -> Self {
        DemographicsReducer
    }
}

impl Reducer for DemographicsReducer {
    fn dataset(&self) -> Dataset {
        Dataset::Demographics
    }

    fn reduce(&self, sheet: &RawSheet) -> Result<Contribution, ReduceError> {
        let table = sheet
            .normalize(&Shape::header_at(0))?
            .typed(&Schema::new().text(CATEGORY).text(VALUE))?;

        // categories in order of first appearance
        let mut grouped: IndexMap<&str, Vec<String>> = IndexMap::new();
        for (category, value) in table.texts(CATEGORY)?.iter().zip(table.texts(VALUE)?) {
            let values = grouped.entry(category.as_str()).or_default();
            if !value.is_empty() {
                values.push(value.clone());
            }
        }

        let mut metrics = Vec::new();
        for (category, values) in grouped {
            if !RECOGNIZED_CATEGORIES.contains(&category) {
                debug!(category, "skipping unrecognized demographic category");
                continue;
            }
            if values.is_empty() {
                warn!(category, "demographic category has no values");
                continue;
            }
            metrics.push(Metric::pill_list(format!("Engagement top {category}"), values)?);
        }

        Ok(Contribution::metrics(metrics))
    }
}
