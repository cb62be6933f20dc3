//! Dataset reducers: each turns one normalized sheet into metrics and charts.

mod demographics;
mod engagement;
mod followers;
mod posts;

pub use demographics::{DemographicsReducer, RECOGNIZED_CATEGORIES};
pub use engagement::EngagementReducer;
pub use followers::FollowersReducer;
pub use posts::PostsReducer;

use crate::error::{Dataset, ReduceError};
use crate::model::Contribution;
use inreview_sheet::RawSheet;

/// Reduces the raw sheet of one dataset into presentation records.
///
/// Reducers never see each other's output; the accumulator orders their
/// contributions.
pub trait Reducer {
    /// The dataset this reducer summarizes.
    fn dataset(&self) -> Dataset;

    /// Normalize `sheet` and summarize it.
    fn reduce(&self, sheet: &RawSheet) -> Result<Contribution, ReduceError>;
}

/// Index of the first maximum; earlier rows win ties.
fn first_max<T: PartialOrd + Copy>(values: &[T]) -> Option<usize> {
    let mut best: Option<(usize, T)> = None;
    for (i, &v) in values.iter().enumerate() {
        match best {
            Some((_, b)) if v <= b => {}
            _ => best = Some((i, v)),
        }
    }
    best.map(|(i, _)| i)
}

/// Arithmetic mean; `None` for an empty slice.
fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}
