use crate::model::{Contribution, LayoutSpan, Metric, Summary};

/// Folds reducer contributions into a [`Summary`], in the order they are appended.
///
/// A full-width banner metric carrying the report title always comes first.
#[derive(Debug, Clone)]
pub struct Accumulator {
    summary: Summary,
}

impl Accumulator {
    pub fn new(title: impl Into<String>) -> Self {
        let banner = Metric::standard("", title.into()).with_span(LayoutSpan::FULL);
        Accumulator {
            summary: Summary {
                metrics: vec![banner],
                charts: Vec::new(),
            },
        }
    }

    pub fn append(&mut self, contribution: Contribution) {
        self.summary.metrics.extend(contribution.metrics);
        self.summary.charts.extend(contribution.charts);
    }

    #[must_use]
    pub fn finish(self) -> Summary {
        self.summary
    }
}
