//! Presentation records produced by the reducers.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Problems constructing a [`Metric`] or [`Chart`] that would break its invariants.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("Layout span must be between 1 and 4, got {0}")]
    InvalidSpan(u8),

    #[error("Metric '{label}' has no value")]
    MissingValue { label: String },

    #[error("Pill list metric '{label}' has no pills")]
    EmptyPills { label: String },

    #[error("Chart '{title}' has {labels} labels but {values} values")]
    LengthMismatch {
        title: String,
        labels: usize,
        values: usize,
    },
}

/// Presentation width hint, 1 to 4 grid columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct LayoutSpan(u8);

impl LayoutSpan {
    pub const ONE: LayoutSpan = LayoutSpan(1);
    pub const TWO: LayoutSpan = LayoutSpan(2);
    pub const FULL: LayoutSpan = LayoutSpan(4);

    pub fn new(span: u8) -> Result<Self, RecordError> {
        if (1..=4).contains(&span) {
            Ok(LayoutSpan(span))
        } else {
            Err(RecordError::InvalidSpan(span))
        }
    }

    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for LayoutSpan {
    fn default() -> Self {
        LayoutSpan::ONE
    }
}

impl TryFrom<u8> for LayoutSpan {
    type Error = RecordError;

    fn try_from(span: u8) -> Result<Self, Self::Error> {
        LayoutSpan::new(span)
    }
}

impl From<LayoutSpan> for u8 {
    fn from(span: LayoutSpan) -> Self {
        span.0
    }
}

/// The value shown by a metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl MetricValue {
    /// Numeric view of the value, if it has one.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            MetricValue::Integer(i) => Some(*i as f64),
            MetricValue::Float(f) => Some(*f),
            MetricValue::Text(_) => None,
        }
    }

    /// Integer when `value` has no fractional part, float otherwise.
    #[must_use]
    pub fn number(value: f64) -> Self {
        if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
            MetricValue::Integer(value as i64)
        } else {
            MetricValue::Float(value)
        }
    }
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Integer(i) => write!(f, "{i}"),
            MetricValue::Float(v) => write!(f, "{v}"),
            MetricValue::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for MetricValue {
    fn from(i: i64) -> Self {
        MetricValue::Integer(i)
    }
}

impl From<f64> for MetricValue {
    fn from(f: f64) -> Self {
        MetricValue::Float(f)
    }
}

impl From<&str> for MetricValue {
    fn from(s: &str) -> Self {
        MetricValue::Text(s.to_string())
    }
}

impl From<String> for MetricValue {
    fn from(s: String) -> Self {
        MetricValue::Text(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    #[default]
    Standard,
    PillList,
}

/// One summary datum destined for display.
///
/// Built through [`Metric::standard`] or [`Metric::pill_list`], which keep a
/// standard metric's value present and a pill list non-empty. Deserializing
/// goes through the same checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MetricRecord")]
pub struct Metric {
    pub label: String,
    pub value: Option<MetricValue>,
    pub sub_label: Option<String>,
    pub kind: MetricKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pills: Vec<String>,
    pub layout_span: LayoutSpan,
}

impl Metric {
    pub fn standard(label: impl Into<String>, value: impl Into<MetricValue>) -> Self {
        Metric {
            label: label.into(),
            value: Some(value.into()),
            sub_label: None,
            kind: MetricKind::Standard,
            pills: Vec::new(),
            layout_span: LayoutSpan::ONE,
        }
    }

    pub fn pill_list(label: impl Into<String>, pills: Vec<String>) -> Result<Self, RecordError> {
        let label = label.into();
        if pills.is_empty() {
            return Err(RecordError::EmptyPills { label });
        }
        Ok(Metric {
            label,
            value: None,
            sub_label: None,
            kind: MetricKind::PillList,
            pills,
            layout_span: LayoutSpan::ONE,
        })
    }

    #[must_use]
    pub fn with_sub_label(mut self, sub_label: impl Into<String>) -> Self {
        self.sub_label = Some(sub_label.into());
        self
    }

    #[must_use]
    pub fn with_span(mut self, span: LayoutSpan) -> Self {
        self.layout_span = span;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartType {
    #[default]
    Line,
}

/// A labelled numeric series destined for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ChartRecord")]
pub struct Chart {
    pub title: String,
    #[serde(rename = "type")]
    pub chart_type: ChartType,
    pub layout_span: LayoutSpan,
    pub height: u32,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl Chart {
    /// Build a chart; `labels` and `values` must be the same length.
    pub fn new(
        title: impl Into<String>,
        chart_type: ChartType,
        labels: Vec<String>,
        values: Vec<f64>,
    ) -> Result<Self, RecordError> {
        let title = title.into();
        if labels.len() != values.len() {
            return Err(RecordError::LengthMismatch {
                title,
                labels: labels.len(),
                values: values.len(),
            });
        }
        Ok(Chart {
            title,
            chart_type,
            layout_span: LayoutSpan::FULL,
            height: 150,
            labels,
            values,
        })
    }

    #[must_use]
    pub fn with_span(mut self, span: LayoutSpan) -> Self {
        self.layout_span = span;
        self
    }

    #[must_use]
    pub fn with_height(mut self, height: u32) -> Self {
        self.height = height;
        self
    }
}

/// Unchecked wire form of a [`Metric`].
#[derive(Deserialize)]
struct MetricRecord {
    label: String,
    value: Option<MetricValue>,
    sub_label: Option<String>,
    #[serde(default)]
    kind: MetricKind,
    #[serde(default)]
    pills: Vec<String>,
    layout_span: LayoutSpan,
}

impl TryFrom<MetricRecord> for Metric {
    type Error = RecordError;

    fn try_from(record: MetricRecord) -> Result<Self, RecordError> {
        let metric = match record.kind {
            MetricKind::Standard => {
                let value = record
                    .value
                    .ok_or(RecordError::MissingValue { label: record.label.clone() })?;
                Metric::standard(record.label, value)
            }
            MetricKind::PillList => Metric::pill_list(record.label, record.pills)?,
        };
        let metric = metric.with_span(record.layout_span);
        Ok(match record.sub_label {
            Some(sub_label) => metric.with_sub_label(sub_label),
            None => metric,
        })
    }
}

/// Unchecked wire form of a [`Chart`].
#[derive(Deserialize)]
struct ChartRecord {
    title: String,
    #[serde(rename = "type")]
    chart_type: ChartType,
    layout_span: LayoutSpan,
    height: u32,
    labels: Vec<String>,
    values: Vec<f64>,
}

impl TryFrom<ChartRecord> for Chart {
    type Error = RecordError;

    fn try_from(record: ChartRecord) -> Result<Self, RecordError> {
        Ok(Chart::new(record.title, record.chart_type, record.labels, record.values)?
            .with_span(record.layout_span)
            .with_height(record.height))
    }
}

/// The records one reducer contributes, in the order it emits them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Contribution {
    pub metrics: Vec<Metric>,
    pub charts: Vec<Chart>,
}

impl Contribution {
    #[must_use]
    pub fn metrics(metrics: Vec<Metric>) -> Self {
        Contribution {
            metrics,
            charts: Vec::new(),
        }
    }
}

/// The final output: ordered metrics plus ordered charts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub metrics: Vec<Metric>,
    pub charts: Vec<Chart>,
}

impl Summary {
    /// Find a metric by label
    #[must_use]
    pub fn metric(&self, label: &str) -> Option<&Metric> {
        self.metrics.iter().find(|m| m.label == label)
    }

    /// Find a chart by title
    #[must_use]
    pub fn chart(&self, title: &str) -> Option<&Chart> {
        self.charts.iter().find(|c| c.title == title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_bounds() {
        assert!(LayoutSpan::new(0).is_err());
        assert_eq!(LayoutSpan::new(3).unwrap().get(), 3);
        assert_eq!(LayoutSpan::new(5), Err(RecordError::InvalidSpan(5)));

        let parsed: Result<LayoutSpan, _> = serde_json::from_str("7");
        assert!(parsed.is_err());
    }

    #[test]
    fn test_pill_list_requires_pills() {
        let err = Metric::pill_list("Engagement top Locations", Vec::new()).unwrap_err();
        assert!(matches!(err, RecordError::EmptyPills { .. }));

        let metric = Metric::pill_list("Engagement top Locations", vec!["US".to_string()]).unwrap();
        assert_eq!(metric.kind, MetricKind::PillList);
        assert!(metric.value.is_none());
    }

    #[test]
    fn test_chart_lengths() {
        let err = Chart::new("Followers", ChartType::Line, vec!["January".to_string()], vec![])
            .unwrap_err();
        assert!(matches!(err, RecordError::LengthMismatch { labels: 1, values: 0, .. }));
    }

    #[test]
    fn test_number_value() {
        assert_eq!(MetricValue::number(1500.0), MetricValue::Integer(1500));
        assert_eq!(MetricValue::number(12.5), MetricValue::Float(12.5));
    }

    #[test]
    fn test_metric_json_shape() {
        let metric = Metric::standard("Highest Reach Day", 200_i64).with_sub_label("2025-02-01");
        let json = serde_json::to_value(&metric).unwrap();

        assert_eq!(json["value"], 200);
        assert_eq!(json["kind"], "standard");
        assert_eq!(json["layout_span"], 1);
        assert!(json.get("pills").is_none());
    }

    #[test]
    fn test_deserialize_checks_invariants() {
        let no_value = r#"{"label": "Mean Reach", "value": null, "sub_label": null,
            "kind": "standard", "layout_span": 1}"#;
        let err = serde_json::from_str::<Metric>(no_value).unwrap_err();
        assert!(err.to_string().contains("has no value"));

        let no_pills = r#"{"label": "Engagement top Locations", "value": null,
            "sub_label": null, "kind": "pill_list", "pills": [], "layout_span": 1}"#;
        assert!(serde_json::from_str::<Metric>(no_pills).is_err());

        let chart = r#"{"title": "Followers", "type": "line", "layout_span": 4,
            "height": 150, "labels": ["January"], "values": []}"#;
        assert!(serde_json::from_str::<Chart>(chart).is_err());
    }

    #[test]
    fn test_summary_json_round_trip() {
        let summary = Summary {
            metrics: vec![
                Metric::standard("Total New Followers", 30_i64).with_span(LayoutSpan::TWO),
                Metric::pill_list("Engagement top Locations", vec!["US".to_string()]).unwrap(),
            ],
            charts: vec![Chart::new(
                "Average New Monthly Followers",
                ChartType::Line,
                vec!["January".to_string()],
                vec![10.0],
            )
            .unwrap()],
        };
        let json = serde_json::to_string(&summary).unwrap();
        assert_eq!(serde_json::from_str::<Summary>(&json).unwrap(), summary);
    }
}
