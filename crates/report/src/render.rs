//! Turning a [`Summary`] into what a dashboard template consumes.

use crate::model::{ChartType, LayoutSpan, MetricKind, MetricValue, Summary};
use serde::Serialize;
use serde_json::Value;

/// Consumer of a finished summary, such as an HTML template or an image exporter.
pub trait Renderer {
    type Output;
    type Error: std::error::Error;

    fn render(&self, summary: &Summary) -> Result<Self::Output, Self::Error>;
}

/// Produces the `{metrics, charts}` JSON context a dashboard template is rendered with.
///
/// Spans become `span-N` CSS classes and numeric values are formatted for
/// display with thousands separators.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateContext;

#[derive(Serialize)]
struct Context<'a> {
    metrics: Vec<MetricView<'a>>,
    charts: Vec<ChartView<'a>>,
}

#[derive(Serialize)]
struct MetricView<'a> {
    label: &'a str,
    value: Option<String>,
    sub_label: Option<&'a str>,
    #[serde(rename = "type")]
    kind: MetricKind,
    pills: &'a [String],
    span_class: String,
}

#[derive(Serialize)]
struct ChartView<'a> {
    title: &'a str,
    #[serde(rename = "type")]
    chart_type: ChartType,
    span_class: String,
    height: u32,
    labels: &'a [String],
    values: &'a [f64],
}

impl Renderer for TemplateContext {
    type Output = Value;
    type Error = serde_json::Error;

    fn render(&self, summary: &Summary) -> Result<Value, serde_json::Error> {
        let context = Context {
            metrics: summary
                .metrics
                .iter()
                .map(|m| MetricView {
                    label: &m.label,
                    value: m.value.as_ref().map(display_value),
                    sub_label: m.sub_label.as_deref(),
                    kind: m.kind,
                    pills: &m.pills,
                    span_class: span_class(m.layout_span),
                })
                .collect(),
            charts: summary
                .charts
                .iter()
                .map(|c| ChartView {
                    title: &c.title,
                    chart_type: c.chart_type,
                    span_class: span_class(c.layout_span),
                    height: c.height,
                    labels: &c.labels,
                    values: &c.values,
                })
                .collect(),
        };
        serde_json::to_value(context)
    }
}

fn span_class(span: LayoutSpan) -> String {
    format!("span-{}", span.get())
}

fn display_value(value: &MetricValue) -> String {
    match value {
        MetricValue::Text(s) => s.clone(),
        number => group_thousands(&number.to_string()),
    }
}

/// Insert `,` between groups of three integer digits: `1234567.5` -> `1,234,567.5`.
fn group_thousands(number: &str) -> String {
    let (sign, unsigned) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number),
    };
    let (int_part, frac_part) = match unsigned.find('.') {
        Some(dot) => unsigned.split_at(dot),
        None => (unsigned, ""),
    };
    if !int_part.bytes().all(|b| b.is_ascii_digit()) {
        return number.to_string();
    }

    let mut grouped = String::with_capacity(number.len() + int_part.len() / 3);
    grouped.push_str(sign);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped.push_str(frac_part);
    grouped
}
