use nl2sql_core::metrics_api::{Metric, MetricResult};

fn normalize(sql: &str) -> String {
    sql.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .trim_end_matches(';')
        .trim_end()
        .to_lowercase()
}

/// Case-insensitive equality after collapsing whitespace and dropping a trailing `;`.
pub fn exact_match(predicted: &str, reference: &str) -> bool {
    normalize(predicted) == normalize(reference)
}

pub struct ExactMatchMetric;

impl Metric for ExactMatchMetric {
    fn name(&self) -> &'static str {
        "exact_match"
    }

    fn evaluate(&self, predicted: &str, reference: &str) -> MetricResult {
        if exact_match(predicted, reference) {
            MetricResult::pass(1.0)
        } else {
            MetricResult::fail(0.0, "statement differs from reference")
        }
    }
}
