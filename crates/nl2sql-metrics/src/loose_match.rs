use nl2sql_core::metrics_api::{Metric, MetricResult};
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

static WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w+\b").expect("word pattern is valid"));

/// Lowercased set of word-character runs.
pub fn tokenize(sql: &str) -> BTreeSet<String> {
    let lower = sql.to_lowercase();
    WORD_RE
        .find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// True when every reference token also appears in the prediction.
pub fn loose_match(predicted: &str, reference: &str) -> bool {
    tokenize(reference).is_subset(&tokenize(predicted))
}

pub struct LooseMatchMetric;

impl Metric for LooseMatchMetric {
    fn name(&self) -> &'static str {
        "loose_match"
    }

    fn evaluate(&self, predicted: &str, reference: &str) -> MetricResult {
        let pred = tokenize(predicted);
        let missing: Vec<_> = tokenize(reference)
            .into_iter()
            .filter(|t| !pred.contains(t))
            .collect();

        if missing.is_empty() {
            MetricResult::pass(1.0)
        } else {
            MetricResult::fail(0.0, &format!("missing tokens: {}", missing.join(", ")))
        }
    }
}
