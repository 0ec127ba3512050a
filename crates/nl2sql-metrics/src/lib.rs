use std::sync::Arc;

use nl2sql_core::engine::scorer::Scorer;
use nl2sql_core::metrics_api::Metric;

mod exact_match;
mod loose_match;

pub use exact_match::{exact_match, ExactMatchMetric};
pub use loose_match::{loose_match, tokenize, LooseMatchMetric};

pub fn default_metrics() -> Vec<Arc<dyn Metric>> {
    vec![Arc::new(LooseMatchMetric), Arc::new(ExactMatchMetric)]
}

/// Looks a metric up by its `name()`, accepting the short forms `loose` and `exact`.
pub fn metric_by_name(name: &str) -> Option<Arc<dyn Metric>> {
    let wanted = match name {
        "loose" => "loose_match",
        "exact" => "exact_match",
        other => other,
    };
    default_metrics().into_iter().find(|m| m.name() == wanted)
}

/// Fraction of references matched loosely by the prediction at the same position.
pub fn accuracy(predictions: &[Option<String>], references: &[String]) -> f64 {
    Scorer::new(Arc::new(LooseMatchMetric))
        .score(predictions, references)
        .accuracy
}
