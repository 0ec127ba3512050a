use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MetricResult {
    pub passed: bool,
    pub score: f64,
    pub message: String,
}

impl MetricResult {
    pub fn pass(score: f64) -> Self {
        Self {
            passed: true,
            score,
            message: String::new(),
        }
    }

    pub fn fail(score: f64, message: &str) -> Self {
        Self {
            passed: false,
            score,
            message: message.to_string(),
        }
    }
}

/// Compares one predicted statement with its reference.
pub trait Metric: Send + Sync {
    fn name(&self) -> &'static str;
    fn evaluate(&self, predicted: &str, reference: &str) -> MetricResult;
}
